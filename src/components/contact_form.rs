//! Contact form — three fields, mailto submission, and clear.

use leptos::prelude::*;

use crate::state::contact::{self, ContactDraft, ContactStatus};

/// Message form. Submit builds the mailto deep link from the draft and
/// navigates to it; no network call happens. Field values survive a send so
/// the visitor can resend; Clear wipes them and the sent acknowledgment.
#[component]
pub fn ContactForm(email: String) -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());
    let status = RwSignal::new(ContactStatus::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let href = contact::mailto_href(&email, &draft.get());
        #[cfg(feature = "browser")]
        {
            log::debug!("handing off to the mail client");
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&href);
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = href;
        }
        status.set(ContactStatus::Sent);
    };

    let clear = move |_| {
        draft.set(ContactDraft::default());
        status.set(ContactStatus::Editing);
    };

    view! {
        <form class="contact-form" aria-label="Contact form" on:submit=submit>
            <input
                class="contact-form__input"
                type="text"
                placeholder="Your name"
                aria-label="Your name"
                prop:value=move || draft.get().name
                on:input=move |ev| {
                    draft.update(|d| d.name = event_target_value(&ev));
                }
            />
            <input
                class="contact-form__input"
                type="text"
                placeholder="Subject"
                aria-label="Subject"
                prop:value=move || draft.get().subject
                on:input=move |ev| {
                    draft.update(|d| d.subject = event_target_value(&ev));
                }
            />
            <textarea
                class="contact-form__input contact-form__message"
                placeholder="Your message..."
                aria-label="Message"
                rows=4
                prop:value=move || draft.get().message
                on:input=move |ev| {
                    draft.update(|d| d.message = event_target_value(&ev));
                }
            ></textarea>

            <div class="contact-form__actions">
                <button class="btn btn--primary" type="submit">
                    "Send Message"
                </button>
                <button class="btn" type="button" on:click=clear>
                    "Clear"
                </button>
            </div>

            <Show when=move || status.get() == ContactStatus::Sent>
                <p class="contact-form__sent">
                    "Opening your email client to send your message..."
                </p>
            </Show>
        </form>
    }
}
