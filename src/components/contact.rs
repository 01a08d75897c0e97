//! Contact section — email/social info box beside the message form.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::content;
use crate::util::clipboard;

#[component]
pub fn ContactSection() -> impl IntoView {
    let profile = content::profile();
    let email = profile.email.clone();
    let copy = move |_| clipboard::copy_email(&email);

    view! {
        <section id="contact" class="section section--contact">
            <h2 class="section__title">"Get In Touch"</h2>
            <p class="section__lead">
                "Interested in working together or have a question? Reach out — I \
                 typically reply within a few business days."
            </p>

            <div class="contact__grid">
                <div class="contact__card">
                    <h3 class="contact__card-title">"Let's Connect"</h3>

                    <h4 class="contact__heading">"Email"</h4>
                    <p class="contact__email">{profile.email.clone()}</p>
                    <div class="contact__actions">
                        <a class="btn btn--primary" href=format!("mailto:{}", profile.email)>
                            "Send Email"
                        </a>
                        <button class="btn" aria-label="Copy email" on:click=copy>
                            "Copy"
                        </button>
                    </div>

                    <h4 class="contact__heading">"Social"</h4>
                    <div class="contact__social">
                        <a href=profile.github.clone() target="_blank" rel="noreferrer">
                            "GitHub"
                        </a>
                        <a href=profile.linkedin.clone() target="_blank" rel="noreferrer">
                            "LinkedIn"
                        </a>
                    </div>
                </div>

                <div class="contact__card">
                    <h3 class="contact__card-title">"Send Message"</h3>
                    <ContactForm email=profile.email.clone()/>
                </div>
            </div>
        </section>
    }
}
