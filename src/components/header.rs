//! Sticky site header: brand block, section nav, mobile menu, theme toggle,
//! and social links.

use leptos::prelude::*;

use crate::content;
use crate::state::ui::UiState;
use crate::util::dark_mode::{self, LocalStorage};
use crate::util::scroll;

/// Section anchors the nav scrolls to, with display labels.
pub const NAV_SECTIONS: [(&str, &str); 4] = [
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Sticky header with desktop nav, a hamburger menu for small screens, and
/// the sun/moon theme toggle. Nav clicks substitute the animated offset
/// scroll for the default anchor jump and close the mobile menu.
#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let profile = content::profile();

    let nav_to = move |section_id: &'static str, ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(|s| s.mobile_open = false);
        scroll::scroll_to_section(section_id);
    };

    let toggle_theme = move |_| {
        let next = dark_mode::toggle(ui.get().dark_mode, &LocalStorage);
        ui.update(|s| s.dark_mode = next);
    };

    let toggle_menu = move |_| ui.update(|s| s.mobile_open = !s.mobile_open);

    let nav_links = move |class: &'static str| {
        NAV_SECTIONS
            .into_iter()
            .map(|(id, label)| {
                view! {
                    <a class=class href=format!("#{id}") on:click=move |ev| nav_to(id, ev)>
                        {label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <div class="site-header__brand">
                    <button
                        class="site-header__menu-button"
                        on:click=toggle_menu
                        aria-label=move || {
                            if ui.get().mobile_open { "Close menu" } else { "Open menu" }
                        }
                    >
                        {move || if ui.get().mobile_open { "✕" } else { "☰" }}
                    </button>
                    <span class="site-header__avatar">"BS"</span>
                    <div class="site-header__identity">
                        <p class="site-header__name">{profile.name.clone()}</p>
                        <p class="site-header__role">{profile.title.clone()}</p>
                    </div>
                </div>

                <nav class="site-header__nav" aria-label="Primary">
                    {nav_links("site-header__link")}
                </nav>

                <div class="site-header__actions">
                    <button
                        class="site-header__theme-toggle"
                        on:click=toggle_theme
                        aria-label=move || {
                            if ui.get().dark_mode {
                                "Switch to light mode"
                            } else {
                                "Switch to dark mode"
                            }
                        }
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "🌙" }}
                    </button>
                    <a
                        class="site-header__social"
                        href=profile.github.clone()
                        aria-label="GitHub"
                        target="_blank"
                        rel="noreferrer"
                    >
                        "GitHub"
                    </a>
                    <a
                        class="site-header__social"
                        href=profile.linkedin.clone()
                        aria-label="LinkedIn"
                        target="_blank"
                        rel="noreferrer"
                    >
                        "LinkedIn"
                    </a>
                    <a
                        class="btn btn--primary site-header__contact"
                        href="#contact"
                        on:click=move |ev| nav_to("contact", ev)
                    >
                        "Contact"
                    </a>
                </div>
            </div>

            <Show when=move || ui.get().mobile_open>
                <div class="site-header__mobile-menu">
                    {nav_links("site-header__mobile-link")}
                </div>
            </Show>
        </header>
    }
}
