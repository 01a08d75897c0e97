//! Site footer with copyright line and social links.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn Footer() -> impl IntoView {
    let profile = content::profile();

    view! {
        <footer class="site-footer">
            <p class="site-footer__copyright">
                {format!("© {} {}. All rights reserved.", current_year(), profile.name)}
            </p>
            <div class="site-footer__social">
                <a href=profile.github.clone() aria-label="GitHub" target="_blank" rel="noreferrer">
                    "GitHub"
                </a>
                <a
                    href=profile.linkedin.clone()
                    aria-label="LinkedIn"
                    target="_blank"
                    rel="noreferrer"
                >
                    "LinkedIn"
                </a>
                <a href=format!("mailto:{}", profile.email) aria-label="Email">"Email"</a>
            </div>
        </footer>
    }
}

fn current_year() -> u32 {
    #[cfg(feature = "browser")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(feature = "browser"))]
    {
        2026
    }
}
