//! Skills section — the static badge list.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="section section--skills">
            <h2 class="section__title">"Skills"</h2>
            <div class="skills__badges">
                {content::skills()
                    .into_iter()
                    .map(|skill| view! { <span class="skills__badge">{skill}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
