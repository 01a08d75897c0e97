//! About section — name, role, summary, and location.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn AboutSection() -> impl IntoView {
    let profile = content::profile();

    view! {
        <section id="about" class="section section--about">
            <h1 class="about__name">{profile.name.clone()}</h1>
            <p class="about__title">{profile.title.clone()}</p>
            <p class="about__summary">{profile.summary.clone()}</p>
            <p class="about__location">{format!("📍 {}", profile.location)}</p>
        </section>
    }
}
