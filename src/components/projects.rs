//! Projects section — search box, filtered card grid, and the empty state.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::content;
use crate::state::ui::UiState;

/// Searchable project gallery. The query lives in shared UI state; the
/// visible list is always `filter_projects` over the static data, so it
/// stays a subset of the source list in source order. When nothing matches,
/// an explicit empty state renders instead of a bare empty grid.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let filtered =
        Memo::new(move |_| content::filter_projects(&content::projects(), &ui.get().query));

    view! {
        <section id="projects" class="section section--projects">
            <h2 class="section__title">"Projects"</h2>
            <input
                class="projects__search"
                type="search"
                placeholder="Search projects by title or tag..."
                aria-label="Search projects"
                prop:value=move || ui.get().query
                on:input=move |ev| {
                    ui.update(|s| s.query = event_target_value(&ev));
                }
            />

            <div class="projects__grid">
                {move || {
                    filtered
                        .get()
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || filtered.get().is_empty()>
                <div class="projects__empty">
                    <p class="projects__empty-title">"No projects match your search."</p>
                    <p class="projects__empty-hint">
                        "Try different keywords or browse all projects."
                    </p>
                </div>
            </Show>
        </section>
    }
}
