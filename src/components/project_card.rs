//! Card for a single project in the gallery grid.

use leptos::prelude::*;

use crate::content::Project;

/// Project card — title link, description, tag badges, and action links.
///
/// A project without a demo renders its link as "View Code"; a demo URL
/// distinct from the primary link adds a secondary "Source Code" action.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let primary_label = if project.demo.is_some() { "Live Demo" } else { "View Code" };
    let secondary = project.demo.clone().filter(|demo| *demo != project.link);

    view! {
        <article class="project-card">
            <h3 class="project-card__title">
                <a href=project.link.clone() target="_blank" rel="noreferrer">
                    {project.title.clone()}
                </a>
            </h3>
            <p class="project-card__description">{project.description.clone()}</p>
            <div class="project-card__tags">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="project-card__tag">{tag.clone()}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="project-card__links">
                <a
                    class="btn btn--primary"
                    href=project.link.clone()
                    target="_blank"
                    rel="noreferrer"
                >
                    {primary_label}
                </a>
                {secondary
                    .map(|demo| {
                        view! {
                            <a class="btn" href=demo target="_blank" rel="noreferrer">
                                "Source Code"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}
