//! Project List Component
//!
//! Keyed list over the project signal; the whole list is replaced on every
//! load, so the keys carry the mutable fields to force row re-renders.

use leptos::prelude::*;

use crate::components::ProjectCard;
use crate::models::Project;

#[component]
pub fn ProjectList(projects: ReadSignal<Vec<Project>>) -> impl IntoView {
    view! {
        <div id="projects-container" class="project-list">
            <For
                each=move || projects.get()
                key=|project| {
                    (
                        project.id,
                        project.name.clone(),
                        project.description.clone(),
                        project.visibility,
                        project.shared_users.len(),
                    )
                }
                children=move |project| view! { <ProjectCard project=project /> }
            />
        </div>
    }
}
