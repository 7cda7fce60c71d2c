//! Project Card Component
//!
//! One project row: header with the owner-only delete control, description,
//! the owner-only access form, and the task list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AccessForm, DeleteConfirmButton, TaskList};
use crate::context::AppContext;
use crate::models::Project;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = project.id;
    let owner_id = project.owner_id;
    let name = project.name.clone();
    let description = project
        .description
        .clone()
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "No description".to_string());

    // Only the owner may delete the project or edit its access
    let can_manage = move || store.current_user().get().map(|user| user.id) == Some(owner_id);

    let delete_project = move |_: ()| {
        spawn_local(async move {
            match api::delete_project(id).await {
                Ok(()) => ctx.reload_projects(),
                Err(failure) => api::alert_error(&failure),
            }
        });
    };

    view! {
        <div class="project">
            <div class="project-header">
                <h3>{name}</h3>
                <Show when=can_manage>
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        on_confirm=Callback::new(delete_project)
                    />
                </Show>
            </div>

            <p class="project-description">{description}</p>

            <Show when=can_manage>
                <AccessForm project=project.clone() />
            </Show>

            <TaskList project_id=id />
        </div>
    }
}
