//! New Project Form Component
//!
//! Form for creating projects with a visibility selector and, when sharing
//! with selected users, a collaborator checklist.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, CreateProjectArgs};
use crate::components::{UserChecklist, VisibilitySelector};
use crate::context::AppContext;
use crate::models::Visibility;

#[component]
pub fn NewProjectForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (visibility, set_visibility) = signal(Visibility::All);
    // Kept around while the checklist is hidden so checked state survives
    // toggling away from "selected"
    let (checked, set_checked) = signal(Vec::<String>::new());

    let create_project = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let project_name = name.get().trim().to_string();
        let project_description = description.get().trim().to_string();
        let project_visibility = visibility.get();
        let shared_usernames = if project_visibility == Visibility::Selected {
            checked.get()
        } else {
            Vec::new()
        };

        spawn_local(async move {
            let args = CreateProjectArgs {
                name: &project_name,
                description: &project_description,
                visibility: project_visibility,
                shared_usernames,
            };
            match api::create_project(&args).await {
                Ok(_) => {
                    set_name.set(String::new());
                    set_description.set(String::new());
                    set_visibility.set(Visibility::All);
                    set_checked.set(Vec::new());
                    ctx.reload_projects();
                }
                // Leave the form populated so nothing typed is lost
                Err(failure) => api::alert_error(&failure),
            }
        });
    };

    view! {
        <form id="project-form" class="new-project-form" on:submit=create_project>
            <div class="new-project-row">
                <input
                    id="project-name"
                    type="text"
                    placeholder="Project name"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
                <button type="submit">"Create"</button>
            </div>

            <textarea
                id="project-description"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>

            <VisibilitySelector
                current=visibility
                on_change=move |value| set_visibility.set(value)
            />

            <Show when=move || visibility.get() == Visibility::Selected>
                <UserChecklist checked=checked set_checked=set_checked />
            </Show>
        </form>
    }
}
