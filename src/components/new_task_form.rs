//! New Task Form Component
//!
//! Create form rendered at the bottom of each project's task list. Creation
//! reloads the whole project list, which is cheap at the expected sizes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateTaskArgs};
use crate::context::AppContext;
use crate::models::TaskStatus;

#[component]
pub fn NewTaskForm(project_id: i64) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(TaskStatus::Todo);

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let task_title = title.get();
        if task_title.is_empty() {
            return;
        }
        let task_description = description.get();
        let task_status = status.get();

        spawn_local(async move {
            let args = CreateTaskArgs {
                project_id,
                title: &task_title,
                description: &task_description,
                status: task_status,
            };
            match api::create_task(&args).await {
                Ok(_) => {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_status.set(TaskStatus::Todo);
                    ctx.reload_projects();
                }
                Err(failure) => api::alert_error(&failure),
            }
        });
    };

    view! {
        <form class="new-task-form card" on:submit=create_task>
            <h5>"Create Task"</h5>

            <input
                type="text"
                placeholder="Task title"
                required
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <select
                class="task-status"
                on:change=move |ev| set_status.set(TaskStatus::from_value(&event_target_value(&ev)))
            >
                {TaskStatus::OPTIONS.iter().map(|value| {
                    let value = *value;
                    view! {
                        <option value=value.as_str()>{value.label()}</option>
                    }
                }).collect_view()}
            </select>
            <button type="submit">"Add Task"</button>
        </form>
    }
}
