//! Task Card Component
//!
//! One task: title, status select, delete control, description, and the
//! comment thread underneath.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CommentThread, DeleteConfirmButton};
use crate::models::{Task, TaskStatus};

#[component]
pub fn TaskCard(task: Task, #[prop(into)] on_changed: Callback<()>) -> impl IntoView {
    let id = task.id;
    let status = task.status;
    let title = task.title.clone();
    let description = task
        .description
        .clone()
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "No description".to_string());

    let change_status = move |ev: web_sys::Event| {
        let next = TaskStatus::from_value(&event_target_value(&ev));
        spawn_local(async move {
            // No rollback of the select; the next full reload restores
            // server truth
            if let Err(failure) = api::set_status(id, next).await {
                api::alert_error(&failure);
            }
        });
    };

    let delete_task = move |_: ()| {
        spawn_local(async move {
            match api::delete_task(id).await {
                Ok(()) => on_changed.run(()),
                Err(failure) => api::alert_error(&failure),
            }
        });
    };

    view! {
        <div class="task">
            <div class="task-header">
                <h4 class="task-title">{title}</h4>
                <select class="task-status" on:change=change_status>
                    {TaskStatus::OPTIONS.iter().map(|value| {
                        let value = *value;
                        view! {
                            <option value=value.as_str() selected=value == status>
                                {value.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <DeleteConfirmButton
                    button_class="delete-task"
                    on_confirm=Callback::new(delete_task)
                />
            </div>

            <p class="task-description">{description}</p>

            <CommentThread task_id=id />
        </div>
    }
}
