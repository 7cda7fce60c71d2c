//! Task List Component
//!
//! Tasks for one project. Each project fetches its own list on mount, so the
//! startup loads race across projects; a local version counter drives reloads
//! after task deletions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{NewTaskForm, TaskCard};
use crate::models::Task;

#[component]
pub fn TaskList(project_id: i64) -> impl IntoView {
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (tasks_version, set_tasks_version) = signal(0u32);

    Effect::new(move |_| {
        let _ = tasks_version.get();
        spawn_local(async move {
            match api::list_tasks(project_id).await {
                Ok(loaded) => set_tasks.set(loaded),
                Err(failure) => api::alert_error(&failure),
            }
        });
    });

    let reload_tasks = Callback::new(move |_: ()| set_tasks_version.update(|v| *v += 1));

    view! {
        <div class="tasks">
            <For
                each=move || tasks.get()
                key=|task| (task.id, task.title.clone(), task.status)
                children=move |task| view! {
                    <TaskCard task=task on_changed=reload_tasks />
                }
            />

            <NewTaskForm project_id=project_id />
        </div>
    }
}
