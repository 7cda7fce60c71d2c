//! Notification Panel Component
//!
//! Badge plus list. The badge shows the total list length and hides at zero,
//! matching the backend contract the rest of the app was built against.
//! Clicking an unread item marks it read server-side first, then flips the
//! local entry in place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Notification;

#[component]
pub fn NotificationPanel(
    notifications: ReadSignal<Vec<Notification>>,
    set_notifications: WriteSignal<Vec<Notification>>,
) -> impl IntoView {
    let count = move || notifications.get().len();

    view! {
        <aside class="notifications">
            <div class="notifications-header">
                <span class="notifications-title">"Notifications"</span>
                <span
                    id="notification-count"
                    class="notification-count"
                    class:hidden=move || count() == 0
                >
                    {move || count().to_string()}
                </span>
            </div>

            <ul id="notifications-list" class="notifications-list">
                <Show when=move || notifications.get().is_empty()>
                    <li class="notification empty">"No notifications"</li>
                </Show>

                <For
                    each=move || notifications.get()
                    key=|notification| (notification.id, notification.read)
                    children=move |notification| {
                        let id = notification.id;
                        let read = notification.read;
                        let line = notification_line(&notification);

                        let mark_read = move |_| {
                            if read {
                                return;
                            }
                            spawn_local(async move {
                                match api::mark_read(id).await {
                                    Ok(updated) => set_notifications.update(|list| {
                                        if let Some(entry) = list.iter_mut().find(|entry| entry.id == id) {
                                            entry.read = updated.read;
                                        }
                                    }),
                                    Err(failure) => api::alert_error(&failure),
                                }
                            });
                        };

                        view! {
                            <li
                                class=if read { "notification read" } else { "notification" }
                                on:click=mark_read
                            >
                                {line}
                            </li>
                        }
                    }
                />
            </ul>
        </aside>
    }
}

/// Display line: timestamp and message, plus project/task context when the
/// backend includes it
fn notification_line(notification: &Notification) -> String {
    let mut line = format!("{}: {}", notification.created_at, notification.message);
    match (&notification.project_name, &notification.task_title) {
        (Some(project), Some(task)) => line.push_str(&format!(" ({project} / {task})")),
        (Some(project), None) => line.push_str(&format!(" ({project})")),
        (None, Some(task)) => line.push_str(&format!(" ({task})")),
        (None, None) => {}
    }
    line
}

#[cfg(test)]
mod tests {
    use super::notification_line;
    use crate::models::Notification;

    fn make_notification(project: Option<&str>, task: Option<&str>) -> Notification {
        Notification {
            id: 1,
            message: "New comment".to_string(),
            read: false,
            created_at: "2024-01-01T00:00:00".to_string(),
            project_name: project.map(str::to_string),
            task_title: task.map(str::to_string),
        }
    }

    #[test]
    fn line_without_context() {
        let line = notification_line(&make_notification(None, None));
        assert_eq!(line, "2024-01-01T00:00:00: New comment");
    }

    #[test]
    fn line_with_project_and_task_context() {
        let line = notification_line(&make_notification(Some("Demo"), Some("Ship it")));
        assert_eq!(line, "2024-01-01T00:00:00: New comment (Demo / Ship it)");
    }
}
