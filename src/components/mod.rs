//! UI Components
//!
//! Reusable Leptos components.

mod access_form;
mod comment_thread;
mod delete_confirm_button;
mod login_form;
mod new_project_form;
mod new_task_form;
mod notification_panel;
mod project_card;
mod project_list;
mod task_card;
mod task_list;
mod title_bar;
mod user_checklist;
mod visibility_selector;

pub use access_form::AccessForm;
pub use comment_thread::CommentThread;
pub use delete_confirm_button::DeleteConfirmButton;
pub use login_form::LoginForm;
pub use new_project_form::NewProjectForm;
pub use new_task_form::NewTaskForm;
pub use notification_panel::NotificationPanel;
pub use project_card::ProjectCard;
pub use project_list::ProjectList;
pub use task_card::TaskCard;
pub use task_list::TaskList;
pub use title_bar::TitleBar;
pub use user_checklist::UserChecklist;
pub use visibility_selector::{VisibilitySelector, VISIBILITY_OPTIONS};
