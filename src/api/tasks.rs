//! Task Endpoints

use serde::Serialize;

use super::ApiError;
use crate::models::{Task, TaskStatus};

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    pub project_id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub status: TaskStatus,
}

#[derive(Serialize)]
struct StatusArgs {
    status: TaskStatus,
}

pub async fn list_tasks(project_id: i64) -> Result<Vec<Task>, ApiError> {
    super::get_json(&format!("/projects/{project_id}/tasks")).await
}

pub async fn create_task(args: &CreateTaskArgs<'_>) -> Result<Task, ApiError> {
    super::post_json("/tasks", args).await
}

pub async fn set_status(id: i64, status: TaskStatus) -> Result<Task, ApiError> {
    super::patch_json(&format!("/tasks/{id}"), &StatusArgs { status }).await
}

pub async fn delete_task(id: i64) -> Result<(), ApiError> {
    super::delete(&format!("/tasks/{id}")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_patch_wire_shape() {
        let args = StatusArgs {
            status: TaskStatus::InProgress,
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({"status": "in_progress"})
        );
    }
}
