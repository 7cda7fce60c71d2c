//! Frontend Models
//!
//! Data structures matching the backend REST payloads.

use serde::{Deserialize, Serialize};

/// User summary as returned by `/users` and embedded in other entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Project visibility, wire values `all` / `private` / `selected`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    All,
    Private,
    Selected,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::All => "all",
            Visibility::Private => "private",
            Visibility::Selected => "selected",
        }
    }

    /// Parse a select value; unknown strings fall back to the default
    pub fn from_value(value: &str) -> Visibility {
        match value {
            "private" => Visibility::Private,
            "selected" => Visibility::Selected,
            _ => Visibility::All,
        }
    }
}

/// Task status, wire values `todo` / `in_progress` / `done`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const OPTIONS: &'static [TaskStatus] =
        &[TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    pub fn from_value(value: &str) -> TaskStatus {
        match value {
            "in_progress" => TaskStatus::InProgress,
            "done" => TaskStatus::Done,
            _ => TaskStatus::Todo,
        }
    }
}

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    pub owner_id: i64,
    /// Only meaningful when visibility is `selected`
    #[serde(default)]
    pub shared_users: Vec<User>,
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
}

/// Comment node; the backend already shapes the list as a tree through
/// `replies`, the client never re-nests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub task_id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub author: User,
    pub content: String,
    #[serde(default)]
    pub solved: bool,
    pub created_at: String,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

/// Notification data structure; `read` is the only field the client mutates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: String,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub task_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn visibility_wire_values_round_trip() {
        assert_eq!(serde_json::to_value(Visibility::All).unwrap(), json!("all"));
        assert_eq!(
            serde_json::to_value(Visibility::Selected).unwrap(),
            json!("selected")
        );
        let parsed: Visibility = serde_json::from_value(json!("private")).unwrap();
        assert_eq!(parsed, Visibility::Private);
        assert_eq!(Visibility::from_value("selected"), Visibility::Selected);
        assert_eq!(Visibility::from_value("bogus"), Visibility::All);
    }

    #[test]
    fn task_status_wire_values_round_trip() {
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).unwrap(),
            json!("in_progress")
        );
        let parsed: TaskStatus = serde_json::from_value(json!("done")).unwrap();
        assert_eq!(parsed, TaskStatus::Done);
        assert_eq!(TaskStatus::from_value("in_progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::from_value(""), TaskStatus::Todo);
    }

    #[test]
    fn project_with_shared_users_deserializes() {
        let project: Project = serde_json::from_value(json!({
            "id": 7,
            "name": "Demo",
            "description": null,
            "visibility": "selected",
            "owner_id": 1,
            "shared_users": [{"id": 2, "username": "bob"}]
        }))
        .unwrap();
        assert_eq!(project.visibility, Visibility::Selected);
        assert_eq!(project.shared_users.len(), 1);
        assert_eq!(project.shared_users[0].username, "bob");
        assert!(project.description.is_none());
    }

    #[test]
    fn nested_comment_tree_deserializes() {
        let comment: Comment = serde_json::from_value(json!({
            "id": 1,
            "task_id": 3,
            "parent_id": null,
            "author": {"id": 1, "username": "alice"},
            "content": "root",
            "solved": false,
            "created_at": "2024-01-01T00:00:00",
            "replies": [{
                "id": 2,
                "task_id": 3,
                "parent_id": 1,
                "author": {"id": 2, "username": "bob"},
                "content": "reply",
                "solved": true,
                "created_at": "2024-01-01T01:00:00",
                "replies": []
            }]
        }))
        .unwrap();
        assert_eq!(comment.replies.len(), 1);
        assert_eq!(comment.replies[0].parent_id, Some(1));
        assert!(comment.replies[0].solved);
    }

    #[test]
    fn notification_context_fields_are_optional() {
        let bare: Notification = serde_json::from_value(json!({
            "id": 9,
            "message": "You were mentioned",
            "read": false,
            "created_at": "2024-01-02T10:00:00"
        }))
        .unwrap();
        assert!(bare.project_name.is_none());
        assert!(bare.task_title.is_none());
    }
}
