//! Comment Endpoints

use serde::Serialize;

use super::ApiError;
use crate::models::Comment;

#[derive(Serialize)]
pub struct CreateCommentArgs<'a> {
    pub task_id: i64,
    pub content: &'a str,
    /// Immediate parent for replies; omitted for top-level comments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

pub async fn list_comments(task_id: i64) -> Result<Vec<Comment>, ApiError> {
    super::get_json(&format!("/tasks/{task_id}/comments")).await
}

pub async fn create_comment(args: &CreateCommentArgs<'_>) -> Result<Comment, ApiError> {
    super::post_json("/comments", args).await
}

pub async fn solve_comment(id: i64) -> Result<Comment, ApiError> {
    super::post_action(&format!("/comments/{id}/solve")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reply_wire_shape() {
        let args = CreateCommentArgs {
            task_id: 3,
            content: "ok",
            parent_id: Some(5),
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({"task_id": 3, "content": "ok", "parent_id": 5})
        );
    }

    #[test]
    fn top_level_comment_omits_parent_id() {
        let args = CreateCommentArgs {
            task_id: 3,
            content: "hello",
            parent_id: None,
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({"task_id": 3, "content": "hello"})
        );
    }
}
