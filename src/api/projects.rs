//! Project Endpoints

use serde::Serialize;

use super::ApiError;
use crate::models::{Project, Visibility};

#[derive(Serialize)]
pub struct CreateProjectArgs<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub visibility: Visibility,
    /// Checked collaborators; empty unless visibility is `selected`
    pub shared_usernames: Vec<String>,
}

#[derive(Serialize)]
pub struct AccessArgs {
    pub visibility: Visibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_usernames: Option<Vec<String>>,
}

pub async fn list_projects() -> Result<Vec<Project>, ApiError> {
    super::get_json("/projects").await
}

pub async fn create_project(args: &CreateProjectArgs<'_>) -> Result<Project, ApiError> {
    super::post_json("/projects", args).await
}

pub async fn update_access(id: i64, args: &AccessArgs) -> Result<Project, ApiError> {
    super::patch_json(&format!("/projects/{id}"), args).await
}

pub async fn delete_project(id: i64) -> Result<(), ApiError> {
    super::delete(&format!("/projects/{id}")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_args_wire_shape() {
        let args = CreateProjectArgs {
            name: "Demo",
            description: "",
            visibility: Visibility::All,
            shared_usernames: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({
                "name": "Demo",
                "description": "",
                "visibility": "all",
                "shared_usernames": []
            })
        );
    }

    #[test]
    fn access_args_send_usernames_only_when_present() {
        let selected = AccessArgs {
            visibility: Visibility::Selected,
            shared_usernames: Some(vec!["bob".to_string()]),
        };
        assert_eq!(
            serde_json::to_value(&selected).unwrap(),
            json!({"visibility": "selected", "shared_usernames": ["bob"]})
        );

        let private = AccessArgs {
            visibility: Visibility::Private,
            shared_usernames: None,
        };
        assert_eq!(
            serde_json::to_value(&private).unwrap(),
            json!({"visibility": "private"})
        );
    }
}
