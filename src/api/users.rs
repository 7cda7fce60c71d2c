//! User Endpoints

use super::ApiError;
use crate::models::User;

pub async fn current_user() -> Result<User, ApiError> {
    super::get_json("/users/me").await
}

pub async fn list_users() -> Result<Vec<User>, ApiError> {
    super::get_json("/users").await
}
