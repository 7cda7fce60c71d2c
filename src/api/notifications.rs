//! Notification Endpoints

use super::ApiError;
use crate::models::Notification;

pub async fn list_notifications() -> Result<Vec<Notification>, ApiError> {
    super::get_json("/notifications").await
}

pub async fn mark_read(id: i64) -> Result<Notification, ApiError> {
    super::post_action(&format!("/notifications/{id}/read")).await
}
