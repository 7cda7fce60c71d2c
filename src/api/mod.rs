//! REST Client
//!
//! Shared HTTP helper plus endpoint wrappers, organized by domain.

mod auth;
mod comments;
mod notifications;
mod projects;
mod tasks;
mod users;

pub use auth::*;
pub use comments::*;
pub use notifications::*;
pub use projects::*;
pub use tasks::*;
pub use users::*;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::session;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered 401; the session has already been cleared and the
    /// browser is on its way to the login page when this is returned.
    #[error("Session expired. Please log in again.")]
    SessionExpired,
    /// Any other non-2xx status; the message is the response body text.
    #[error("{0}")]
    RequestFailed(String),
    /// Fetch-level or decode failure (offline, malformed JSON).
    #[error("network error: {0}")]
    Network(String),
}

/// Show a mutation failure to the user. 401s stay silent because the request
/// helper has already dropped the session and redirected.
pub fn alert_error(error: &ApiError) {
    if matches!(error, ApiError::SessionExpired) {
        return;
    }
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&error.to_string());
    }
}

fn network_error(error: gloo_net::Error) -> ApiError {
    ApiError::Network(error.to_string())
}

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match session::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Non-2xx bodies become the error message verbatim; empty bodies fall back
/// to a generic line.
fn failure_message(body: String) -> String {
    if body.trim().is_empty() {
        "Request failed".to_string()
    } else {
        body
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.status() == 401 {
        session::expire();
        return Err(ApiError::SessionExpired);
    }
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::RequestFailed(failure_message(body)));
    }
    Ok(response)
}

async fn send_json<B, T>(builder: RequestBuilder, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let json = serde_json::to_string(body).map_err(|error| ApiError::Network(error.to_string()))?;
    let response = authorize(builder)
        .header("Content-Type", "application/json")
        .body(json)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    check(response).await?.json::<T>().await.map_err(network_error)
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorize(Request::get(path))
        .send()
        .await
        .map_err(network_error)?;
    check(response).await?.json::<T>().await.map_err(network_error)
}

pub(crate) async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    send_json(Request::post(path), body).await
}

pub(crate) async fn patch_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    send_json(Request::patch(path), body).await
}

/// Bodyless POST for action endpoints (mark solved, mark read).
pub(crate) async fn post_action<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorize(Request::post(path))
        .send()
        .await
        .map_err(network_error)?;
    check(response).await?.json::<T>().await.map_err(network_error)
}

/// DELETE; the backend answers 204 with no body.
pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    let response = authorize(Request::delete(path))
        .send()
        .await
        .map_err(network_error)?;
    check(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::failure_message;

    #[test]
    fn failure_message_prefers_response_body() {
        assert_eq!(failure_message("boom".to_string()), "boom");
    }

    #[test]
    fn failure_message_falls_back_when_body_is_empty() {
        assert_eq!(failure_message(String::new()), "Request failed");
        assert_eq!(failure_message("  \n".to_string()), "Request failed");
    }
}
