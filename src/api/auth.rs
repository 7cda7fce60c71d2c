//! Auth Endpoints

use serde::{Deserialize, Serialize};

use super::ApiError;

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "bearer")]
    pub token_type: String,
}

fn bearer() -> String {
    "bearer".to_string()
}

pub async fn login(args: &LoginArgs<'_>) -> Result<Token, ApiError> {
    super::post_json("/auth/login", args).await
}
