//! Session Persistence
//!
//! Token and cached-user storage in localStorage plus the forced-login
//! redirect. The bearer token is read back on every request, so there is no
//! separate in-memory copy to keep in sync.

use crate::models::User;

const TOKEN_KEY: &str = "kanban_token";
const USER_KEY: &str = "kanban_user";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

pub fn token() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
}

pub fn persist_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Last-known user, cached so the header can render before `/users/me` lands
pub fn cached_user() -> Option<User> {
    let raw = local_storage().and_then(|storage| storage.get_item(USER_KEY).ok().flatten())?;
    serde_json::from_str(&raw).ok()
}

pub fn persist_user(user: &User) {
    if let (Some(storage), Ok(json)) = (local_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(USER_KEY, &json);
    }
}

pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

pub fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

/// 401 handler: drop the persisted session and route back to the login page.
pub fn expire() {
    clear();
    redirect_to_login();
}
