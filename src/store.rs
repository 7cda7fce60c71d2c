//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::User;

/// Session-scoped state shared across components
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authenticated user, set once the session bootstrap succeeds
    pub current_user: Option<User>,
    /// Directory of all users, for the sharing checklists
    pub users: Vec<User>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Install the bootstrapped identity and user directory
pub fn store_set_session(store: &AppStore, user: User, users: Vec<User>) {
    *store.current_user().write() = Some(user);
    *store.users().write() = users;
}

/// Drop all session state; safe to call when already cleared
pub fn store_clear_session(store: &AppStore) {
    *store.current_user().write() = None;
    store.users().write().clear();
}
