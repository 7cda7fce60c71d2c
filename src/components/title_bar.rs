//! Title Bar Component
//!
//! App header with the current username and the logout control.

use leptos::prelude::*;

use crate::session;
use crate::store::{use_app_store, AppStateStoreFields};

/// Header bar shown above the authenticated board
#[component]
pub fn TitleBar(#[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let store = use_app_store();

    // The cached copy covers the gap before `/users/me` resolves
    let username = move || {
        store
            .current_user()
            .get()
            .or_else(session::cached_user)
            .map(|user| user.username)
            .unwrap_or_default()
    };

    view! {
        <header class="title-bar">
            <span class="app-title">"Taskboard"</span>
            <span class="user-info">
                <span id="current-username" class="current-username">{username}</span>
                <button
                    id="logout-btn"
                    class="logout-btn"
                    on:click=move |_| on_logout.run(())
                >
                    "Log out"
                </button>
            </span>
        </header>
    }
}
