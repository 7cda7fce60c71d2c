//! Taskboard Frontend App
//!
//! Entry components: path switch between the login page and the
//! authenticated board, session bootstrap, and the top-level reload loops.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{LoginForm, NewProjectForm, NotificationPanel, ProjectList, TitleBar};
use crate::context::AppContext;
use crate::models::{Notification, Project};
use crate::session;
use crate::store::{store_clear_session, store_set_session, AppState};

/// Path-based entry: `/login` renders the standalone login form, everything
/// else is the authenticated board.
#[component]
pub fn Root() -> impl IntoView {
    let path = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default();

    if path.starts_with("/login") {
        view! { <LoginForm /> }.into_any()
    } else {
        view! { <App /> }.into_any()
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    // State
    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (notifications, set_notifications) = signal(Vec::<Notification>::new());
    let (projects_version, set_projects_version) = signal(0u32);
    let (notifications_version, set_notifications_version) = signal(0u32);
    let (session_ready, set_session_ready) = signal(false);

    // Provide context to all children
    provide_context(AppContext::new(
        (projects_version, set_projects_version),
        (notifications_version, set_notifications_version),
    ));

    // Idempotent: clears state and storage, then routes to the login page.
    let logout = move || {
        store_clear_session(&store);
        set_projects.set(Vec::new());
        set_notifications.set(Vec::new());
        set_session_ready.set(false);
        session::clear();
        session::redirect_to_login();
    };

    // Session bootstrap. The chain is strictly ordered; a failure anywhere
    // means the session is broken and gets dropped instead of half-rendering.
    Effect::new(move |_| {
        if session::token().is_none() {
            session::redirect_to_login();
            return;
        }
        spawn_local(async move {
            let outcome = async {
                let user = api::current_user().await?;
                session::persist_user(&user);
                let users = api::list_users().await?;
                store_set_session(&store, user, users);
                set_projects.set(api::list_projects().await?);
                set_notifications.set(api::list_notifications().await?);
                Ok::<(), api::ApiError>(())
            }
            .await;
            match outcome {
                Ok(()) => set_session_ready.set(true),
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("[APP] Session bootstrap failed: {error}").into(),
                    );
                    logout();
                }
            }
        });
    });

    // Reload projects after mutations (version 0 is the bootstrap load)
    Effect::new(move |_| {
        let version = projects_version.get();
        if version == 0 {
            return;
        }
        web_sys::console::log_1(&format!("[APP] Reloading projects, trigger={}", version).into());
        spawn_local(async move {
            match api::list_projects().await {
                Ok(loaded) => set_projects.set(loaded),
                Err(error) => api::alert_error(&error),
            }
        });
    });

    // Reload notifications after comment activity
    Effect::new(move |_| {
        let version = notifications_version.get();
        if version == 0 {
            return;
        }
        spawn_local(async move {
            if let Ok(loaded) = api::list_notifications().await {
                set_notifications.set(loaded);
            }
        });
    });

    view! {
        <Show when=move || session_ready.get()>
            <div class="app-layout">
                <TitleBar on_logout=Callback::new(move |_| logout()) />

                <main class="main-content">
                    <h1>"Projects"</h1>

                    <NewProjectForm />

                    <ProjectList projects=projects />

                    <p class="project-count">
                        {move || format!("{} projects", projects.get().len())}
                    </p>
                </main>

                <NotificationPanel
                    notifications=notifications
                    set_notifications=set_notifications
                />
            </div>
        </Show>
    }
}
