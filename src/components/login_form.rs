//! Login Form Component
//!
//! Standalone login page; a successful login persists the token and
//! navigates back to the board.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, LoginArgs};
use crate::session;

#[component]
pub fn LoginForm() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = username.get();
        let pass = password.get();
        if name.is_empty() || pass.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::login(&LoginArgs {
                username: &name,
                password: &pass,
            })
            .await
            {
                Ok(token) => {
                    session::persist_token(&token.access_token);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(failure) => set_error.set(Some(failure.to_string())),
            }
        });
    };

    view! {
        <main class="login-page">
            <form class="login-form" on:submit=submit>
                <h1>"Taskboard"</h1>

                <input
                    type="text"
                    placeholder="Username"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit">"Log in"</button>

                {move || error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}
            </form>
        </main>
    }
}
