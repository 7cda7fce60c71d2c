//! Access Form Component
//!
//! Per-project sharing form, rendered for owners only. Switching the select
//! to "selected" reveals the collaborator checklist; checked state is kept in
//! memory while hidden. Submitting PATCHes the project and reloads the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, AccessArgs};
use crate::components::{UserChecklist, VISIBILITY_OPTIONS};
use crate::context::AppContext;
use crate::models::{Project, Visibility};

#[component]
pub fn AccessForm(project: Project) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = project.id;
    let initial_checked: Vec<String> = project
        .shared_users
        .iter()
        .map(|user| user.username.clone())
        .collect();

    let (visibility, set_visibility) = signal(project.visibility);
    let (checked, set_checked) = signal(initial_checked);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let selected = visibility.get();
        let args = AccessArgs {
            visibility: selected,
            shared_usernames: (selected == Visibility::Selected).then(|| checked.get()),
        };

        spawn_local(async move {
            match api::update_access(id, &args).await {
                Ok(_) => ctx.reload_projects(),
                Err(failure) => api::alert_error(&failure),
            }
        });
    };

    view! {
        <form class="access-form" on:submit=submit>
            <select
                class="visibility-select"
                prop:value=move || visibility.get().as_str()
                on:change=move |ev| {
                    set_visibility.set(Visibility::from_value(&event_target_value(&ev)));
                }
            >
                {VISIBILITY_OPTIONS.iter().map(|(value, label)| {
                    view! {
                        <option value=value.as_str()>{*label}</option>
                    }
                }).collect_view()}
            </select>

            <Show when=move || visibility.get() == Visibility::Selected>
                <UserChecklist checked=checked set_checked=set_checked />
            </Show>

            <button type="submit">"Update access"</button>
        </form>
    }
}
