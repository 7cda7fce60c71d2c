//! User Checklist Component
//!
//! Checkbox list of all known users except the viewer, for picking the
//! collaborators of a `selected`-visibility project. The checked set lives in
//! the caller so it survives the checklist being hidden and re-shown.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn UserChecklist(
    checked: ReadSignal<Vec<String>>,
    set_checked: WriteSignal<Vec<String>>,
) -> impl IntoView {
    let store = use_app_store();

    let collaborators = move || {
        let me = store.current_user().get().map(|user| user.id);
        store
            .users()
            .get()
            .into_iter()
            .filter(move |user| Some(user.id) != me)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="user-checklist">
            <For
                each=collaborators
                key=|user| user.id
                children=move |user| {
                    let label = user.username.clone();
                    let check_name = user.username.clone();
                    let toggle_name = user.username.clone();
                    let is_checked = move || checked.get().iter().any(|name| name == &check_name);

                    view! {
                        <label class="user-checkbox">
                            <input
                                type="checkbox"
                                prop:checked=is_checked
                                on:change=move |_| {
                                    let name = toggle_name.clone();
                                    set_checked.update(|names| {
                                        if let Some(index) = names.iter().position(|existing| existing == &name) {
                                            names.remove(index);
                                        } else {
                                            names.push(name);
                                        }
                                    });
                                }
                            />
                            {label}
                        </label>
                    }
                }
            />
        </div>
    }
}
