//! Visibility Selector Component
//!
//! Reusable project visibility option buttons.

use leptos::prelude::*;

use crate::models::Visibility;

/// Visibility options with display labels
pub const VISIBILITY_OPTIONS: &[(Visibility, &str)] = &[
    (Visibility::All, "Everyone"),
    (Visibility::Private, "Only me"),
    (Visibility::Selected, "Selected users"),
];

/// Option buttons for picking a project visibility
#[component]
pub fn VisibilitySelector(
    current: ReadSignal<Visibility>,
    on_change: impl Fn(Visibility) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="visibility-selector">
            {VISIBILITY_OPTIONS.iter().map(|(value, label)| {
                let value = *value;
                let is_selected = move || current.get() == value;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "visibility-btn active" } else { "visibility-btn" }
                        on:click=move |_| on_change(value)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
