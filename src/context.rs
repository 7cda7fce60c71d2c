//! Application Context
//!
//! Shared reload triggers provided via Leptos Context API. Mutations bump a
//! version counter and the owning list re-fetches wholesale, so the UI always
//! reflects server truth after a mutation resolves.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the project list from the backend - read
    pub projects_version: ReadSignal<u32>,
    set_projects_version: WriteSignal<u32>,
    /// Trigger to reload the notification list from the backend - read
    pub notifications_version: ReadSignal<u32>,
    set_notifications_version: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        projects_version: (ReadSignal<u32>, WriteSignal<u32>),
        notifications_version: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            projects_version: projects_version.0,
            set_projects_version: projects_version.1,
            notifications_version: notifications_version.0,
            set_notifications_version: notifications_version.1,
        }
    }

    /// Trigger a full reload of the project list
    pub fn reload_projects(&self) {
        self.set_projects_version.update(|v| *v += 1);
    }

    /// Trigger a full reload of the notification list
    pub fn reload_notifications(&self) {
        self.set_notifications_version.update(|v| *v += 1);
    }
}
