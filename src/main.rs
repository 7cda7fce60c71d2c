#![allow(warnings)]
//! Taskboard Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod models;
mod session;
mod store;
mod tree;

use app::Root;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(Root);
}
