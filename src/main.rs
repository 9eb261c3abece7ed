//! Feedback Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod console;
mod context;
mod export;
mod format;
mod models;
mod stats;
mod store;
mod table;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
