//! Not Found Page

use leptos::prelude::*;

use crate::console;

/// Paths that serve the dashboard itself
const APP_PATHS: &[&str] = &["/", "/index.html"];

pub fn is_app_path(path: &str) -> bool {
    APP_PATHS.contains(&path)
}

#[component]
pub fn NotFound() -> impl IntoView {
    let back = move |_| {
        if let Err(e) = window().location().set_href("/") {
            console::error(&format!("[APP] Navigation failed: {:?}", e));
        }
    };

    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"The page you are looking for doesn't exist or has been moved."</p>
            <button class="not-found-back" on:click=back>"Back to Dashboard"</button>
        </div>
    }
}
