//! Diagnostics Overlay
//!
//! Debug panel toggled with Ctrl+Shift+D.

use chrono::{SecondsFormat, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::context::use_app_context;

fn window_size() -> String {
    let win = window();
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    format!("{}x{}", dim(win.inner_width()), dim(win.inner_height()))
}

#[component]
pub fn Diagnostics() -> impl IntoView {
    let ctx = use_app_context();
    let api_url = AppConfig::api_url_override();

    let navigator = window().navigator();
    let browser = navigator.user_agent().unwrap_or_else(|_| "unknown".to_string());
    let network = if navigator.on_line() { "Online" } else { "Offline" };
    let render_time = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    let initial = if api_url.is_some() { "Checking..." } else { "Not checked" };
    let (api_status, set_api_status) = signal(initial.to_string());

    // Only probe when a URL was configured explicitly
    if api_url.is_some() {
        let client = ctx.client();
        spawn_local(async move {
            let status = match client.ping().await {
                Ok(()) => "Connected".to_string(),
                Err(e) => format!("Error: {}", e),
            };
            set_api_status.set(status);
        });
    }

    let rows = move || {
        vec![
            ("apiUrl", api_url.unwrap_or("Not set").to_string()),
            ("browserInfo", browser.clone()),
            ("windowSize", window_size()),
            ("networkStatus", network.to_string()),
            ("apiStatus", api_status.get()),
            ("renderTime", render_time.clone()),
        ]
    };

    view! {
        <div class="diagnostics-panel">
            <h3>"Diagnostics:"</h3>
            <pre>
                {move || rows()
                    .into_iter()
                    .map(|(key, value)| format!("{}: {}\n", key, value))
                    .collect::<String>()}
            </pre>
        </div>
    }
}
