//! Feedback Dashboard App
//!
//! Root component: owns the store, loads feedbacks and switches between tabs.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::FeedbackClient;
use crate::components::{
    is_app_path, Dashboard, Diagnostics, FeedbackTable, NoticeBanner, NotFound, StatsView, TabBar,
};
use crate::config::AppConfig;
use crate::console;
use crate::context::AppContext;
use crate::store::{
    store_begin_load, store_set_failed, store_set_feedbacks, AppState, AppStateStoreFields, FetchGenerations, LoadStatus, Tab,
};

#[component]
pub fn App() -> impl IntoView {
    let path = window().location().pathname().unwrap_or_else(|_| "/".to_string());
    if !is_app_path(&path) {
        console::warn(&format!("[APP] Unknown path {}", path));
        return view! { <NotFound /> }.into_any();
    }

    let config = AppConfig::from_env();
    match FeedbackClient::new(config.api_base_url.clone()) {
        Ok(client) => view! { <FeedbackApp client=client /> }.into_any(),
        Err(e) => {
            console::error(&format!("[APP] Bad API configuration: {}", e));
            view! {
                <div class="error-container">
                    <p class="error-message">{format!("Invalid API URL configuration: {}", e)}</p>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn FeedbackApp(client: FeedbackClient) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), client);
    provide_context(ctx);

    console::log(&format!("[APP] Using API at {}", ctx.client().base_url()));

    let generations = StoredValue::new(FetchGenerations::default());

    // Load feedbacks on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        generations.update_value(|g| {
            g.begin();
        });
        let generation = generations.with_value(|g| g.latest());
        console::log(&format!("[APP] Loading feedbacks, trigger={} generation={}", trigger, generation));

        store_begin_load(&store);
        let client = ctx.client();
        spawn_local(async move {
            let result = client.list_feedbacks().await;
            if !generations.with_value(|g| g.is_current(generation)) {
                console::warn(&format!("[APP] Dropping stale response of generation {}", generation));
                return;
            }
            match result {
                Ok(loaded) => {
                    console::log(&format!("[APP] Loaded {} feedbacks", loaded.len()));
                    store_set_feedbacks(&store, loaded);
                }
                Err(e) => {
                    console::error(&format!("[APP] Error fetching feedbacks: {}", e));
                    store_set_failed(&store, "Failed to fetch feedbacks");
                }
            }
        });
    });

    // Ctrl+Shift+D toggles the diagnostics overlay
    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.ctrl_key() && ev.shift_key() && ev.key().eq_ignore_ascii_case("d") {
            ev.prevent_default();
            store.show_diagnostics().update(|show| *show = !*show);
        }
    });
    on_cleanup(move || keydown.remove());

    let feedbacks = Signal::derive(move || store.feedbacks().get());

    // Remount only on an actual status or tab change
    let status = Memo::new(move |_| store.status().get());
    let active_tab = Memo::new(move |_| store.active_tab().get());

    let content = move || match status.get() {
        LoadStatus::Loading => view! {
            <div class="loading-container">
                <div class="loading-spinner"></div>
                <p>"Loading feedbacks..."</p>
            </div>
        }
        .into_any(),
        LoadStatus::Failed(message) => view! {
            <div class="error-container">
                <p class="error-message">{message}</p>
                <button class="retry-button" on:click=move |_| ctx.reload()>"Retry"</button>
            </div>
        }
        .into_any(),
        LoadStatus::Ready => match active_tab.get() {
            Tab::Overview => view! { <Dashboard feedbacks=feedbacks /> }.into_any(),
            Tab::Table => view! { <FeedbackTable feedbacks=feedbacks /> }.into_any(),
            Tab::Stats => view! { <StatsView feedbacks=feedbacks /> }.into_any(),
        },
    };

    view! {
        <div class="app">
            <Show when=move || store.show_diagnostics().get()>
                <Diagnostics />
            </Show>

            <header class="app-header">
                <h1 class="app-title">"Feedback Dashboard"</h1>
                <div class="refresh-button-container">
                    <button
                        class="refresh-button"
                        disabled=move || store.refreshing().get()
                        on:click=move |_| ctx.reload()
                    >
                        {move || if store.refreshing().get() { "🔄 Refreshing..." } else { "🔄 Refresh" }}
                    </button>
                </div>
            </header>

            <TabBar />
            <NoticeBanner />
            {move || store.refresh_error().get().map(|message| view! {
                <div class="refresh-error">
                    <span>{message}</span>
                    <button class="retry-button" on:click=move |_| ctx.reload()>"Retry"</button>
                </div>
            })}

            <main class="app-main">{content}</main>
        </div>
    }
}
