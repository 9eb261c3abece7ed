//! Notice Banner
//!
//! Short-lived success message shown under the header.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{use_app_store, AppStateStoreFields, AppStore};

const NOTICE_MS: u32 = 3_000;

/// Show `message` and clear it again after a few seconds
pub fn flash_notice(store: AppStore, message: String) {
    store.notice().set(Some(message.clone()));
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_MS).await;
        // A newer notice may have replaced ours
        if store.notice().get_untracked().as_deref() == Some(message.as_str()) {
            store.notice().set(None);
        }
    });
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.notice().get().map(|msg| view! {
            <div class="notice-banner" on:click=move |_| store.notice().set(None)>
                {msg}
            </div>
        })}
    }
}
