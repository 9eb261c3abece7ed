//! Tab Bar Component
//!
//! Navigation between the overview, table and statistics tabs.

use leptos::prelude::*;

use crate::store::{store_set_tab, use_app_store, AppStateStoreFields, Tab};

#[component]
pub fn TabBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="app-nav">
            {Tab::ALL.into_iter().map(|tab| {
                let is_active = move || store.active_tab().get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "nav-button active" } else { "nav-button" }
                        on:click=move |_| store_set_tab(&store, tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
