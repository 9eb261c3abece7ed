//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Feedback;

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Table,
    Stats,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Table, Tab::Stats];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "📊 Overview",
            Tab::Table => "📋 All Feedbacks",
            Tab::Stats => "📈 Statistics",
        }
    }
}

/// Where the feedback list currently stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

impl LoadStatus {
    /// Status while a reload is in flight; a loaded view stays mounted
    pub fn reloading(&self) -> LoadStatus {
        match self {
            LoadStatus::Ready => LoadStatus::Ready,
            _ => LoadStatus::Loading,
        }
    }

    /// Status after a failed fetch; a loaded view keeps showing its snapshot
    pub fn failed(&self, message: impl Into<String>) -> LoadStatus {
        match self {
            LoadStatus::Ready => LoadStatus::Ready,
            _ => LoadStatus::Failed(message.into()),
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Snapshot from the last successful fetch
    pub feedbacks: Vec<Feedback>,
    pub status: LoadStatus,
    /// A reload is in flight
    pub refreshing: bool,
    /// Last failed reload while a snapshot was on screen
    pub refresh_error: Option<String>,
    pub active_tab: Tab,
    /// Ctrl+Shift+D overlay
    pub show_diagnostics: bool,
    /// Transient success message, e.g. after a delete
    pub notice: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Numbers list fetches so that only the newest response is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchGenerations {
    latest: u64,
}

impl FetchGenerations {
    /// Start a new fetch and return its generation
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }
}

// ========================
// Store Helper Functions
// ========================

/// Mark a reload as started
pub fn store_begin_load(store: &AppStore) {
    let next = store.status().with_untracked(|s| s.reloading());
    store.status().set(next);
    store.refreshing().set(true);
}

/// Apply a successful fetch
pub fn store_set_feedbacks(store: &AppStore, feedbacks: Vec<Feedback>) {
    store.feedbacks().set(feedbacks);
    store.status().set(LoadStatus::Ready);
    store.refreshing().set(false);
    store.refresh_error().set(None);
}

/// Record a failed fetch; the previous snapshot is kept
pub fn store_set_failed(store: &AppStore, message: impl Into<String>) {
    let message = message.into();
    let next = store.status().with_untracked(|s| s.failed(message.clone()));
    if next == LoadStatus::Ready {
        store.refresh_error().set(Some(message));
    }
    store.status().set(next);
    store.refreshing().set(false);
}

/// Switch tabs
pub fn store_set_tab(store: &AppStore, tab: Tab) {
    store.active_tab().set(tab);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_generation_is_current() {
        let mut gens = FetchGenerations::default();
        let first = gens.begin();
        let second = gens.begin();
        assert!(!gens.is_current(first));
        assert!(gens.is_current(second));
        assert_eq!(gens.latest(), second);
    }

    #[test]
    fn test_defaults() {
        let state = AppState::default();
        assert_eq!(state.status, LoadStatus::Loading);
        assert_eq!(state.active_tab, Tab::Overview);
        assert!(!state.show_diagnostics);
        assert!(!state.refreshing);
        assert!(state.feedbacks.is_empty());
    }

    #[test]
    fn test_reload_keeps_loaded_view() {
        assert_eq!(LoadStatus::Ready.reloading(), LoadStatus::Ready);
        assert_eq!(LoadStatus::Loading.reloading(), LoadStatus::Loading);
        assert_eq!(LoadStatus::Failed("x".into()).reloading(), LoadStatus::Loading);
    }

    #[test]
    fn test_failure_only_replaces_view_without_snapshot() {
        assert_eq!(LoadStatus::Ready.failed("boom"), LoadStatus::Ready);
        assert_eq!(LoadStatus::Loading.failed("boom"), LoadStatus::Failed("boom".into()));
    }

    #[test]
    fn test_refresh_cycle_through_store() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::default());
            let fb = crate::models::make_feedback("1", "Ana", crate::models::ColorTheme::Blue, "2024-03-12T09:30:00Z");

            store_begin_load(&store);
            assert_eq!(store.status().get_untracked(), LoadStatus::Loading);
            store_set_feedbacks(&store, vec![fb.clone()]);
            assert_eq!(store.status().get_untracked(), LoadStatus::Ready);

            store_begin_load(&store);
            assert_eq!(store.status().get_untracked(), LoadStatus::Ready);
            assert!(store.refreshing().get_untracked());

            store_set_failed(&store, "Failed to fetch feedbacks");
            assert_eq!(store.status().get_untracked(), LoadStatus::Ready);
            assert!(!store.refreshing().get_untracked());
            assert_eq!(store.refresh_error().get_untracked().as_deref(), Some("Failed to fetch feedbacks"));
            assert_eq!(store.feedbacks().get_untracked(), vec![fb]);

            store_set_feedbacks(&store, vec![]);
            assert_eq!(store.refresh_error().get_untracked(), None);
        });
    }
}
