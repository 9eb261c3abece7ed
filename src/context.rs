//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::FeedbackClient;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch feedbacks - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch feedbacks - write
    set_reload_trigger: WriteSignal<u32>,
    /// Shared API client
    client: StoredValue<FeedbackClient, LocalStorage>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), client: FeedbackClient) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            client: StoredValue::new_local(client),
        }
    }

    /// Trigger a refetch of the feedback list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn client(&self) -> FeedbackClient {
        self.client.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
