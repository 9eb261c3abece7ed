//! Feedback Detail Component
//!
//! Side panel that loads a single feedback by id.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiError;
use crate::context::use_app_context;
use crate::format::{format_timestamp, DateStyle};
use crate::models::Feedback;

#[derive(Clone, PartialEq)]
enum DetailState {
    Loading,
    Loaded(Feedback),
    Missing,
    Failed(String),
}

#[component]
pub fn FeedbackDetail(
    #[prop(into)] feedback_id: Signal<Option<String>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(DetailState::Loading);

    Effect::new(move |_| {
        let Some(id) = feedback_id.get() else { return };
        set_state.set(DetailState::Loading);
        let client = ctx.client();
        spawn_local(async move {
            let next = match client.get_feedback(&id).await {
                Ok(fb) => DetailState::Loaded(fb),
                Err(ApiError::NotFound(_)) => DetailState::Missing,
                Err(e) => DetailState::Failed(e.to_string()),
            };
            // Ignore the answer if another row was opened meanwhile
            if feedback_id.get_untracked().as_deref() == Some(id.as_str()) {
                set_state.set(next);
            }
        });
    });

    view! {
        <Show when=move || feedback_id.with(|id| id.is_some())>
            <aside class="feedback-detail">
                <button class="detail-close" on:click=move |_| on_close.run(())>"✕"</button>
                {move || match state.get() {
                    DetailState::Loading => view! { <p class="detail-loading">"Loading feedback..."</p> }.into_any(),
                    DetailState::Missing => view! { <p class="detail-error">"Feedback not found"</p> }.into_any(),
                    DetailState::Failed(msg) => view! {
                        <p class="detail-error">"Failed to load feedback"</p>
                        <p class="detail-error-detail">{msg}</p>
                    }.into_any(),
                    DetailState::Loaded(fb) => {
                        let created = format_timestamp(&fb.created_at, DateStyle::Local, &Local);
                        view! {
                            <h3 class="detail-name">{fb.name}</h3>
                            <p class="detail-email">{fb.email}</p>
                            <span class=format!("theme-badge {}", fb.color_theme)>{fb.color_theme.as_str()}</span>
                            <p class="detail-date">{created}</p>
                            <p class="detail-body">{fb.feedback}</p>
                            <p class="detail-id">{format!("ID: {}", fb.id)}</p>
                        }.into_any()
                    }
                }}
            </aside>
        </Show>
    }
}
