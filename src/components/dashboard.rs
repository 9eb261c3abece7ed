//! Overview Dashboard Component
//!
//! Headline counters, the five most recent entries and the theme distribution.

use chrono::Local;
use leptos::prelude::*;

use crate::format::{format_timestamp, DateStyle};
use crate::models::{ColorTheme, Feedback};
use crate::stats;

/// Number of entries listed under "Recent Feedbacks"
const RECENT_COUNT: usize = 5;

#[component]
fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<usize>,
    icon: &'static str,
    color: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", color)>
            <div class="stat-icon">{icon}</div>
            <div class="stat-content">
                <h3 class="stat-value">{move || value.get()}</h3>
                <p class="stat-title">{title}</p>
            </div>
        </div>
    }
}

#[component]
fn RecentItem(feedback: Feedback) -> impl IntoView {
    let date = format_timestamp(&feedback.created_at, DateStyle::Short, &Local);
    view! {
        <div class=format!("feedback-item {}", feedback.color_theme)>
            <div class="feedback-header">
                <span class="feedback-name">{feedback.name}</span>
                <span class="feedback-date">{date}</span>
            </div>
            <p class="feedback-text">{feedback.feedback}</p>
            <span class="feedback-email">{feedback.email}</span>
        </div>
    }
}

#[component]
pub fn Dashboard(#[prop(into)] feedbacks: Signal<Vec<Feedback>>) -> impl IntoView {
    let total = Signal::derive(move || feedbacks.with(|f| f.len()));
    let unique = Signal::derive(move || feedbacks.with(|f| stats::unique_users(f)));
    let blue = Signal::derive(move || feedbacks.with(|f| stats::count_theme(f, ColorTheme::Blue)));
    let red = Signal::derive(move || feedbacks.with(|f| stats::count_theme(f, ColorTheme::Red)));

    let recent = move || feedbacks.with(|f| f.iter().take(RECENT_COUNT).cloned().collect::<Vec<_>>());
    let distribution = move || {
        feedbacks.with(|f| {
            let total = f.len();
            stats::theme_counts(f)
                .into_iter()
                .map(|(theme, count)| (theme, count, total))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="dashboard">
            <div class="stats-grid">
                <StatCard title="Total Feedbacks" value=total icon="📝" color="blue" />
                <StatCard title="Unique Users" value=unique icon="👥" color="green" />
                <StatCard title="Blue Theme" value=blue icon="🔵" color="blue" />
                <StatCard title="Red Theme" value=red icon="🔴" color="red" />
            </div>

            <div class="dashboard-content">
                <div class="recent-feedbacks">
                    <h2 class="section-title">"Recent Feedbacks"</h2>
                    <div class="feedback-list">
                        <For
                            each=recent
                            key=|fb| fb.id.clone()
                            children=move |fb| view! { <RecentItem feedback=fb /> }
                        />
                    </div>
                </div>

                <div class="color-distribution">
                    <h2 class="section-title">"Color Theme Distribution"</h2>
                    <div class="color-chart">
                        <For
                            each=distribution
                            key=|row| *row
                            children=move |(theme, count, total)| {
                                let width = stats::share_percent(count, total);
                                view! {
                                    <div class="color-bar">
                                        <div class="color-label">
                                            <span class=format!("color-dot {}", theme)></span>
                                            <span class="color-name">{theme.as_str()}</span>
                                        </div>
                                        <div class="color-progress">
                                            <div
                                                class=format!("color-fill {}", theme)
                                                style=format!("width: {:.1}%", width)
                                            ></div>
                                        </div>
                                        <span class="color-count">{count}</span>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
