//! Statistics View Component
//!
//! Detailed numbers, theme distribution, 7-day activity and insights.

use chrono::Utc;
use leptos::prelude::*;

use crate::format::month_day;
use crate::models::Feedback;
use crate::stats::{self, FeedbackStats};

#[component]
fn StatBox(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="stat-box">
            <div class="stat-icon">{icon}</div>
            <div class="stat-info">
                <h3>{title}</h3>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn StatsView(#[prop(into)] feedbacks: Signal<Vec<Feedback>>) -> impl IntoView {
    let stats = Memo::new(move |_| {
        let today = Utc::now().date_naive();
        feedbacks.with(|f| FeedbackStats::compute(f, today))
    });

    view! {
        <div class="stats-container">
            <div class="stats-overview">
                <h2 class="stats-title">"Detailed Statistics"</h2>
                <div class="stats-grid">
                    <StatBox icon="📊" title="Total Feedbacks">
                        <p class="stat-number">{move || stats.with(|s| s.total)}</p>
                    </StatBox>
                    <StatBox icon="👤" title="Unique Users">
                        <p class="stat-number">{move || stats.with(|s| s.unique_users)}</p>
                    </StatBox>
                    <StatBox icon="📝" title="Avg. Feedback Length">
                        <p class="stat-number">{move || format!("{} chars", stats.with(|s| s.average_length))}</p>
                    </StatBox>
                    <StatBox icon="🏆" title="Most Active User">
                        {move || {
                            let (email, count) = stats.with(|s| s.most_active_user.clone()).unwrap_or_default();
                            view! {
                                <p class="stat-number">{format!("{} feedbacks", count)}</p>
                                <p class="stat-detail">{email}</p>
                            }
                        }}
                    </StatBox>
                </div>
            </div>

            <div class="charts-section">
                <div class="chart-container">
                    <h3 class="chart-title">"Color Theme Distribution"</h3>
                    <div class="color-chart-detailed">
                        {move || {
                            let (themes, total) = stats.with(|s| (s.themes.clone(), s.total));
                            themes.into_iter().map(|(theme, count)| {
                                let share = stats::share_percent(count, total);
                                view! {
                                    <div class="color-stat-row">
                                        <div class="color-info">
                                            <span class=format!("color-indicator {}", theme)></span>
                                            <span class="color-label">{theme.as_str()}</span>
                                        </div>
                                        <div class="color-bar-container">
                                            <div
                                                class=format!("color-bar {}", theme)
                                                style=format!("width: {:.1}%", share)
                                            ></div>
                                        </div>
                                        <div class="color-stats">
                                            <span class="color-count">{count}</span>
                                            <span class="color-percentage">{format!("({}%)", share.round())}</span>
                                        </div>
                                    </div>
                                }
                            }).collect_view()
                        }}
                    </div>
                </div>

                <div class="chart-container">
                    <h3 class="chart-title">"Last 7 Days Activity"</h3>
                    <div class="daily-chart">
                        {move || {
                            let daily = stats.with(|s| s.daily.clone());
                            daily.iter().map(|day| {
                                let height = stats::bar_height(day.count, &daily);
                                view! {
                                    <div class="daily-bar-container">
                                        <div class="daily-bar-wrapper">
                                            <div class="daily-bar" style=format!("height: {:.1}%", height)></div>
                                        </div>
                                        <div class="daily-label">
                                            <span class="daily-date">{month_day(day.date)}</span>
                                            <span class="daily-count">{day.count}</span>
                                        </div>
                                    </div>
                                }
                            }).collect_view()
                        }}
                    </div>
                </div>
            </div>

            <div class="insights-section">
                <h3 class="insights-title">"Key Insights"</h3>
                <div class="insights-grid">
                    <div class="insight-card">
                        <h4>"Engagement Rate"</h4>
                        <p>{move || stats.with(|s| s.engagement_text())}</p>
                    </div>
                    <div class="insight-card">
                        <h4>"Popular Theme"</h4>
                        <p>{move || stats.with(|s| s.popular_theme_text())}</p>
                    </div>
                    <div class="insight-card">
                        <h4>"Feedback Quality"</h4>
                        <p>{move || stats.with(|s| s.quality_text())}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
