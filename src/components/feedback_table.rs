//! Feedback Table Component
//!
//! Searchable, filterable, sortable table with multi-select delete and CSV export.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::DeleteFailure;
use crate::components::{flash_notice, DeleteConfirmButton, ExportDialog, FeedbackDetail};
use crate::console;
use crate::context::use_app_context;
use crate::format::{format_timestamp, DateStyle};
use crate::models::{ColorTheme, Feedback};
use crate::store::use_app_store;
use crate::table::{Selection, SortField, TableQuery};

#[component]
pub fn FeedbackTable(#[prop(into)] feedbacks: Signal<Vec<Feedback>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let query = RwSignal::new(TableQuery::default());
    let selection = RwSignal::new(Selection::default());
    let show_export = RwSignal::new(false);
    let detail_id = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);

    let visible = Memo::new(move |_| feedbacks.with(|all| query.with(|q| q.apply(all))));

    // Forget ticked rows that vanished after a refresh
    Effect::new(move |_| {
        feedbacks.with(|all| selection.update(|s| s.retain_existing(all)));
    });

    let delete_selected = move |_: ()| {
        let ids = selection.with_untracked(|s| s.to_vec());
        if ids.is_empty() {
            return;
        }
        deleting.set(true);
        let client = ctx.client();
        spawn_local(async move {
            match client.delete_feedbacks(&ids).await {
                Ok(resp) => {
                    let count = resp.deleted_count.map(|c| c as usize).unwrap_or(ids.len());
                    console::log(&format!("[TABLE] Deleted {} feedbacks", count));
                    selection.update(|s| s.clear());
                    flash_notice(store, format!("Deleted {} feedbacks", count));
                }
                Err(e) => {
                    let online = window().navigator().on_line();
                    let failure = DeleteFailure::classify(&e, online);
                    console::error(&format!("[TABLE] Delete failed: {} ({:?})", e, failure));
                    let _ = window().alert_with_message(&failure.message());
                }
            }
            deleting.set(false);
            // Refetch on success and failure
            ctx.reload();
        });
    };

    let sort_header = move |field: SortField| {
        view! {
            <th class="sortable" on:click=move |_| query.update(|q| q.toggle_sort(field))>
                {field.label()}
                " "
                {move || query.with(|q| q.indicator(field)).unwrap_or("")}
            </th>
        }
    };

    let delete_label = Signal::derive(move || {
        if deleting.get() {
            "Deleting...".to_string()
        } else {
            format!("🗑 Delete Selected ({})", selection.with(|s| s.len()))
        }
    });
    let delete_count = Signal::derive(move || if deleting.get() { 0 } else { selection.with(|s| s.len()) });

    view! {
        <div class="feedback-table-container">
            <div class="table-controls">
                <div class="search-container">
                    <input
                        type="text"
                        placeholder="Search feedbacks..."
                        class="search-input"
                        prop:value=move || query.with(|q| q.search.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            query.update(|q| q.search = value);
                        }
                    />
                </div>

                <div class="filter-container">
                    <select
                        class="filter-select"
                        prop:value=move || query.with(|q| q.theme.map_or("all", |t| t.as_str()))
                        on:change=move |ev| {
                            let theme = ColorTheme::parse(&event_target_value(&ev));
                            query.update(|q| q.theme = theme);
                        }
                    >
                        <option value="all">"All Colors"</option>
                        {ColorTheme::ALL.into_iter().map(|theme| view! {
                            <option value=theme.as_str()>{theme.label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="table-actions">
                    <DeleteConfirmButton
                        label=delete_label
                        count=delete_count
                        on_confirm=Callback::new(delete_selected)
                    />
                    <button class="export-button" on:click=move |_| show_export.set(true)>
                        "📥 Export CSV"
                    </button>
                </div>
            </div>

            <div class="table-info">
                <p>
                    {move || format!(
                        "Showing {} of {} feedbacks",
                        visible.with(|v| v.len()),
                        feedbacks.with(|f| f.len()),
                    )}
                </p>
            </div>

            <div class="table-wrapper">
                <table class="feedback-table">
                    <thead>
                        <tr>
                            <th class="select-cell">
                                <input
                                    type="checkbox"
                                    prop:checked=move || visible.with(|v| selection.with(|s| s.covers(v)))
                                    on:change=move |_| {
                                        visible.with_untracked(|v| selection.update(|s| s.toggle_all(v)));
                                    }
                                />
                            </th>
                            {sort_header(SortField::Name)}
                            {sort_header(SortField::Email)}
                            <th>"Feedback"</th>
                            {sort_header(SortField::ColorTheme)}
                            {sort_header(SortField::CreatedAt)}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|fb| fb.id.clone()
                            children=move |fb| {
                                let id = fb.id.clone();
                                let row_id = fb.id.clone();
                                let toggle_id = fb.id.clone();
                                let is_selected = move || selection.with(|s| s.contains(&id));
                                let is_selected_class = is_selected.clone();
                                let date = format_timestamp(&fb.created_at, DateStyle::Stamp, &Local);
                                view! {
                                    <tr
                                        class="feedback-row"
                                        class:selected=is_selected_class
                                        on:click=move |_| detail_id.set(Some(row_id.clone()))
                                    >
                                        <td class="select-cell" on:click=|ev| ev.stop_propagation()>
                                            <input
                                                type="checkbox"
                                                prop:checked=is_selected
                                                on:change=move |_| selection.update(|s| s.toggle(&toggle_id))
                                            />
                                        </td>
                                        <td class="name-cell">{fb.name}</td>
                                        <td class="email-cell">{fb.email}</td>
                                        <td class="feedback-cell">
                                            <div class="feedback-text-container">{fb.feedback}</div>
                                        </td>
                                        <td class="theme-cell">
                                            <span class=format!("theme-badge {}", fb.color_theme)>
                                                {fb.color_theme.as_str()}
                                            </span>
                                        </td>
                                        <td class="date-cell">{date}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=move || visible.with(|v| v.is_empty())>
                <div class="no-results">
                    <p>"No feedbacks found matching your criteria."</p>
                </div>
            </Show>

            <Show when=move || show_export.get()>
                <ExportDialog
                    feedbacks=Signal::derive(move || visible.get())
                    on_close=Callback::new(move |_| show_export.set(false))
                />
            </Show>

            <FeedbackDetail
                feedback_id=detail_id
                on_close=Callback::new(move |_| detail_id.set(None))
            />
        </div>
    }
}
