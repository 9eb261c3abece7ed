//! Export Dialog Component
//!
//! Modal for choosing CSV columns and date format, then downloading the file.

use chrono::{Local, Utc};
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

use crate::console;
use crate::export::{export_file_name, to_csv, ExportDateFormat, ExportField, ExportOptions, CSV_MIME};
use crate::models::Feedback;

/// Hand `content` to the browser as a file download
fn download_csv(file_name: &str, content: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let bag = web_sys::BlobPropertyBag::new();
    bag.set_type(CSV_MIME);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &bag)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = document();
    let link: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(file_name);
    web_sys::HtmlElement::style(&link).set_property("visibility", "hidden")?;

    let body = document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

#[component]
pub fn ExportDialog(
    /// Rows to export (the table's current view)
    #[prop(into)] feedbacks: Signal<Vec<Feedback>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let options = RwSignal::new(ExportOptions::default());

    let export = move |_| {
        let opts = options.get();
        let csv = feedbacks.with(|rows| to_csv(rows, &opts, &Local));
        let file_name = export_file_name(Utc::now());
        match download_csv(&file_name, &csv) {
            Ok(()) => console::log(&format!(
                "[EXPORT] Wrote {} rows to {}",
                feedbacks.with(|f| f.len()),
                file_name
            )),
            Err(e) => console::error(&format!("[EXPORT] Download failed: {:?}", e)),
        }
        on_close.run(());
    };

    view! {
        <div class="export-options-overlay">
            <div class="export-options-container">
                <h3>"Export Options"</h3>

                <div class="export-section">
                    <h4>"Fields to Include"</h4>
                    <div class="checkbox-group">
                        {ExportField::ALL.into_iter().map(|field| {
                            view! {
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || options.with(|o| o.is_enabled(field))
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            options.update(|o| o.set_field(field, checked));
                                        }
                                    />
                                    {field.header()}
                                </label>
                            }
                        }).collect_view()}
                    </div>
                </div>

                <div class="export-section">
                    <h4>"Format Options"</h4>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || options.with(|o| o.include_headers)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                options.update(|o| o.include_headers = checked);
                            }
                        />
                        "Include column headers"
                    </label>

                    <div class="date-format-selector">
                        <span>"Date Format:"</span>
                        <select
                            prop:value=move || options.with(|o| o.date_format.value())
                            disabled=move || !options.with(|o| o.is_enabled(ExportField::CreatedAt))
                            on:change=move |ev| {
                                if let Some(format) = ExportDateFormat::parse(&event_target_value(&ev)) {
                                    options.update(|o| o.date_format = format);
                                }
                            }
                        >
                            {ExportDateFormat::ALL.into_iter().map(|format| view! {
                                <option value=format.value()>{format.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="export-actions">
                    <button class="cancel-button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="confirm-export-button"
                        disabled=move || !options.with(|o| o.has_fields())
                        on:click=export
                    >
                        {move || format!("Export {} Records", feedbacks.with(|f| f.len()))}
                    </button>
                </div>
            </div>
        </div>
    }
}
