//! UI Components
//!
//! Leptos views of the feedback dashboard.

mod tab_bar;
mod dashboard;
mod feedback_table;
mod stats_view;
mod export_dialog;
mod feedback_detail;
mod delete_confirm_button;
mod diagnostics;
mod notice;
mod not_found;

pub use tab_bar::TabBar;
pub use dashboard::Dashboard;
pub use feedback_table::FeedbackTable;
pub use stats_view::StatsView;
pub use export_dialog::ExportDialog;
pub use feedback_detail::FeedbackDetail;
pub use delete_confirm_button::DeleteConfirmButton;
pub use diagnostics::Diagnostics;
pub use notice::{flash_notice, NoticeBanner};
pub use not_found::{is_app_path, NotFound};
