//! CSV Export
//!
//! Builds the CSV text for the export dialog. The browser download lives in
//! `components::export_dialog`.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::format::{format_timestamp, DateStyle};
use crate::models::Feedback;

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Date rendering offered in the export dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportDateFormat {
    #[default]
    Local,
    Iso,
    Short,
}

impl ExportDateFormat {
    pub const ALL: [ExportDateFormat; 3] = [ExportDateFormat::Local, ExportDateFormat::Iso, ExportDateFormat::Short];

    pub fn value(&self) -> &'static str {
        match self {
            ExportDateFormat::Local => "local",
            ExportDateFormat::Iso => "iso",
            ExportDateFormat::Short => "short",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportDateFormat::Local => "Local (e.g. 1/1/2023, 12:00:00 PM)",
            ExportDateFormat::Iso => "ISO (e.g. 2023-01-01T12:00:00.000Z)",
            ExportDateFormat::Short => "Short Date (e.g. 1/1/2023)",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.value() == value)
    }

    fn style(&self) -> DateStyle {
        match self {
            ExportDateFormat::Local => DateStyle::Local,
            ExportDateFormat::Iso => DateStyle::Iso,
            ExportDateFormat::Short => DateStyle::Short,
        }
    }
}

/// Exportable columns, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportField {
    Name,
    Email,
    Feedback,
    ColorTheme,
    CreatedAt,
}

impl ExportField {
    pub const ALL: [ExportField; 5] = [
        ExportField::Name,
        ExportField::Email,
        ExportField::Feedback,
        ExportField::ColorTheme,
        ExportField::CreatedAt,
    ];

    /// Column header, also used as the checkbox label
    pub fn header(&self) -> &'static str {
        match self {
            ExportField::Name => "Name",
            ExportField::Email => "Email",
            ExportField::Feedback => "Feedback",
            ExportField::ColorTheme => "Theme",
            ExportField::CreatedAt => "Date",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub include_headers: bool,
    pub date_format: ExportDateFormat,
    fields: [bool; 5],
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_headers: true,
            date_format: ExportDateFormat::default(),
            fields: [true; 5],
        }
    }
}

impl ExportOptions {
    pub fn is_enabled(&self, field: ExportField) -> bool {
        self.fields[field as usize]
    }

    pub fn set_field(&mut self, field: ExportField, enabled: bool) {
        self.fields[field as usize] = enabled;
    }

    pub fn selected_fields(&self) -> Vec<ExportField> {
        ExportField::ALL.into_iter().filter(|f| self.is_enabled(*f)).collect()
    }

    pub fn has_fields(&self) -> bool {
        self.fields.iter().any(|enabled| *enabled)
    }
}

/// Quote a cell, doubling embedded quotes
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn cell<Tz>(fb: &Feedback, field: ExportField, options: &ExportOptions, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let value = match field {
        ExportField::Name => fb.name.clone(),
        ExportField::Email => fb.email.clone(),
        ExportField::Feedback => fb.feedback.clone(),
        ExportField::ColorTheme => fb.color_theme.as_str().to_string(),
        ExportField::CreatedAt => format_timestamp(&fb.created_at, options.date_format.style(), tz),
    };
    quote(&value)
}

/// Render `feedbacks` as CSV; lines are `\n`-separated with no trailing newline
pub fn to_csv<Tz>(feedbacks: &[Feedback], options: &ExportOptions, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let fields = options.selected_fields();
    let mut lines = Vec::with_capacity(feedbacks.len() + 1);

    if options.include_headers {
        lines.push(fields.iter().map(|f| f.header()).collect::<Vec<_>>().join(","));
    }
    for fb in feedbacks {
        let row: Vec<String> = fields.iter().map(|f| cell(fb, *f, options, tz)).collect();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// `feedback_export_2024-03-12.csv`
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("feedback_export_{}.csv", now.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{make_feedback, ColorTheme};

    fn sample() -> Vec<Feedback> {
        let mut quoted = make_feedback("2", "Bo \"B\" Li", ColorTheme::Red, "2024-03-12T17:45:00Z");
        quoted.email = "bo@example.com".to_string();
        quoted.feedback = "Line one, \"quoted\"\nline two".to_string();
        vec![make_feedback("1", "Ann", ColorTheme::Blue, "2024-03-12T09:05:07.250Z"), quoted]
    }

    #[test]
    fn test_default_export() {
        let csv = to_csv(&sample(), &ExportOptions::default(), &Utc);
        let expected = concat!(
            "Name,Email,Feedback,Theme,Date\n",
            "\"Ann\",\"ann@example.com\",\"Feedback from Ann\",\"blue\",\"3/12/2024, 9:05:07 AM\"\n",
            "\"Bo \"\"B\"\" Li\",\"bo@example.com\",\"Line one, \"\"quoted\"\"\nline two\",\"red\",\"3/12/2024, 5:45:00 PM\"",
        );
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_only_checked_columns() {
        let mut options = ExportOptions::default();
        options.set_field(ExportField::Email, false);
        options.set_field(ExportField::Feedback, false);
        options.date_format = ExportDateFormat::Iso;

        let csv = to_csv(&sample()[..1], &options, &Utc);
        assert_eq!(csv, "Name,Theme,Date\n\"Ann\",\"blue\",\"2024-03-12T09:05:07.250Z\"");
        assert_eq!(
            options.selected_fields(),
            vec![ExportField::Name, ExportField::ColorTheme, ExportField::CreatedAt]
        );
    }

    #[test]
    fn test_without_headers() {
        let mut options = ExportOptions::default();
        options.include_headers = false;
        for field in ExportField::ALL {
            options.set_field(field, field == ExportField::CreatedAt);
        }
        options.date_format = ExportDateFormat::Short;
        assert_eq!(to_csv(&sample(), &options, &Utc), "\"3/12/2024\"\n\"3/12/2024\"");
    }

    #[test]
    fn test_no_fields() {
        let mut options = ExportOptions::default();
        for field in ExportField::ALL {
            options.set_field(field, false);
        }
        assert!(!options.has_fields());
        assert!(ExportOptions::default().has_fields());
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_file_name_and_formats() {
        let now = DateTime::parse_from_rfc3339("2024-03-12T23:10:00Z").unwrap().with_timezone(&Utc);
        assert_eq!(export_file_name(now), "feedback_export_2024-03-12.csv");
        assert_eq!(ExportDateFormat::parse("iso"), Some(ExportDateFormat::Iso));
        assert_eq!(ExportDateFormat::parse("bogus"), None);
    }
}
