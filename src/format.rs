//! Date Formatting
//!
//! Timestamp renderings shared by the views and the CSV export.
//! Everything takes the target time zone so views pass `Local` and tests pass `Utc`.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};

/// How a timestamp is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `3/12/2024`
    Short,
    /// `3/12/2024, 9:30:00 AM`
    Local,
    /// `Mar 12, 2024, 09:30 AM`
    Stamp,
    /// `2024-03-12T09:30:00.000Z`, always UTC
    Iso,
}

pub fn format_instant<Tz>(instant: DateTime<Utc>, style: DateStyle, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let pattern = match style {
        DateStyle::Short => "%-m/%-d/%Y",
        DateStyle::Local => "%-m/%-d/%Y, %-I:%M:%S %p",
        DateStyle::Stamp => "%b %-d, %Y, %I:%M %p",
        DateStyle::Iso => return instant.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    instant.with_timezone(tz).format(pattern).to_string()
}

/// Render a raw server timestamp; unparseable input is returned as-is
pub fn format_timestamp<Tz>(raw: &str, style: DateStyle, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => format_instant(dt.with_timezone(&Utc), style, tz),
        Err(_) => raw.to_string(),
    }
}

/// `Mar 12`, used under the daily activity bars
pub fn month_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
