//! Frontend Models
//!
//! Data structures matching the feedback API payloads.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Color theme attached to a feedback entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
}

impl ColorTheme {
    /// All themes in display order
    pub const ALL: [ColorTheme; 5] = [
        ColorTheme::Blue,
        ColorTheme::Red,
        ColorTheme::Green,
        ColorTheme::Yellow,
        ColorTheme::Purple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Blue => "blue",
            ColorTheme::Red => "red",
            ColorTheme::Green => "green",
            ColorTheme::Yellow => "yellow",
            ColorTheme::Purple => "purple",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorTheme::Blue => "Blue",
            ColorTheme::Red => "Red",
            ColorTheme::Green => "Green",
            ColorTheme::Yellow => "Yellow",
            ColorTheme::Purple => "Purple",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.as_str() == value)
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feedback record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub feedback: String,
    #[serde(rename = "colorTheme")]
    pub color_theme: ColorTheme,
    /// Raw ISO-8601 timestamp as sent by the server
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Feedback {
    /// Creation instant, `None` if the server sent something unparseable
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }

    /// Creation day in UTC, falling back to the date prefix of the raw string
    pub fn created_on(&self) -> Option<NaiveDate> {
        if let Some(dt) = self.created_at_utc() {
            return Some(dt.date_naive());
        }
        let prefix = self.created_at.split('T').next()?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }
}

/// `{ "data": ... }` envelope used by every read endpoint
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}

/// Body sent to both delete endpoints
#[derive(Debug, Serialize)]
pub struct DeleteRequest<'a> {
    pub ids: &'a [String],
}

/// Success body of a delete call; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "deletedCount", alias = "deleted_count")]
    pub deleted_count: Option<u64>,
}

#[cfg(test)]
pub(crate) fn make_feedback(id: &str, name: &str, theme: ColorTheme, created_at: &str) -> Feedback {
    Feedback {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        feedback: format!("Feedback from {}", name),
        color_theme: theme,
        created_at: created_at.to_string(),
    }
}
