//! Build Configuration
//!
//! The API base URL is baked in at compile time from `FEEDBACK_API_URL`.

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Resolved frontend configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::with_override(Self::api_url_override())
    }

    fn with_override(api_url: Option<&str>) -> Self {
        let api_base_url = match api_url.map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => DEFAULT_API_URL.to_string(),
        };
        Self { api_base_url }
    }

    /// The `FEEDBACK_API_URL` value given at build time, if any
    pub fn api_url_override() -> Option<&'static str> {
        option_env!("FEEDBACK_API_URL")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_override(None)
    }
}
