//! Error types for the feedback API client.

use thiserror::Error;

/// Errors that can occur when talking to the feedback API.
///
/// Holds only owned strings so it can be cloned into signals.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport failure: no response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status.
    #[error("Server error (status {status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message supplied by the server, or the status reason.
        message: String,
    },

    /// The requested feedback does not exist.
    #[error("Feedback not found: {0}")]
    NotFound(String),

    /// Response body did not have the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid base URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A delete was requested without any ids.
    #[error("No feedback selected")]
    EmptySelection,
}

impl ApiError {
    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Server {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidResponse(err.to_string())
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Pull a human readable message out of an error response body.
///
/// Looks for a JSON `message` or `error` string first, then the raw text.
pub fn server_message(status: u16, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = json.get(key).and_then(|v| v.as_str()) {
                if !msg.is_empty() {
                    return msg.to_string();
                }
            }
        }
    }

    let body = body.trim();
    if !body.is_empty() && !body.starts_with('{') && !body.starts_with('<') {
        return body.to_string();
    }

    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown error")
        .to_string()
}

/// What the user is told when a delete fails
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteFailure {
    Offline,
    EndpointMissing,
    Server(String),
    Other(String),
}

impl DeleteFailure {
    /// Best-effort classification; `online` is the browser's network flag
    pub fn classify(err: &ApiError, online: bool) -> Self {
        match err {
            _ if !online => DeleteFailure::Offline,
            ApiError::Network(_) => DeleteFailure::Offline,
            ApiError::NotFound(_) | ApiError::Server { status: 404, .. } => DeleteFailure::EndpointMissing,
            ApiError::Server { message, .. } => DeleteFailure::Server(message.clone()),
            other => DeleteFailure::Other(other.to_string()),
        }
    }

    pub fn message(&self) -> String {
        match self {
            DeleteFailure::Offline => {
                "Could not delete feedback: you appear to be offline. Check your connection and try again.".to_string()
            }
            DeleteFailure::EndpointMissing => {
                "Could not delete feedback: the delete endpoint was not found (404).".to_string()
            }
            DeleteFailure::Server(msg) => format!("Could not delete feedback: {}", msg),
            DeleteFailure::Other(msg) => format!("Could not delete feedback. Please try again.\n\n{}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_json() {
        assert_eq!(server_message(500, r#"{"message":"db down"}"#), "db down");
        assert_eq!(server_message(400, r#"{"error":"bad ids"}"#), "bad ids");
    }

    #[test]
    fn test_message_from_text() {
        assert_eq!(server_message(502, "upstream timeout\n"), "upstream timeout");
    }

    #[test]
    fn test_message_falls_back_to_reason() {
        assert_eq!(server_message(404, ""), "Not Found");
        assert_eq!(server_message(500, "<html>oops</html>"), "Internal Server Error");
        assert_eq!(server_message(500, r#"{"message":""}"#), "Internal Server Error");
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Server { status: 503, message: "maintenance".into() };
        let display = err.to_string();
        assert!(display.contains("503"));
        assert!(display.contains("maintenance"));
        assert_eq!(err.status(), Some(503));
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }

    #[test]
    fn test_delete_failure_classification() {
        let server = ApiError::Server { status: 500, message: "db down".into() };
        assert_eq!(DeleteFailure::classify(&server, false), DeleteFailure::Offline);
        assert_eq!(DeleteFailure::classify(&ApiError::Network("refused".into()), true), DeleteFailure::Offline);
        assert_eq!(
            DeleteFailure::classify(&ApiError::Server { status: 404, message: "Not Found".into() }, true),
            DeleteFailure::EndpointMissing
        );
        assert_eq!(DeleteFailure::classify(&server, true), DeleteFailure::Server("db down".into()));
        assert!(DeleteFailure::classify(&server, true).message().ends_with("db down"));
        assert!(matches!(
            DeleteFailure::classify(&ApiError::InvalidResponse("eof".into()), true),
            DeleteFailure::Other(_)
        ));
    }
}
