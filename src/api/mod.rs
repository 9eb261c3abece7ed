//! Feedback API Client
//!
//! Thin wrapper around the remote feedback service, organized by endpoint.

mod error;
mod feedback;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use error::{server_message, ApiError, DeleteFailure, Result};

/// Characters escaped when an id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Client for the feedback API.
///
/// Cheap to clone; shares the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct FeedbackClient {
    base_url: String,
    http: HttpClient,
}

impl FeedbackClient {
    /// Create a client for `base_url` (e.g. "http://localhost:3001/api").
    ///
    /// Fails with [`ApiError::InvalidUrl`] unless the URL is http(s).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {}",
                base_url
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: HttpClient::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path.
    fn url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        self.http
            .get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(ApiError::from)
    }

    async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        let url = self.url(path);
        self.http.post(&url).json(body).send().await.map_err(ApiError::from)
    }

    /// Turn a non-2xx response into [`ApiError::Server`].
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Server {
            status: status.as_u16(),
            message: server_message(status.as_u16(), &body),
        })
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        response.json::<T>().await.map_err(ApiError::from)
    }
}

/// Escape an id so it can be used as one URL path segment
pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        assert!(FeedbackClient::new("http://localhost:3001/api").is_ok());
        assert!(FeedbackClient::new("https://feedback.example.com/api").is_ok());
    }

    #[test]
    fn test_client_invalid_url() {
        match FeedbackClient::new("localhost:3001") {
            Err(ApiError::InvalidUrl(msg)) => assert!(msg.contains("http://")),
            other => panic!("Expected InvalidUrl error, got {:?}", other),
        }
    }

    #[test]
    fn test_url_normalization() {
        let client = FeedbackClient::new("http://localhost:3001/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3001/api");
        assert_eq!(client.url("/feedback/all"), "http://localhost:3001/api/feedback/all");
        assert_eq!(client.url("ping"), "http://localhost:3001/api/ping");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("65f0c0ffee"), "65f0c0ffee");
        assert_eq!(encode_segment("a/b c?"), "a%2Fb%20c%3F");
    }
}
