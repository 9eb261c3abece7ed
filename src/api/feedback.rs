//! Feedback Endpoints
//!
//! List, fetch and delete feedback records.

use super::{encode_segment, ApiError, FeedbackClient, Result};
use crate::console;
use crate::models::{DeleteRequest, DeleteResponse, Envelope, Feedback};

const LIST_PATH: &str = "/feedback/all";
const DELETE_PATH: &str = "/feedback/delete";
const FALLBACK_DELETE_PATH: &str = "/deleteFeedbacks";
const PING_PATH: &str = "/ping";

impl FeedbackClient {
    /// Fetch every feedback, in server order.
    pub async fn list_feedbacks(&self) -> Result<Vec<Feedback>> {
        let result: Result<Vec<Feedback>> = async {
            let response = self.get(LIST_PATH).await?;
            let envelope: Envelope<Vec<Feedback>> = Self::json(response).await?;
            Ok(envelope.data.unwrap_or_default())
        }
        .await;

        if let Err(e) = &result {
            console::error(&format!("[API] list_feedbacks failed: {}", e));
        }
        result
    }

    /// Fetch one feedback by id.
    pub async fn get_feedback(&self, id: &str) -> Result<Feedback> {
        let path = format!("/feedback/{}", encode_segment(id));
        let response = self.get(&path).await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id.to_string()));
        }

        let envelope: Envelope<Feedback> = Self::json(response).await.map_err(|e| {
            console::error(&format!("[API] get_feedback({}) failed: {}", id, e));
            e
        })?;
        envelope.data.ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    /// Delete feedbacks by id.
    ///
    /// Tries `/feedback/delete` first and falls back to `/deleteFeedbacks`;
    /// the fallback's error is returned if both fail.
    pub async fn delete_feedbacks(&self, ids: &[String]) -> Result<DeleteResponse> {
        if ids.is_empty() {
            return Err(ApiError::EmptySelection);
        }

        console::log(&format!("[API] Deleting {} feedbacks via {}", ids.len(), self.url(DELETE_PATH)));

        match self.delete_at(DELETE_PATH, ids).await {
            Ok(resp) => Ok(resp),
            Err(primary) => {
                console::warn(&format!("[API] {} failed ({}), retrying {}", DELETE_PATH, primary, FALLBACK_DELETE_PATH));
                self.delete_at(FALLBACK_DELETE_PATH, ids).await.map_err(|fallback| {
                    console::error(&format!("[API] {} failed as well: {}", FALLBACK_DELETE_PATH, fallback));
                    fallback
                })
            }
        }
    }

    async fn delete_at(&self, path: &str, ids: &[String]) -> Result<DeleteResponse> {
        let response = self.post(path, &DeleteRequest { ids }).await?;
        let response = Self::check_status(response).await?;
        let body = response.text().await.map_err(ApiError::from)?;
        let parsed = parse_delete_body(&body);
        console::log(&format!("[API] Delete via {} succeeded: {:?}", path, parsed));
        Ok(parsed)
    }

    /// Connectivity probe used by the diagnostics overlay.
    pub async fn ping(&self) -> Result<()> {
        let response = self.get(PING_PATH).await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

/// Success bodies are free-form; anything unparseable counts as a plain success
fn parse_delete_body(body: &str) -> DeleteResponse {
    if body.trim().is_empty() {
        return DeleteResponse::default();
    }
    serde_json::from_str(body).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorTheme;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_parse_delete_body() {
        assert_eq!(parse_delete_body(""), DeleteResponse::default());
        assert_eq!(parse_delete_body("OK"), DeleteResponse::default());
        let resp = parse_delete_body(r#"{"message":"Deleted","deletedCount":2}"#);
        assert_eq!(resp.message.as_deref(), Some("Deleted"));
        assert_eq!(resp.deleted_count, Some(2));
    }

    #[test]
    fn test_delete_request_shape() {
        let ids = vec!["a".to_string(), "b".to_string()];
        let json = serde_json::to_string(&DeleteRequest { ids: &ids }).unwrap();
        assert_eq!(json, r#"{"ids":["a","b"]}"#);
    }

    #[tokio::test]
    async fn test_delete_with_no_ids_is_rejected_before_network() {
        let mock_server = MockServer::start().await;
        let client = FeedbackClient::new(mock_server.uri()).unwrap();

        let result = client.delete_feedbacks(&[]).await;
        assert_eq!(result, Err(ApiError::EmptySelection));
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_feedbacks_unwraps_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/feedback/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "_id": "65f0",
                    "name": "Ana",
                    "email": "ana@example.com",
                    "feedback": "Nice",
                    "colorTheme": "green",
                    "createdAt": "2024-03-12T09:30:00.000Z"
                }]
            })))
            .mount(&mock_server)
            .await;

        let client = FeedbackClient::new(mock_server.uri()).unwrap();
        let feedbacks = client.list_feedbacks().await.unwrap();
        assert_eq!(feedbacks.len(), 1);
        assert_eq!(feedbacks[0].id, "65f0");
        assert_eq!(feedbacks[0].color_theme, ColorTheme::Green);
    }

    #[tokio::test]
    async fn test_list_feedbacks_without_data_is_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/feedback/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let client = FeedbackClient::new(mock_server.uri()).unwrap();
        assert_eq!(client.list_feedbacks().await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_list_feedbacks_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/feedback/all"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "message": "Database unavailable"
            })))
            .mount(&mock_server)
            .await;

        let client = FeedbackClient::new(mock_server.uri()).unwrap();
        match client.list_feedbacks().await {
            Err(ApiError::Server { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Database unavailable");
            }
            other => panic!("Expected Server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_feedback_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/feedback/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Feedback not found"
            })))
            .mount(&mock_server)
            .await;

        let client = FeedbackClient::new(mock_server.uri()).unwrap();
        assert_eq!(
            client.get_feedback("missing").await,
            Err(ApiError::NotFound("missing".to_string()))
        );
    }

    #[tokio::test]
    async fn test_get_feedback_null_data_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/feedback/65f0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
            .mount(&mock_server)
            .await;

        let client = FeedbackClient::new(mock_server.uri()).unwrap();
        assert_eq!(
            client.get_feedback("65f0").await,
            Err(ApiError::NotFound("65f0".to_string()))
        );
    }

    #[tokio::test]
    async fn test_delete_uses_primary_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/feedback/delete"))
            .and(body_json(json!({ "ids": ["a", "b"] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Deleted",
                "deletedCount": 2
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/deleteFeedbacks"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = FeedbackClient::new(mock_server.uri()).unwrap();
        let resp = client.delete_feedbacks(&ids(&["a", "b"])).await.unwrap();
        assert_eq!(resp.deleted_count, Some(2));
    }

    #[tokio::test]
    async fn test_delete_falls_back_after_primary_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/feedback/delete"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/deleteFeedbacks"))
            .and(body_json(json!({ "ids": ["a"] })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = FeedbackClient::new(mock_server.uri()).unwrap();
        let resp = client.delete_feedbacks(&ids(&["a"])).await.unwrap();
        assert_eq!(resp, DeleteResponse::default());

        let paths: Vec<String> = mock_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect();
        assert_eq!(paths, vec!["/feedback/delete", "/deleteFeedbacks"]);
    }

    #[tokio::test]
    async fn test_delete_reports_fallback_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/feedback/delete"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "message": "primary broke"
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/deleteFeedbacks"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({
                "error": "fallback broke"
            })))
            .mount(&mock_server)
            .await;

        let client = FeedbackClient::new(mock_server.uri()).unwrap();
        assert_eq!(
            client.delete_feedbacks(&ids(&["a"])).await,
            Err(ApiError::Server {
                status: 503,
                message: "fallback broke".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_ping() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = FeedbackClient::new(mock_server.uri()).unwrap();
        assert_eq!(client.ping().await, Ok(()));

        let down = FeedbackClient::new(format!("{}/missing", mock_server.uri())).unwrap();
        assert!(matches!(down.ping().await, Err(ApiError::Server { status: 404, .. })));
    }

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }
}
