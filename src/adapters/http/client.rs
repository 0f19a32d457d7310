//! Resource fetcher and batch orchestrator
//!
//! One [`ResourceClient`] wraps a shared `reqwest::Client` (safe for
//! concurrent use) with a fixed per-request timeout. [`fetch`] performs a
//! single attempt and classifies the result; [`fetch_all`] dispatches a
//! whole batch with a bounded number of in-flight requests while keeping
//! the outcome order aligned with the input order.
//!
//! [`fetch`]: ResourceClient::fetch
//! [`fetch_all`]: ResourceClient::fetch_all

use crate::config::SourceConfig;
use crate::domain::{FailureReason, FetchOutcome, Post, PostFetchError, ResourceId, Result};
use futures::stream::{self, StreamExt};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Duration;

/// HTTP client for fetching remote resources
pub struct ResourceClient {
    /// Shared HTTP client with the per-request timeout applied
    client: Client,

    /// Base URL; request URLs are this value with the identifier appended
    base_url: String,

    /// Maximum number of simultaneous in-flight requests
    max_in_flight: usize,
}

impl ResourceClient {
    /// Create a new resource client from source configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the underlying HTTP client cannot
    /// be built.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                PostFetchError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            max_in_flight: config.max_in_flight,
        })
    }

    /// Fetch one resource and classify the outcome
    ///
    /// This never returns an error; every failure mode is captured in the
    /// returned variant. Each failure emits one log line with the URL and
    /// reason; success is silent at this layer.
    pub async fn fetch(&self, identifier: &ResourceId) -> FetchOutcome {
        let url = format!("{}{}", self.base_url, identifier);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                let reason = if e.is_timeout() {
                    FailureReason::Timeout
                } else {
                    FailureReason::Network(e.to_string())
                };
                tracing::error!(url = %url, reason = %reason, "Fetch failed");
                return FetchOutcome::Failure(reason);
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            let reason = FailureReason::HttpStatus(status.as_u16());
            tracing::error!(url = %url, reason = %reason, "Fetch failed");
            return FetchOutcome::Failure(reason);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.contains("application/json") {
            let reason = FailureReason::UnexpectedContentType(content_type);
            tracing::error!(url = %url, reason = %reason, "Fetch failed");
            return FetchOutcome::Failure(reason);
        }

        match response.json::<Post>().await {
            Ok(post) => FetchOutcome::Success(post),
            Err(e) => {
                // Timeouts can also surface while reading the body
                let reason = if e.is_timeout() {
                    FailureReason::Timeout
                } else {
                    FailureReason::Network(e.to_string())
                };
                tracing::error!(url = %url, reason = %reason, "Fetch failed");
                FetchOutcome::Failure(reason)
            }
        }
    }

    /// Fetch a whole identifier batch concurrently
    ///
    /// At most `max_in_flight` requests run simultaneously. The returned
    /// outcomes mirror the input order regardless of completion order, and
    /// the result length always equals the batch length. This operation
    /// itself never fails; individual failures live in the outcome set.
    pub async fn fetch_all(&self, identifiers: &[ResourceId]) -> Vec<FetchOutcome> {
        let max_in_flight = self.max_in_flight.max(1);

        let outcomes: Vec<FetchOutcome> = stream::iter(identifiers)
            .map(|identifier| self.fetch(identifier))
            .buffered(max_in_flight)
            .collect()
            .await;

        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        tracing::info!(
            attempted = identifiers.len(),
            succeeded = succeeded,
            failed = identifiers.len() - succeeded,
            "Fetch batch completed"
        );

        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn client_for(base_url: &str) -> ResourceClient {
        ResourceClient::new(&SourceConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
            max_in_flight: 4,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/posts/1")
            .with_status(200)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body(r#"{"id": 1, "ownerId": 10, "title": "t", "body": "b"}"#)
            .create_async()
            .await;

        let client = client_for(&format!("{}/posts/", server.url()));
        let outcome = client.fetch(&ResourceId::from(1)).await;

        mock.assert_async().await;
        match outcome {
            FetchOutcome::Success(post) => {
                assert_eq!(post.id, Some(1));
                assert!(post.is_complete());
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_http_status_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/posts/2")
            .with_status(404)
            .create_async()
            .await;

        let client = client_for(&format!("{}/posts/", server.url()));
        let outcome = client.fetch(&ResourceId::from(2)).await;

        assert_eq!(
            outcome,
            FetchOutcome::Failure(FailureReason::HttpStatus(404))
        );
    }

    #[tokio::test]
    async fn test_fetch_unexpected_content_type() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/posts/5")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html></html>")
            .create_async()
            .await;

        let client = client_for(&format!("{}/posts/", server.url()));
        let outcome = client.fetch(&ResourceId::from(5)).await;

        assert_eq!(
            outcome,
            FetchOutcome::Failure(FailureReason::UnexpectedContentType("text/html".to_string()))
        );
    }

    #[tokio::test]
    async fn test_fetch_malformed_json_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/posts/6")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{not json")
            .create_async()
            .await;

        let client = client_for(&format!("{}/posts/", server.url()));
        let outcome = client.fetch(&ResourceId::from(6)).await;

        assert!(matches!(
            outcome,
            FetchOutcome::Failure(FailureReason::Network(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Nothing listens on this port; the connect fails immediately
        let client = client_for("http://127.0.0.1:1/posts/");
        let outcome = client.fetch(&ResourceId::from(1)).await;

        assert!(matches!(
            outcome,
            FetchOutcome::Failure(FailureReason::Network(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_all_preserves_length_and_order() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/posts/1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 1, "ownerId": 1, "title": "a", "body": "a"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/posts/2")
            .with_status(500)
            .create_async()
            .await;
        server
            .mock("GET", "/posts/3")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 3, "ownerId": 1, "title": "c", "body": "c"}"#)
            .create_async()
            .await;

        let client = client_for(&format!("{}/posts/", server.url()));
        let identifiers: Vec<ResourceId> = (1..=3).map(ResourceId::from).collect();
        let outcomes = client.fetch_all(&identifiers).await;

        assert_eq!(outcomes.len(), identifiers.len());
        assert!(outcomes[0].is_success());
        assert_eq!(
            outcomes[1],
            FetchOutcome::Failure(FailureReason::HttpStatus(500))
        );
        match &outcomes[2] {
            FetchOutcome::Success(post) => assert_eq!(post.id, Some(3)),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_order_independent_of_completion() {
        let mut server = mockito::Server::new_async().await;
        // First identifier responds slowly; second finishes well before it
        server
            .mock("GET", "/posts/1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(|w| {
                std::thread::sleep(std::time::Duration::from_millis(300));
                w.write_all(br#"{"id": 1, "ownerId": 1, "title": "slow", "body": "s"}"#)
            })
            .create_async()
            .await;
        server
            .mock("GET", "/posts/2")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 2, "ownerId": 1, "title": "fast", "body": "f"}"#)
            .create_async()
            .await;

        let client = client_for(&format!("{}/posts/", server.url()));
        let identifiers = vec![ResourceId::from(1), ResourceId::from(2)];
        let outcomes = client.fetch_all(&identifiers).await;

        let ids: Vec<_> = outcomes
            .iter()
            .map(|o| match o {
                FetchOutcome::Success(post) => post.id.unwrap(),
                other => panic!("expected success, got {other:?}"),
            })
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_fetch_timeout_while_reading_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/posts/9")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(|w| {
                std::thread::sleep(std::time::Duration::from_millis(1500));
                w.write_all(br#"{"id": 9, "ownerId": 1, "title": "t", "body": "b"}"#)
            })
            .create_async()
            .await;

        let client = ResourceClient::new(&SourceConfig {
            base_url: format!("{}/posts/", server.url()),
            timeout_seconds: 1,
            max_in_flight: 1,
        })
        .unwrap();

        let outcome = client.fetch(&ResourceId::from(9)).await;
        assert_eq!(outcome, FetchOutcome::Failure(FailureReason::Timeout));
    }
}
