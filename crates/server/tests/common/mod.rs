//! Common test utilities for API testing with mocks.
//!
//! This module provides a test fixture that creates an in-process router
//! with a mock search backend injected, so the HTTP API can be exercised
//! without yt-dlp or network access.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use extrascout_core::{testing::MockSearcher, Config, Searcher, ServerConfig};
use extrascout_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use extrascout_core::testing::fixtures;

/// Test fixture for API testing with a mock searcher.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_extras_search() {
///     let fixture = TestFixture::new();
///     fixture.searcher.set_results(vec![...]).await;
///
///     let response = fixture.post("/api/v1/search/extras", json!({
///         "context": { "title": "Foundation" }
///     })).await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock searcher - configure search results
    pub searcher: Arc<MockSearcher>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
            port: 0, // Not used for in-process testing
        },
        ..Default::default()
    }
}

impl TestFixture {
    /// Create a fixture with the mock searcher wired in.
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a fixture with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        let searcher = Arc::new(MockSearcher::new());
        let state = Arc::new(AppState::new(
            config,
            Some(Arc::clone(&searcher) as Arc<dyn Searcher>),
        ));

        Self {
            router: create_router(state),
            searcher,
        }
    }

    /// Create a fixture with no search backend configured.
    pub fn without_searcher() -> Self {
        let state = Arc::new(AppState::new(test_config(), None));
        Self {
            router: create_router(state),
            searcher: Arc::new(MockSearcher::new()),
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        self.send(request_builder.body(body).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
