//! Shared helpers for the HTTP integration tests.
//!
//! Requests are sent straight into the router with `tower::ServiceExt::oneshot`,
//! so no socket is bound.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tower::ServiceExt;

use user_registry::api::{AppState, create_router};
use user_registry::infrastructure::{AppConfig, InMemoryUserRepository};

// =============================================================================
// App Construction
// =============================================================================

/// A router over the two seeded users and default configuration.
pub fn seeded_app() -> Router {
    create_router(AppState::new(
        InMemoryUserRepository::seeded(),
        AppConfig::default(),
    ))
}

/// A router over an empty store.
pub fn empty_app() -> Router {
    create_router(AppState::new(
        InMemoryUserRepository::new(),
        AppConfig::default(),
    ))
}

// =============================================================================
// TestClient
// =============================================================================

pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(Method::GET, path, Body::empty(), None).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        self.send(Method::DELETE, path, Body::empty(), None).await
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> TestResponse {
        self.send_json(Method::POST, path, body).await
    }

    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> TestResponse {
        self.send_json(Method::PUT, path, body).await
    }

    pub async fn post_raw(&self, path: &str, body: &str, content_type: &str) -> TestResponse {
        self.send(
            Method::POST,
            path,
            Body::from(body.to_string()),
            Some(content_type),
        )
        .await
    }

    pub async fn get_with_request_id(&self, path: &str, request_id: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .header("x-request-id", request_id)
            .body(Body::empty())
            .expect("Failed to build request");
        self.dispatch(request).await
    }

    async fn send_json<T: Serialize>(&self, method: Method, path: &str, body: &T) -> TestResponse {
        let bytes = serde_json::to_vec(body).expect("Failed to serialize request body");
        self.send(method, path, Body::from(bytes), Some("application/json"))
            .await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Body,
        content_type: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(body).expect("Failed to build request");
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);

        TestResponse {
            status,
            body,
            headers,
            raw_body_len: bytes.len(),
        }
    }
}

// =============================================================================
// TestResponse
// =============================================================================

pub struct TestResponse {
    pub status: StatusCode,
    pub body: JsonValue,
    pub headers: HeaderMap,
    pub raw_body_len: usize,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

// =============================================================================
// Assertions
// =============================================================================

pub fn assert_json_string_eq(json: &JsonValue, key: &str, expected: &str) {
    let actual = json
        .get(key)
        .and_then(JsonValue::as_str)
        .unwrap_or_else(|| panic!("Expected key '{key}' to be a string in {json}"));

    assert_eq!(actual, expected, "Unexpected value for '{key}'");
}

pub fn assert_json_u64_eq(json: &JsonValue, key: &str, expected: u64) {
    let actual = json
        .get(key)
        .and_then(JsonValue::as_u64)
        .unwrap_or_else(|| panic!("Expected key '{key}' to be a u64 in {json}"));

    assert_eq!(actual, expected, "Unexpected value for '{key}'");
}

pub fn assert_error_code(response: &TestResponse, expected: &str) {
    let code = response.body["error"]["code"]
        .as_str()
        .unwrap_or_else(|| panic!("Expected an error envelope, got {}", response.body));

    assert_eq!(code, expected);
}
