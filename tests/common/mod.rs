#![allow(dead_code)]

pub mod memory;

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use record_service::domain::post::Post;
use record_service::domain::record::Record;
use record_service::domain::task::Task;
use record_service::infra::store::RecordStore;
use record_service::AppState;

use memory::MemoryStore;

// ---------------------------------------------------------------------------
// TestApp — a fresh router over in-memory collections per test
// ---------------------------------------------------------------------------

pub struct TestApp {
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    body_bytes: bytes::Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body_bytes).unwrap_or(Value::Null)
    }

    pub fn error_message(&self) -> String {
        self.json()["error"].as_str().unwrap_or("").to_string()
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
    }
}

/// A store whose backend is always unreachable.
pub struct FailingStore;

#[async_trait]
impl<R: Record> RecordStore<R> for FailingStore {
    async fn insert(&self, _record: &R) -> Result<()> {
        Err(anyhow!("store unavailable"))
    }

    async fn list_newest_first(&self) -> Result<Vec<R>> {
        Err(anyhow!("store unavailable"))
    }
}

pub fn app() -> TestApp {
    TestApp::with_state(AppState::new(
        Arc::new(MemoryStore::<Post>::new()),
        Arc::new(MemoryStore::<Task>::new()),
    ))
}

pub fn failing_app() -> TestApp {
    TestApp::with_state(AppState::new(Arc::new(FailingStore), Arc::new(FailingStore)))
}

impl TestApp {
    pub fn with_state(state: AppState) -> Self {
        Self {
            router: record_service::http::router(state),
        }
    }

    // ------------------------------------------------------------------
    // Low-level request helper
    // ------------------------------------------------------------------
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Body>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header("host", "localhost");

        for &(key, value) in headers {
            builder = builder.header(key, value);
        }

        let request = builder.body(body.unwrap_or_else(Body::empty)).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to collect body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body_bytes,
        }
    }

    // ------------------------------------------------------------------
    // Convenience HTTP helpers
    // ------------------------------------------------------------------
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path, None, &[]).await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        self.post_raw(path, serde_json::to_string(&body).unwrap())
            .await
    }

    pub async fn post_raw(&self, path: &str, body: impl Into<String>) -> TestResponse {
        self.request(
            Method::POST,
            path,
            Some(Body::from(body.into())),
            &[("content-type", "application/json")],
        )
        .await
    }
}
