//! Common test utilities for integration tests
//!
//! This module provides shared setup and teardown for integration tests.
//! Each TestApp gets its own temp-dir-backed JSON store, so tests run
//! without external services and without interfering with each other.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use metabolic_trend_backend::{
    config::AppConfig, routes, state::AppState, storage::JsonFileStore,
};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    // Keeps the store's backing directory alive for the test's duration
    _data_dir: TempDir,
}

impl TestApp {
    /// Create a new test application backed by a fresh temp directory
    pub fn new() -> Self {
        let data_dir = TempDir::new().expect("Failed to create temp dir");
        let store = Arc::new(JsonFileStore::new(
            data_dir.path().join("metabolism_data.json"),
        ));

        let state = AppState::new(store, AppConfig::default());
        let app = routes::create_router(state);

        Self {
            app,
            _data_dir: data_dir,
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}
