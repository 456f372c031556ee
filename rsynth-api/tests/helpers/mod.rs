//! Shared helpers for rsynth-api integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use rsynth_api::{build_router, AppState};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;

pub const INDEX_HTML: &str = "<!doctype html><title>RetroSynth</title>";

/// Router over a fresh in-memory database with the factory seed applied
///
/// The returned `TempDir` holds `index.html` and must outlive the router.
pub async fn setup_app() -> (Router, SqlitePool, TempDir) {
    let pool = rsynth_common::db::connect_memory()
        .await
        .expect("Should open in-memory database");
    rsynth_common::db::seed_defaults(&pool)
        .await
        .expect("Should seed defaults");

    let static_dir = tempfile::tempdir().expect("Should create static dir");
    std::fs::write(static_dir.path().join("index.html"), INDEX_HTML)
        .expect("Should write index.html");

    let app = build_router(AppState::new(pool.clone(), static_dir.path()));
    (app, pool, static_dir)
}

/// Request without a body
pub fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Request with a JSON body
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Extract JSON body from response
pub async fn extract_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Extract raw text body from response
pub async fn extract_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8_lossy(&bytes).into_owned()
}
