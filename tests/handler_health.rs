//! Integration tests for the root and health endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_welcome_banner() {
    let server = common::spawn_app();

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["name"], "user-hub");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_reports_disabled_components() {
    let server = common::spawn_app();

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
    assert_eq!(body["cache"], "disabled");
    assert_eq!(body["graph"], "disabled");
}

#[tokio::test]
async fn test_health_with_graph_enabled() {
    let server = common::spawn_app_with_graph();

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["graph"], "ok");
}
