//! Integration tests for the group endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_group_crud_flow() {
    let server = common::spawn_app();

    let response = server
        .post("/groups")
        .json(&json!({ "name": "Platform", "description": "Core team" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let created: Value = response.json();
    assert_eq!(created["name"], "Platform");
    let id = created["id"].as_str().unwrap();

    let response = server.get(&format!("/groups/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["description"], "Core team");

    let response = server.get("/groups").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>().as_array().unwrap().len(), 1);

    let response = server.delete(&format!("/groups/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = server.get(&format!("/groups/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_group_rejects_blank_name() {
    let server = common::spawn_app();

    let response = server.post("/groups").json(&json!({ "name": "   " })).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "Group name cannot be empty");
}
