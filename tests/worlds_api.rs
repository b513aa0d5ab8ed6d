//! Integration tests for user and world endpoints.

mod support;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use support::TestApp;

#[tokio::test]
async fn test_healthcheck() {
    let app = TestApp::new();

    let response = app.request("GET", "/healthcheck", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_create_user_then_duplicate_conflicts() {
    let app = TestApp::new();
    let id = Uuid::new_v4();

    let response = app
        .request("POST", &format!("/users/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["id"], id.to_string());

    let response = app
        .request("POST", &format!("/users/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_world_requires_auth() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/worlds",
            Some(json!({ "name": "azeroth", "description": "a place" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_world_validates_body() {
    let app = TestApp::new();
    let owner = Uuid::new_v4();

    let response = app
        .request(
            "POST",
            "/worlds",
            Some(json!({ "name": "ab", "description": "too-short name" })),
            Some(&owner.to_string()),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_world_crud_roundtrip() {
    let app = TestApp::new();
    let owner = Uuid::new_v4();
    let token = owner.to_string();

    let world_id = app.create_world(owner, "azeroth").await;

    // Listed publicly, and by owner.
    let response = app.request("GET", "/worlds", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);

    let response = app
        .request("GET", &format!("/worlds?owner_id={owner}"), None, None)
        .await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);

    // Fetch by id.
    let response = app
        .request("GET", &format!("/worlds/{world_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["version"], 1);

    // Update bumps the version.
    let response = app
        .request(
            "PUT",
            &format!("/worlds/{world_id}"),
            Some(json!({ "name": "azeroth 2", "description": "updated" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["version"], 2);
}

#[tokio::test]
async fn test_update_world_rejects_non_owner() {
    let app = TestApp::new();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let world_id = app.create_world(owner, "azeroth").await;

    let response = app
        .request(
            "PUT",
            &format!("/worlds/{world_id}"),
            Some(json!({ "name": "mine now", "description": "stolen" })),
            Some(&stranger.to_string()),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_get_unknown_world_is_not_found() {
    let app = TestApp::new();
    let token = Uuid::new_v4().to_string();

    let response = app
        .request(
            "GET",
            &format!("/worlds/{}", Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_join_world_and_current_world() {
    let app = TestApp::new();
    let owner = Uuid::new_v4();
    let token = owner.to_string();

    let world_id = app.create_world(owner, "azeroth").await;

    // Nothing joined yet.
    let response = app
        .request("GET", "/worlds/my-current", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["world_id"].is_null());

    let response = app
        .request(
            "POST",
            &format!("/worlds/{world_id}/join"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/worlds/my-current", None, Some(&token))
        .await;
    assert_eq!(response.body["data"]["world_id"], world_id.to_string());

    // Joining the same world again conflicts.
    let response = app
        .request(
            "POST",
            &format!("/worlds/{world_id}/join"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}
