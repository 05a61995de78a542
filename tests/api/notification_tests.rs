//! Notification Dispatch API Tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_offline_recipient_is_accepted_and_dropped() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/notifications",
            &json!({"userId": 9, "message": "hello", "type": "follow"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(
        body_json(response).await,
        json!({"delivered": false, "outcome": "not_connected"})
    );
}

#[tokio::test]
async fn test_handle_without_live_socket_fails_quietly() {
    let app = TestApp::new();
    app.put_json("/api/v1/connections/2", &json!({"handle": "elsewhere"}))
        .await;

    let response = app
        .post_json("/api/v1/notifications", &json!({"userId": 2, "message": "hi"}))
        .await;

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(body_json(response).await["outcome"], "failed");
}

#[tokio::test]
async fn test_invalid_request_lists_field_errors() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/notifications", &json!({"userId": 0, "message": ""}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 10007);
    assert_eq!(json["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_type_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/notifications",
            &json!({"userId": 1, "message": "x", "type": "poke"}),
        )
        .await;

    assert!(response.status().is_client_error());
}
