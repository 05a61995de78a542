//! Connection Registry API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_unknown_user_is_not_connected() {
    let app = TestApp::new();

    let response = app.get("/api/v1/connections/9").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"userId": 9, "connected": false})
    );
}

#[tokio::test]
async fn test_register_overwrites_previous_handle() {
    let app = TestApp::new();

    let first = app
        .put_json("/api/v1/connections/4", &json!({"handle": "h1"}))
        .await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    app.put_json("/api/v1/connections/4", &json!({"handle": "h2"}))
        .await;

    let json = body_json(app.get("/api/v1/connections/4").await).await;
    assert_eq!(json, json!({"userId": 4, "connected": true, "handle": "h2"}));
}

#[tokio::test]
async fn test_unregister_twice_is_fine() {
    let app = TestApp::new();
    app.put_json("/api/v1/connections/4", &json!({"handle": "h1"}))
        .await;

    assert_eq!(
        app.delete("/api/v1/connections/4").await.status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        app.delete("/api/v1/connections/4").await.status(),
        StatusCode::NO_CONTENT
    );

    let json = body_json(app.get("/api/v1/connections/4").await).await;
    assert_eq!(json["connected"], false);
}

#[tokio::test]
async fn test_non_positive_user_id_rejected() {
    let app = TestApp::new();

    assert_eq!(
        app.get("/api/v1/connections/0").await.status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        app.get("/api/v1/connections/abc").await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_blank_handle_rejected() {
    let app = TestApp::new();

    let response = app
        .put_json("/api/v1/connections/4", &json!({"handle": "   "}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!app
        .state
        .notifications
        .registry()
        .is_connected(social_gateway::domain::UserId::new(4).unwrap()));
}
