//! WebSocket Push Tests
//!
//! End-to-end through a real listener.

use serde_json::json;
use social_gateway::application::services::DeliveryOutcome;
use social_gateway::domain::{NotificationPayload, UserId};

use crate::common::{connect, eventually, next_json, spawn_app};

#[tokio::test]
async fn test_connect_notify_disconnect() {
    let (addr, state) = spawn_app().await;
    let user = UserId::new(5).unwrap();

    let mut socket = connect(addr, "?userId=5").await;
    let connected = next_json(&mut socket).await;
    assert_eq!(connected["event"], "connected");
    assert_eq!(connected["data"]["userId"], 5);

    let outcome = state
        .notifications
        .send_notification_to_user(user, &json!({"message": "x"}));
    assert_eq!(outcome, DeliveryOutcome::Delivered);

    let frame = next_json(&mut socket).await;
    assert_eq!(frame, json!({"event": "notification", "data": {"message": "x"}}));

    socket.close(None).await.unwrap();
    let registry_cleared = eventually(|| !state.notifications.registry().is_connected(user)).await;
    assert!(registry_cleared);

    let outcome = state
        .notifications
        .send_notification_to_user(user, &json!({"message": "x"}));
    assert_eq!(outcome, DeliveryOutcome::NotConnected);
}

#[tokio::test]
async fn test_reconnect_moves_delivery_to_new_socket() {
    let (addr, state) = spawn_app().await;
    let user = UserId::new(7).unwrap();

    let mut first = connect(addr, "?userId=7").await;
    next_json(&mut first).await;
    let mut second = connect(addr, "?userId=7").await;
    let connected = next_json(&mut second).await;

    // The older socket closing must not unregister the newer one
    first.close(None).await.unwrap();
    drop(first);

    let payload = NotificationPayload::new_follower(UserId::new(1).unwrap());
    let registered = eventually(|| {
        state.notifications.registry().connection_for(user).map(|h| h.as_str().to_string())
            == connected["data"]["handle"].as_str().map(str::to_string)
    })
    .await;
    assert!(registered);

    assert!(state
        .notifications
        .send_notification_to_user(user, &payload)
        .is_delivered());
    let frame = next_json(&mut second).await;
    assert_eq!(frame["event"], "notification");
    assert_eq!(frame["data"]["type"], "follow");
}

#[tokio::test]
async fn test_multi_valued_identity_is_not_registered() {
    let (addr, state) = spawn_app().await;

    let mut socket = connect(addr, "?userId=42&userId=7").await;
    let connected = next_json(&mut socket).await;

    assert!(connected["data"]["userId"].is_null());
    assert_eq!(state.notifications.registry().connection_count(), 0);
    assert_eq!(state.hub.socket_count(), 1);
}

#[tokio::test]
async fn test_missing_identity_is_not_registered() {
    let (addr, state) = spawn_app().await;

    let mut socket = connect(addr, "").await;
    let connected = next_json(&mut socket).await;

    assert!(connected["data"]["userId"].is_null());
    assert_eq!(state.notifications.registry().connection_count(), 0);
}
