//! WebSocket Message Types
//!
//! Every outbound frame is a JSON text message naming an event.

use serde::Serialize;
use serde_json::json;

use crate::domain::{ConnectionHandle, UserId};

/// Sent once, right after the connect callback ran.
pub const CONNECTED_EVENT: &str = "connected";

/// Outgoing frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerFrame {
    pub event: String,
    pub data: serde_json::Value,
}

impl ServerFrame {
    pub fn new(event: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event: event.into(),
            data,
        }
    }

    /// Handshake acknowledgement. `userId` is null when the identity did not
    /// resolve and the socket will not receive notifications.
    pub fn connected(handle: &ConnectionHandle, user_id: Option<UserId>) -> Self {
        Self::new(
            CONNECTED_EVENT,
            json!({
                "handle": handle,
                "userId": user_id,
            }),
        )
    }
}
