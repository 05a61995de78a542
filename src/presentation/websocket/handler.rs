//! WebSocket Connection Handler
//!
//! Upgrades `GET /ws?userId=<id>`, registers the socket for push delivery
//! and keeps it alive until the client goes away.

use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{
        ws::{Message, WebSocket},
        Query, State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio::time::interval;

use super::messages::ServerFrame;
use crate::application::services::ConnectionLifecycle;
use crate::domain::{ConnectionHandle, HandshakeContext};
use crate::startup::AppState;

/// WebSocket upgrade handler
///
/// Query pairs are kept as a list so a repeated `userId` can be told apart
/// from a single one.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(params): Query<Vec<(String, String)>>,
    State(state): State<AppState>,
) -> Response {
    let limits = &state.settings.websocket;

    ws.max_message_size(limits.max_message_size)
        .max_frame_size(limits.max_frame_size)
        .on_upgrade(move |socket| handle_socket(socket, params, state))
}

/// Handle individual WebSocket connection
async fn handle_socket(socket: WebSocket, params: Vec<(String, String)>, state: AppState) {
    let handle = ConnectionHandle::generate();
    let context = HandshakeContext::from_pairs(handle.clone(), params)
        .with_identity_param(state.settings.websocket.identity_param.clone());

    tracing::debug!(handle = %handle, "New WebSocket connection");

    // Split socket for concurrent read/write
    let (mut sender, mut receiver) = socket.split();

    // Create channel for outgoing messages
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerFrame>();

    // The socket must be reachable before the registry points at it
    state.hub.attach(handle.clone(), tx.clone());
    let user_id = state.notifications.on_connect(&context);

    if user_id.is_none() {
        tracing::info!(handle = %handle, "Connection kept without identity, push disabled");
    }

    let _ = tx.send(ServerFrame::connected(&handle, user_id));
    drop(tx);

    // Spawn task to forward frames from channel to WebSocket and ping the client
    let heartbeat = Duration::from_millis(state.settings.websocket.heartbeat_interval_ms);
    let sender_handle = handle.clone();
    let sender_task = tokio::spawn(async move {
        let mut ping = interval(heartbeat);
        ping.tick().await; // Skip first immediate tick

        loop {
            tokio::select! {
                frame = rx.recv() => {
                    let Some(frame) = frame else { break };
                    let text = match serde_json::to_string(&frame) {
                        Ok(t) => t,
                        Err(e) => {
                            tracing::error!(handle = %sender_handle, "Failed to serialize frame: {}", e);
                            continue;
                        }
                    };
                    if sender.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                _ = ping.tick() => {
                    if sender.send(Message::Ping(Bytes::new())).await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    // Inbound traffic is not part of the protocol; drain until close
    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                tracing::trace!(handle = %handle, len = text.len(), "Ignoring inbound text frame");
            }
            Ok(Message::Close(_)) => {
                tracing::debug!(handle = %handle, "Connection closed");
                break;
            }
            Err(e) => {
                tracing::debug!(handle = %handle, error = %e, "WebSocket error");
                break;
            }
            _ => {}
        }
    }

    // Cleanup
    state.notifications.on_disconnect(&context);
    state.hub.detach(&handle);
    sender_task.abort();

    tracing::debug!(handle = %handle, "WebSocket connection finished");
}
