//! WebSocket Connection Hub
//!
//! Owns the outbound queue of every live socket, keyed by connection handle.

use dashmap::DashMap;
use tokio::sync::mpsc;

use super::messages::ServerFrame;
use crate::application::services::{EmitError, NotificationSink};
use crate::domain::ConnectionHandle;

/// Live sockets by handle
#[derive(Debug, Default)]
pub struct ConnectionHub {
    sockets: DashMap<ConnectionHandle, mpsc::UnboundedSender<ServerFrame>>,
}

impl ConnectionHub {
    pub fn new() -> Self {
        Self {
            sockets: DashMap::new(),
        }
    }

    /// Make a socket addressable by its handle
    pub fn attach(&self, handle: ConnectionHandle, sender: mpsc::UnboundedSender<ServerFrame>) {
        self.sockets.insert(handle, sender);
    }

    /// Forget a socket
    pub fn detach(&self, handle: &ConnectionHandle) {
        self.sockets.remove(handle);
    }

    /// Number of open sockets, identified or not
    pub fn socket_count(&self) -> usize {
        self.sockets.len()
    }
}

impl NotificationSink for ConnectionHub {
    fn emit(
        &self,
        handle: &ConnectionHandle,
        event: &str,
        payload: &serde_json::Value,
    ) -> Result<(), EmitError> {
        let sender = self
            .sockets
            .get(handle)
            .ok_or_else(|| EmitError::UnknownHandle(handle.clone()))?;

        sender
            .send(ServerFrame::new(event, payload.clone()))
            .map_err(|_| EmitError::Closed(handle.clone()))
    }
}
