//! Notification Service
//!
//! Best-effort push delivery on top of the connection registry. Callers
//! persist the durable record first; this service only tries to get a copy
//! to a connected client and never fails the caller's operation.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{
    resolve_user_id, ConnectionHandle, ConnectionRegistry, HandshakeContext, UserId,
};
use crate::infrastructure::metrics;

/// Event name used for every pushed notification.
pub const NOTIFICATION_EVENT: &str = "notification";

/// Why a sink could not emit on a handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    #[error("no live connection for handle {0}")]
    UnknownHandle(ConnectionHandle),

    #[error("connection {0} is closed")]
    Closed(ConnectionHandle),
}

/// Emission boundary: whatever transport owns the live connections.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    /// Emit a named event with a JSON payload to exactly one connection.
    fn emit(
        &self,
        handle: &ConnectionHandle,
        event: &str,
        payload: &serde_json::Value,
    ) -> Result<(), EmitError>;
}

/// Transport capability: connect/disconnect callbacks that resolve the
/// connecting identity. `None` means the event was ignored.
pub trait ConnectionLifecycle: Send + Sync {
    fn on_connect(&self, context: &HandshakeContext) -> Option<UserId>;

    fn on_disconnect(&self, context: &HandshakeContext) -> Option<UserId>;
}

/// Result of one delivery attempt. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryOutcome {
    Delivered,
    NotConnected,
    Failed,
}

impl DeliveryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOutcome::Delivered => "delivered",
            DeliveryOutcome::NotConnected => "not_connected",
            DeliveryOutcome::Failed => "failed",
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }
}

/// Connection registry plus the sink that reaches registered handles.
pub struct NotificationService {
    registry: Arc<ConnectionRegistry>,
    sink: Arc<dyn NotificationSink>,
}

impl NotificationService {
    pub fn new(registry: Arc<ConnectionRegistry>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { registry, sink }
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    /// Insert or overwrite the handle for `user_id`. Always succeeds.
    pub fn register_connection(&self, user_id: UserId, handle: ConnectionHandle) {
        self.registry.register_connection(user_id, handle);
        metrics::set_push_connections(self.registry.connection_count());
    }

    /// Forget the handle for `user_id`. Absent users are a no-op.
    pub fn unregister_connection(&self, user_id: UserId) {
        self.registry.unregister_connection(user_id);
        metrics::set_push_connections(self.registry.connection_count());
    }

    /// Push `payload` to the user's current connection, or drop it.
    ///
    /// At most once: nothing is queued or retried, and no error reaches the
    /// caller.
    pub fn send_notification_to_user<P>(&self, user_id: UserId, payload: &P) -> DeliveryOutcome
    where
        P: Serialize + ?Sized,
    {
        let outcome = self.deliver(user_id, payload);
        metrics::record_notification(outcome.as_str());
        outcome
    }

    fn deliver<P>(&self, user_id: UserId, payload: &P) -> DeliveryOutcome
    where
        P: Serialize + ?Sized,
    {
        let Some(handle) = self.registry.connection_for(user_id) else {
            tracing::debug!(user_id = %user_id, "Recipient not connected, notification dropped");
            return DeliveryOutcome::NotConnected;
        };

        let payload = match serde_json::to_value(payload) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(user_id = %user_id, error = %e, "Failed to serialize notification");
                return DeliveryOutcome::Failed;
            }
        };

        match self.sink.emit(&handle, NOTIFICATION_EVENT, &payload) {
            Ok(()) => {
                tracing::debug!(user_id = %user_id, handle = %handle, "Notification delivered");
                DeliveryOutcome::Delivered
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %user_id,
                    handle = %handle,
                    error = %e,
                    "Notification dropped"
                );
                DeliveryOutcome::Failed
            }
        }
    }
}

impl ConnectionLifecycle for NotificationService {
    fn on_connect(&self, context: &HandshakeContext) -> Option<UserId> {
        let user_id = resolve_user_id(context)?;
        self.register_connection(user_id, context.handle().clone());
        tracing::info!(user_id = %user_id, handle = %context.handle(), "User connected");
        Some(user_id)
    }

    fn on_disconnect(&self, context: &HandshakeContext) -> Option<UserId> {
        let user_id = resolve_user_id(context)?;
        self.registry
            .unregister_connection_if(user_id, context.handle());
        metrics::set_push_connections(self.registry.connection_count());
        tracing::info!(user_id = %user_id, handle = %context.handle(), "User disconnected");
        Some(user_id)
    }
}
