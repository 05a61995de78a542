//! Connection registry.
//!
//! Tracks which users are reachable over the push transport. One handle per
//! user, last registration wins.

use dashmap::DashMap;

use crate::domain::value_objects::{ConnectionHandle, UserId};

/// In-memory map from user identity to the live connection handle.
///
/// Shared between the transport's connect/disconnect callbacks and every
/// request handler that wants to notify someone, so it must be `Sync`.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: DashMap<UserId, ConnectionHandle>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// Insert or overwrite the handle for a user.
    ///
    /// Returns the handle that was replaced, if any.
    pub fn register_connection(
        &self,
        user_id: UserId,
        handle: ConnectionHandle,
    ) -> Option<ConnectionHandle> {
        let previous = self.connections.insert(user_id, handle.clone());

        match &previous {
            Some(old) => tracing::debug!(
                user_id = %user_id,
                handle = %handle,
                replaced = %old,
                "Connection re-registered"
            ),
            None => tracing::debug!(
                user_id = %user_id,
                handle = %handle,
                "Connection registered"
            ),
        }

        previous
    }

    /// Remove the mapping for a user. Absent users are a no-op.
    pub fn unregister_connection(&self, user_id: UserId) -> Option<ConnectionHandle> {
        let removed = self.connections.remove(&user_id).map(|(_, handle)| handle);

        if let Some(handle) = &removed {
            tracing::debug!(user_id = %user_id, handle = %handle, "Connection unregistered");
        }

        removed
    }

    /// Remove the mapping only if it still points at `handle`.
    ///
    /// A socket that closes after the same user reconnected elsewhere must
    /// not evict the newer registration.
    pub fn unregister_connection_if(&self, user_id: UserId, handle: &ConnectionHandle) -> bool {
        let removed = self
            .connections
            .remove_if(&user_id, |_, current| current == handle)
            .is_some();

        if removed {
            tracing::debug!(user_id = %user_id, handle = %handle, "Connection unregistered");
        } else {
            tracing::debug!(
                user_id = %user_id,
                handle = %handle,
                "Stale disconnect ignored"
            );
        }

        removed
    }

    /// Current handle for a user.
    pub fn connection_for(&self, user_id: UserId) -> Option<ConnectionHandle> {
        self.connections.get(&user_id).map(|entry| entry.value().clone())
    }

    pub fn is_connected(&self, user_id: UserId) -> bool {
        self.connections.contains_key(&user_id)
    }

    /// Number of users currently reachable.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}
