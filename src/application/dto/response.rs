//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::DeliveryOutcome;

/// Result of a notification dispatch
#[derive(Debug, Serialize)]
pub struct NotificationDispatchResponse {
    pub delivered: bool,
    pub outcome: DeliveryOutcome,
}

impl From<DeliveryOutcome> for NotificationDispatchResponse {
    fn from(outcome: DeliveryOutcome) -> Self {
        Self {
            delivered: outcome.is_delivered(),
            outcome,
        }
    }
}

/// Presence of a user on the push transport
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStatusResponse {
    pub user_id: i64,
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
}
