//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use validator::Validate;

use crate::domain::NotificationKind;

/// Push a notification to one user
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationRequest {
    #[validate(range(min = 1, message = "userId must be a positive integer"))]
    pub user_id: i64,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: String,

    #[serde(rename = "type", default)]
    pub kind: Option<NotificationKind>,

    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Register an externally-known connection handle for a user
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterConnectionRequest {
    #[validate(length(min = 1, max = 256, message = "Handle must be 1-256 characters"))]
    pub handle: String,
}
