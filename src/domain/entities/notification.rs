//! Notification payloads pushed to connected users.
//!
//! Payloads are never persisted here. The CRUD layer writes the durable
//! notification/message record first and then hands a copy to the notifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::UserId;

/// Event types raised by the social CRUD services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Comment,
    Like,
    Message,
    Follow,
    Story,
    Tag,
    Report,
    System,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Comment => "comment",
            NotificationKind::Like => "like",
            NotificationKind::Message => "message",
            NotificationKind::Follow => "follow",
            NotificationKind::Story => "story",
            NotificationKind::Tag => "tag",
            NotificationKind::Report => "report",
            NotificationKind::System => "system",
        }
    }
}

/// Unstructured envelope delivered on the `notification` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// Human readable text shown by the client
    pub message: String,

    /// Optional event type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NotificationKind>,

    /// Extra event data (post id, actor, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    /// When the notification was produced
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl NotificationPayload {
    /// Create a plain text notification without a type.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: None,
            data: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_kind(mut self, kind: NotificationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Someone commented on one of the recipient's posts.
    pub fn new_comment(actor: UserId, post_id: i64) -> Self {
        Self::new(format!("User {} commented on your post", actor))
            .with_kind(NotificationKind::Comment)
            .with_data(serde_json::json!({ "actorId": actor, "postId": post_id }))
    }

    /// Someone liked one of the recipient's posts.
    pub fn new_like(actor: UserId, post_id: i64) -> Self {
        Self::new(format!("User {} liked your post", actor))
            .with_kind(NotificationKind::Like)
            .with_data(serde_json::json!({ "actorId": actor, "postId": post_id }))
    }

    /// The recipient received a direct message.
    pub fn new_message(sender: UserId, message_id: i64) -> Self {
        Self::new(format!("New message from user {}", sender))
            .with_kind(NotificationKind::Message)
            .with_data(serde_json::json!({ "senderId": sender, "messageId": message_id }))
    }

    /// Someone started following the recipient.
    pub fn new_follower(follower: UserId) -> Self {
        Self::new(format!("User {} started following you", follower))
            .with_kind(NotificationKind::Follow)
            .with_data(serde_json::json!({ "followerId": follower }))
    }
}
