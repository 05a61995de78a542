//! # Domain Entities
//!
//! - **NotificationPayload**: envelope pushed to a connected user
//! - **NotificationKind**: social event that produced a notification

mod notification;

pub use notification::*;
