//! Application Services
//!
//! Services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **NotificationService**: connection registration and best-effort push

pub mod notification_service;

pub use notification_service::{
    ConnectionLifecycle, DeliveryOutcome, EmitError, NotificationService, NotificationSink,
    NOTIFICATION_EVENT,
};
