//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{RegisterConnectionRequest, SendNotificationRequest};
pub use response::{ConnectionStatusResponse, NotificationDispatchResponse};
