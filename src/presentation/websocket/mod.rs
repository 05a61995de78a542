//! WebSocket Transport
//!
//! Push channel for notifications.

pub mod handler;
pub mod hub;
pub mod messages;

pub use handler::ws_handler;
pub use hub::ConnectionHub;
pub use messages::{ServerFrame, CONNECTED_EVENT};
