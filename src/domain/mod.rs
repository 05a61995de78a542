//! # Domain Layer
//!
//! Core types of the notification gateway. Independent of the transport
//! and of the HTTP surface.
//!
//! ## Structure
//!
//! - **entities**: notification payloads
//! - **value_objects**: user identities and connection handles
//! - **services**: the connection registry and the notifier built on it

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
pub use value_objects::*;
