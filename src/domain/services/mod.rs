//! # Domain Services
//!
//! - **ConnectionRegistry**: user id to live connection handle
//! - **handshake**: transport context and identity resolution

mod connection_registry;
mod handshake;

pub use connection_registry::*;
pub use handshake::*;
