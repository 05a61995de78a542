//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **UserId**: positive integer identity of a user
//! - **ConnectionHandle**: opaque identifier of a live push connection

mod connection_handle;
mod user_id;

pub use connection_handle::*;
pub use user_id::*;
