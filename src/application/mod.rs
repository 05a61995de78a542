//! Application Layer
//!
//! Services and data transfer objects (DTOs) sitting between the
//! presentation and domain layers.

pub mod dto;
pub mod services;
