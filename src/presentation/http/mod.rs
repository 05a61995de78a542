//! HTTP Surface
//!
//! Routes and handlers for the internal API and operational endpoints.

pub mod handlers;
pub mod routes;
