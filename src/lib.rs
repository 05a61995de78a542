//! # Social Gateway Library
//!
//! Real-time notification delivery for a social network backend:
//! - Connection registry mapping user ids to live push connections
//! - Best-effort (at-most-once) notification delivery
//! - WebSocket transport for clients
//! - Internal HTTP API for the CRUD services that raise notifications
//!
//! ## Module Structure
//!
//! ```text
//! social_gateway/
//! +-- config/         Configuration management
//! +-- domain/         Identities, payloads, registry, handshake parsing
//! +-- application/    Notification service and DTOs
//! +-- infrastructure/ Prometheus metrics
//! +-- presentation/   HTTP routes, middleware and WebSocket transport
//! +-- shared/         Errors and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Core types and registry
pub mod domain;

// Application layer - Notification service
pub mod application;

// Infrastructure layer - Metrics
pub mod infrastructure;

// Presentation layer - HTTP and WebSocket handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
