//! Infrastructure Layer
//!
//! Process-level integrations. The gateway keeps no external storage, so
//! this is only the Prometheus metrics registry.

pub mod metrics;
