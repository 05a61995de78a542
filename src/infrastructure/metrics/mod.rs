//! Prometheus Metrics Module
//!
//! Provides application-wide metrics collection using Prometheus.
//!
//! # Metrics Collected
//! - HTTP request counts by method, path, and status
//! - Users currently reachable over the push transport
//! - Notification delivery attempts by outcome

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// HTTP request counter - tracks total requests by method, path, and status code
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("http_requests_total", "Total number of HTTP requests")
            .namespace("social_gateway"),
        &["method", "path", "status"],
    )
    .expect("Failed to create HTTP_REQUESTS_TOTAL metric")
});

/// Users with a registered push connection
pub static PUSH_CONNECTIONS_ACTIVE: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::with_opts(
        Opts::new(
            "push_connections_active",
            "Number of users with a registered push connection",
        )
        .namespace("social_gateway"),
    )
    .expect("Failed to create PUSH_CONNECTIONS_ACTIVE metric")
});

/// Notification attempts by outcome ("delivered", "not_connected", "failed")
pub static NOTIFICATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("notifications_total", "Notification delivery attempts")
            .namespace("social_gateway"),
        &["outcome"],
    )
    .expect("Failed to create NOTIFICATIONS_TOTAL metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .expect("Failed to register HTTP_REQUESTS_TOTAL");
    registry
        .register(Box::new(PUSH_CONNECTIONS_ACTIVE.clone()))
        .expect("Failed to register PUSH_CONNECTIONS_ACTIVE");
    registry
        .register(Box::new(NOTIFICATIONS_TOTAL.clone()))
        .expect("Failed to register NOTIFICATIONS_TOTAL");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Helper to record HTTP request metrics
pub fn record_http_request(method: &str, path: &str, status: u16) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();
}

/// Helper to record one notification attempt
pub fn record_notification(outcome: &str) {
    NOTIFICATIONS_TOTAL.with_label_values(&[outcome]).inc();
}

/// Helper to update the push connection gauge
pub fn set_push_connections(count: usize) {
    PUSH_CONNECTIONS_ACTIVE.set(count as i64);
}
