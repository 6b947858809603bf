//! Metrics collection and exposition.
//!
//! # Metrics
//! - `greeter_requests_total` (counter): requests by method, status, handler
//! - `greeter_request_duration_seconds` (histogram): latency by handler
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op
//! - Prometheus exporter is opt-in via config

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one served request.
pub fn record_request(method: &str, status: u16, handler: &'static str, start: Instant) {
    metrics::counter!(
        "greeter_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "handler" => handler
    )
    .increment(1);
    metrics::histogram!("greeter_request_duration_seconds", "handler" => handler)
        .record(start.elapsed().as_secs_f64());
}
