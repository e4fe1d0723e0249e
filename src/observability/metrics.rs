//! Metrics collection and exposition.
//!
//! # Metrics
//! - `projectinfo_requests_total` (counter): requests by status code
//! - `projectinfo_request_duration_seconds` (histogram): latency
//!   distribution by status code
//!
//! # Design Decisions
//! - The `metrics` macros are no-ops until an exporter is installed, so
//!   recording is unconditional at call sites

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one finished request.
pub fn record_request(status: u16, start: Instant) {
    let status = status.to_string();

    metrics::counter!("projectinfo_requests_total", "status" => status.clone()).increment(1);
    metrics::histogram!("projectinfo_request_duration_seconds", "status" => status)
        .record(start.elapsed().as_secs_f64());
}
