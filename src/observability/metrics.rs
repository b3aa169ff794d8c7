//! Request metrics.
//!
//! # Metrics
//! - `line_picker_requests_total` (counter): picks by outcome
//! - `line_picker_request_duration_seconds` (histogram): pick latency by outcome
//!
//! `outcome` is `ok` or the error kind (`line_not_found`, `connection_error`, ...).

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

pub const REQUESTS_TOTAL: &str = "line_picker_requests_total";
pub const REQUEST_DURATION: &str = "line_picker_request_duration_seconds";

/// Install the Prometheus recorder with its own HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint enabled");
    Ok(())
}

/// Record one finished pick.
pub fn record_pick(outcome: &'static str, start_time: Instant) {
    metrics::counter!(REQUESTS_TOTAL, "outcome" => outcome).increment(1);
    metrics::histogram!(REQUEST_DURATION, "outcome" => outcome)
        .record(start_time.elapsed().as_secs_f64());
}
