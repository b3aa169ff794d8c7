//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the fetcher produce:
//!     → logging.rs (structured tracing events, request spans)
//!     → metrics.rs (request counters and latency histograms)
//!
//! Consumers:
//!     → stdout (pretty or compact formatter)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line via the request span
//! - Metric updates are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
