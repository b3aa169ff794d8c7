//! Remote document retrieval.
//!
//! # Data Flow
//! ```text
//! url parameter
//!     → client.rs (validate URL, single GET, buffer body)
//!     → types.rs (FetchError on any failure)
//!     → full document text handed to the selector
//! ```
//!
//! # Design Decisions
//! - One request per call: no retries, no caching
//! - The body is buffered completely before selection starts
//! - Non-success statuses are errors, never documents

pub mod client;
pub mod types;

pub use client::{parse_document_url, HttpFetcher};
pub use types::{DocumentSource, FetchError, FetchResult};
