//! Fetch error definitions and the document source abstraction.

use std::future::Future;
use thiserror::Error;

/// Errors that can occur while retrieving a remote document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No URL was supplied.
    #[error("The 'url' parameter is missing!")]
    MissingUrl,

    /// URL could not be parsed or uses an unsupported scheme.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// DNS, connect, TLS, timeout or body stream failure.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Upstream answered with a non-success status.
    #[error("Remote server responded with status {0}")]
    Status(u16),

    /// Body grew past the configured cap.
    #[error("The remote document exceeds {limit} bytes!")]
    TooLarge { limit: usize },

    /// Body was empty or whitespace only.
    #[error("The remote document is empty!")]
    EmptyDocument,
}

impl FetchError {
    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::MissingUrl => "missing_parameter",
            FetchError::InvalidUrl { .. } => "invalid_url",
            FetchError::Connection(_) => "connection_error",
            FetchError::Status(_) => "upstream_status",
            FetchError::TooLarge { .. } => "too_large",
            FetchError::EmptyDocument => "empty_document",
        }
    }
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Anything that can turn a URL into document text.
///
/// Implementations perform at most one retrieval per call and never cache.
pub trait DocumentSource: Send + Sync + 'static {
    fn fetch(&self, url: &str) -> impl Future<Output = FetchResult<String>> + Send;
}
