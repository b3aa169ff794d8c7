//! HTTP document fetcher.
//!
//! # Responsibilities
//! - Validate the target URL (http/https with a host)
//! - Issue a single GET with the configured timeouts
//! - Buffer the whole body, enforcing the size cap
//! - Reject empty documents before they reach the selector

use std::time::Duration;
use url::Url;

use crate::config::FetchConfig;
use crate::fetch::types::{DocumentSource, FetchError, FetchResult};

/// Parse and check a document URL.
pub fn parse_document_url(raw: &str) -> FetchResult<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FetchError::MissingUrl);
    }

    let url = Url::parse(raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::InvalidUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", other),
            })
        }
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidUrl {
            url: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}

/// Fetches documents over HTTP(S) with `reqwest`.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    max_document_bytes: usize,
}

impl HttpFetcher {
    /// Build a fetcher from configuration.
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(if config.max_redirects == 0 {
                reqwest::redirect::Policy::none()
            } else {
                reqwest::redirect::Policy::limited(config.max_redirects)
            });

        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            max_document_bytes: config.max_document_bytes,
        })
    }

    /// Configured body cap in bytes.
    pub fn max_document_bytes(&self) -> usize {
        self.max_document_bytes
    }

    async fn read_body(&self, mut response: reqwest::Response) -> FetchResult<Vec<u8>> {
        let limit = self.max_document_bytes;

        if response.content_length().is_some_and(|len| len > limit as u64) {
            return Err(FetchError::TooLarge { limit });
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?
        {
            if body.len() + chunk.len() > limit {
                return Err(FetchError::TooLarge { limit });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }
}

impl DocumentSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        let url = parse_document_url(url)?;

        tracing::info!(url = %url, "Querying remote document");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Request unsuccessful");
            FetchError::Connection(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Upstream returned error status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = self.read_body(response).await.inspect_err(|e| {
            tracing::warn!(url = %url, error = %e, "Error while retrieving remote document");
        })?;

        let text = String::from_utf8_lossy(&body).into_owned();
        if text.trim().is_empty() {
            tracing::warn!(url = %url, "Request succeeded but document was empty");
            return Err(FetchError::EmptyDocument);
        }

        tracing::info!(url = %url, bytes = body.len(), "Remote document retrieved");
        Ok(text)
    }
}
