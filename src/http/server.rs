//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the pick and health handlers
//! - Wire up middleware (request ID, tracing, request timeout)
//! - Build the document fetcher from configuration
//! - Serve until a shutdown signal arrives

use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{AppConfig, ListenerConfig};
use crate::fetch::{DocumentSource, HttpFetcher};
use crate::http::handler::{health, pick_random_line};
use crate::http::request::{propagate_request_id_layer, request_span, set_request_id_layer};
use crate::lifecycle::signals::shutdown_signal;

/// Path of the line picking endpoint.
pub const PICK_ENDPOINT: &str = "/pick-random-line";

/// Extra time the outer timeout layer allows past the request deadline.
const TIMEOUT_LAYER_GRACE: Duration = Duration::from_secs(5);

/// Application state injected into handlers.
pub struct AppState<S> {
    pub source: Arc<S>,
    /// Deadline for one pick, fetch included.
    pub request_timeout: Duration,
}

impl<S> AppState<S> {
    pub fn new(source: S, request_timeout: Duration) -> Self {
        Self {
            source: Arc::new(source),
            request_timeout,
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            request_timeout: self.request_timeout,
        }
    }
}

/// Build the router around any document source.
///
/// The pick handler answers with `Error! ...` once `request_timeout_secs`
/// elapses; the timeout layer only cuts off requests that overrun that.
#[allow(deprecated)]
pub fn build_router<S: DocumentSource>(config: &ListenerConfig, source: S) -> Router {
    let request_timeout = Duration::from_secs(config.request_timeout_secs);
    let middleware = ServiceBuilder::new()
        .layer(set_request_id_layer())
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(TimeoutLayer::new(request_timeout + TIMEOUT_LAYER_GRACE));

    Router::new()
        .route(PICK_ENDPOINT, get(pick_random_line::<S>))
        .route("/health", get(health))
        .with_state(AppState::new(source, request_timeout))
        .layer(middleware)
}

/// HTTP server for the line picker.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server backed by an [`HttpFetcher`] built from `config.fetch`.
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let fetcher = HttpFetcher::new(&config.fetch)?;
        let router = build_router(&config.listener, fetcher);
        Ok(Self { router })
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once `shutdown` fires (or Ctrl+C / SIGTERM) and in-flight
    /// requests have completed.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            endpoint = PICK_ENDPOINT,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
