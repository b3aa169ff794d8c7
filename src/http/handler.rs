//! Pick endpoint handlers.
//!
//! Per request: validate parameters → fetch document → select line → respond.
//! Nothing is kept between requests.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::time::Instant;

use crate::fetch::DocumentSource;
use crate::http::params::PickParams;
use crate::http::response::PickError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::select::{select_line, Criterion};

/// Run one pick against `source`.
///
/// A missing or blank `url` fails before any fetch is attempted.
pub async fn pick_line<S: DocumentSource>(
    source: &S,
    params: &PickParams,
) -> Result<String, PickError> {
    let url = params.document_url().ok_or(PickError::MissingParameter)?;
    let criterion = Criterion::from_param(params.line.as_deref());

    tracing::debug!(url = %url, criterion = %criterion, "Picking line");

    let document = source.fetch(url).await?;
    let line = select_line(&document, &criterion)?;

    tracing::info!(criterion = %criterion, line = %line, "Line found");
    Ok(line)
}

/// `GET /pick-random-line`
pub async fn pick_random_line<S: DocumentSource>(
    State(state): State<AppState<S>>,
    uri: Uri,
) -> Response {
    let start_time = Instant::now();
    let params = PickParams::from_uri(&uri);

    let outcome = tokio::time::timeout(
        state.request_timeout,
        pick_line(state.source.as_ref(), &params),
    )
    .await
    .unwrap_or_else(|_| Err(PickError::Timeout(state.request_timeout.as_secs())));

    match outcome {
        Ok(line) => {
            metrics::record_pick("ok", start_time);
            (StatusCode::OK, line).into_response()
        }
        Err(err) => {
            tracing::warn!(kind = err.kind(), error = %err, "Pick failed");
            metrics::record_pick(err.kind(), start_time);
            err.into_response()
        }
    }
}

/// `GET /health`
pub async fn health() -> &'static str {
    "OK"
}
