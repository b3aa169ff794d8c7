//! Response rendering for the pick endpoint.
//!
//! # Responsibilities
//! - Collect fetch and selection failures into one request error
//! - Map each failure kind to an HTTP status code
//! - Render failures as a plain-text `Error! <message>` body

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::fetch::FetchError;
use crate::select::SelectionError;

/// Prefix of every error body.
pub const ERROR_PREFIX: &str = "Error! ";

/// Everything that can end a pick request without a line.
#[derive(Debug, Error)]
pub enum PickError {
    #[error("The 'url' parameter is missing!")]
    MissingParameter,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Request timed out after {0}s!")]
    Timeout(u64),
}

impl PickError {
    /// Status code sent with the error body.
    pub fn status_code(&self) -> StatusCode {
        match self {
            PickError::MissingParameter => StatusCode::BAD_REQUEST,
            PickError::Fetch(err) => match err {
                FetchError::MissingUrl | FetchError::InvalidUrl { .. } => StatusCode::BAD_REQUEST,
                FetchError::Connection(_) | FetchError::Status(_) | FetchError::TooLarge { .. } => {
                    StatusCode::BAD_GATEWAY
                }
                FetchError::EmptyDocument => StatusCode::UNPROCESSABLE_ENTITY,
            },
            PickError::Selection(err) => match err {
                SelectionError::EmptyDocument => StatusCode::UNPROCESSABLE_ENTITY,
                SelectionError::LineNotFound(_) | SelectionError::NoMatch(_) => {
                    StatusCode::NOT_FOUND
                }
            },
            PickError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            PickError::MissingParameter => "missing_parameter",
            PickError::Fetch(err) => err.kind(),
            PickError::Selection(SelectionError::EmptyDocument) => "empty_document",
            PickError::Selection(SelectionError::LineNotFound(_)) => "line_not_found",
            PickError::Selection(SelectionError::NoMatch(_)) => "no_match",
            PickError::Timeout(_) => "timeout",
        }
    }

    /// Full response body text.
    pub fn body(&self) -> String {
        format!("{}{}", ERROR_PREFIX, self)
    }
}

impl IntoResponse for PickError {
    fn into_response(self) -> Response {
        (self.status_code(), self.body()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_body() {
        let err = PickError::MissingParameter;
        assert_eq!(err.body(), "Error! The 'url' parameter is missing!");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_wrapped_messages_pass_through() {
        let err = PickError::from(SelectionError::LineNotFound(5));
        assert_eq!(err.body(), "Error! Line 5 is empty or nonexistent!");

        let err = PickError::from(FetchError::Connection("connection refused".into()));
        assert_eq!(err.body(), "Error! Connection error: connection refused");
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (PickError::from(FetchError::InvalidUrl { url: "x".into(), reason: "y".into() }), 400),
            (PickError::from(FetchError::Connection("timeout".into())), 502),
            (PickError::from(FetchError::Status(500)), 502),
            (PickError::from(FetchError::TooLarge { limit: 1 }), 502),
            (PickError::from(FetchError::EmptyDocument), 422),
            (PickError::from(SelectionError::EmptyDocument), 422),
            (PickError::from(SelectionError::LineNotFound(2)), 404),
            (PickError::from(SelectionError::NoMatch("q".into())), 404),
            (PickError::Timeout(30), 504),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code().as_u16(), status, "{}", err);
        }
    }

    #[test]
    fn test_timeout_body() {
        let err = PickError::Timeout(3);
        assert_eq!(err.body(), "Error! Request timed out after 3s!");
        assert_eq!(err.kind(), "timeout");
    }

    #[test]
    fn test_empty_document_kind_is_shared() {
        assert_eq!(PickError::from(FetchError::EmptyDocument).kind(), "empty_document");
        assert_eq!(PickError::from(SelectionError::EmptyDocument).kind(), "empty_document");
    }

    #[tokio::test]
    async fn test_into_response_is_plain_text() {
        let response = PickError::from(SelectionError::NoMatch("zeta".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Error! Could not find a line containing \"zeta\"!");
    }
}
