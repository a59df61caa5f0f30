//! Relay error taxonomy.
//!
//! Every failure is converted to an HTTP response at the handler boundary;
//! nothing propagates past it.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use murmur_core::types::ErrorBody;

/// Everything that can go wrong while relaying one synthesis request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Caller sent a body without a usable `text` field. 400; the caller
    /// can fix the input and retry.
    #[error("{0}")]
    InvalidRequest(String),

    /// Deployment is missing required configuration. 500; only an operator
    /// can fix this.
    #[error("{0}")]
    Misconfiguration(String),

    /// Provider answered with a non-success status. 500, with the provider's
    /// own error text relayed for diagnosis.
    #[error("TTS request failed: {detail}")]
    Upstream { detail: String },

    /// Anything else: network failure, malformed JSON, and so on. 500 with
    /// the stringified cause.
    #[error("{detail}")]
    Unexpected { detail: String },
}

impl RelayError {
    pub fn unexpected(detail: impl ToString) -> Self {
        Self::Unexpected {
            detail: detail.to_string(),
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        Self::unexpected(e)
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(e: serde_json::Error) -> Self {
        Self::unexpected(e)
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(msg)),
            Self::Misconfiguration(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(msg))
            }
            Self::Upstream { detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::with_detail("TTS request failed", detail),
            ),
            Self::Unexpected { detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::with_detail("Server error", detail),
            ),
        };
        (status, Json(body)).into_response()
    }
}
