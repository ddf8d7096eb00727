//! Axum-specific error types and mappings.
//!
//! This module provides the error type for the Axum adapter and its mapping
//! from `CoreError` to HTTP status codes and response bodies. Store details
//! are logged server-side and never echoed to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use namelist_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Message sent to clients for every server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (malformed or incomplete body).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request body was not JSON or URL-encoded form data.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::UnsupportedMediaType(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        // Already logged at the data access boundary
        Self::Internal(err.to_string())
    }
}
