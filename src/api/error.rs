//! Error definitions and HTTP status normalization.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while building an [`crate::ApiClient`].
///
/// Runtime transport failures never surface here; the engine folds them
/// into the [`crate::ApiResponse`] envelope.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL failed to parse.
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Fallback `error`/`message` labels for a non-2xx status.
///
/// Used only when the response body does not carry its own `error` or
/// `message` fields; server-supplied values take precedence in every case.
pub(crate) fn status_labels(status: StatusCode) -> (&'static str, &'static str) {
    match status.as_u16() {
        400 => ("Validation failed", "Invalid input data provided."),
        404 => ("Not found", "The requested resource was not found."),
        409 => ("Conflict", "A conflict occurred with the current state."),
        500 => (
            "Internal server error",
            "An internal server error occurred. Please try again later.",
        ),
        _ => (
            "Unknown error",
            "An unexpected error occurred. Please try again.",
        ),
    }
}
