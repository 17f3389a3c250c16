//! Error types for the API client.

use thiserror::Error;

/// Errors returned by `ApiClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404; `detail` is its explanation, e.g.
    /// `Can't find To-do ID 3.`
    #[error("not found: {detail}")]
    NotFound { detail: String },

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
