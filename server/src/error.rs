//! Store errors and their HTTP mapping.
//!
//! The store has a single failure mode: the requested id is not there.
//! Greetings that would grow past a fixed size are refused as well.
//! Malformed requests never reach this module; axum's extractors reject
//! them with their own status codes.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Which store operation was looking for the missing id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TodoOp {
    Lookup,
    Update,
    Delete,
}

impl fmt::Display for TodoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoOp::Lookup => Ok(()),
            TodoOp::Update => f.write_str(" to update"),
            TodoOp::Delete => f.write_str(" to delete"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Can't find To-do ID {id}{op}.")]
    NotFound { id: i64, op: TodoOp },
}

/// Error returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Greeting repeated {repeat} times is too long.")]
    GreetingTooLong { repeat: i64 },
}

/// JSON error envelope, `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::GreetingTooLong { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        tracing::debug!(%status, error = %self, "request failed");
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
