//! Error types for the HTTP shell.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service. Store errors collapse to two
//! outcomes: absent-or-expired becomes a 404, everything else a 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::render;

/// Shell error type.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The requested snippet does not exist or has expired.
    #[error("not found")]
    NotFound,

    /// The snippet store failed (database unreachable, query error, ...).
    #[error("store error: {0}")]
    Store(snipbin_core::Error),
}

impl From<snipbin_core::Error> for PageError {
    fn from(err: snipbin_core::Error) -> Self {
        match err {
            snipbin_core::Error::NotFound => Self::NotFound,
            other => Self::Store(other),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                "Not Found",
                "The snippet you are looking for does not exist or has expired.",
            ),
            Self::Store(err) => {
                tracing::error!(error = %err, "snippet store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server Error",
                    "Something went wrong on our end. Please try again later.",
                )
            }
        };

        (status, render::error_page(title, message)).into_response()
    }
}
