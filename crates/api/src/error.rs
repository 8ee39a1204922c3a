//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;
use crate::views::ViewError;

/// Application-level error type for the users API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store lookup failed (the only store failure is a missing id).
    #[error("{0}")]
    Store(#[from] StoreError),

    /// View configuration disagrees with the model (bad allow list).
    #[error("View error: {0}")]
    View(#[from] ViewError),

    /// No representation satisfies the request's `Accept` header.
    #[error("Not acceptable: {0}")]
    NotAcceptable(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::View(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::View(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotAcceptable(_) => StatusCode::NOT_ACCEPTABLE,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::View(_) | Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
