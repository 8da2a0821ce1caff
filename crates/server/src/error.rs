//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers should return
//! `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::dummyjson::UpstreamError;
use crate::services::{CartError, VerifyError};

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Upstream API operation failed.
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Credential verification failed.
    #[error("Verification error: {0}")]
    Verify(#[from] VerifyError),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

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
        if matches!(
            self,
            Self::Upstream(_) | Self::Internal(_) | Self::Cart(CartError::CatalogLookupFailed(_))
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Cart(err) => match err {
                CartError::DuplicateItem(_) => StatusCode::BAD_REQUEST,
                CartError::ItemNotFound(_) => StatusCode::NOT_FOUND,
                CartError::CatalogLookupFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Verify(_) | Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Upstream(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Cart(err) => match err {
                CartError::CatalogLookupFailed(_) => "Internal server error".to_string(),
                other => other.to_string(),
            },
            Self::Verify(err) => err.to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
