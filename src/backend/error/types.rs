/**
 * Backend Error Types
 *
 * Every failure a handler can return. Each variant knows its HTTP status
 * and the message a client is allowed to see.
 */

use axum::{extract::rejection::JsonRejection, http::StatusCode};
use thiserror::Error;

use crate::backend::auth::AuthError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use postboard::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "Post not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g. unknown id, duplicate email)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Server-side failure that is not a database error
    #[error("State error: {message}")]
    StateError {
        /// Human-readable error message
        message: String,
    },

    /// Authentication failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Shared error (request validation)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Request body is not acceptable JSON for the endpoint
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::StateError {
            message: message.into(),
        }
    }

    /// 404 with the given message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// 400 with the given message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// 503 returned when `DATABASE_URL` was not configured
    pub fn database_unavailable() -> Self {
        Self::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `StateError`, `Database` - 500
    /// - `Auth` - 400, 401, 403 or 500 depending on the auth failure
    /// - `SharedError` - 400
    /// - `InvalidBody` - whatever axum assigns the rejection (400, 415 or 422)
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::StateError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => err.status_code(),
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::InvalidBody(rejection) => rejection.status(),
        }
    }

    /// Message safe to send to the client
    ///
    /// Server errors never expose their cause.
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            if let Self::HandlerError { message, .. } = self {
                return message.clone();
            }
            return "Internal Server Error".to_string();
        }

        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Auth(err) => err.client_message().to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::InvalidBody(rejection) => rejection.body_text(),
            other => other.to_string(),
        }
    }
}
