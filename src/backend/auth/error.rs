/**
 * Authentication Errors
 *
 * Every failure the credential hasher, the token authority and the
 * authorization middleware can produce. Messages are deliberately terse:
 * they never contain the password, the digest, the token or the secret.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by the authentication core
#[derive(Debug, Error)]
pub enum AuthError {
    /// bcrypt could not produce a digest (entropy or resource failure)
    #[error("password hashing failed")]
    HashingFailure(#[source] bcrypt::BcryptError),

    /// The password is longer than bcrypt can hash without truncating
    #[error("password is longer than {max} bytes", max = super::password::MAX_PASSWORD_BYTES)]
    PasswordTooLong,

    /// The stored digest is not a valid bcrypt string
    #[error("stored password digest is malformed")]
    MalformedDigest(#[source] bcrypt::BcryptError),

    /// The configured bcrypt cost is outside the accepted range
    #[error("bcrypt cost {0} is outside {min}..={max}", min = super::password::MIN_COST, max = super::password::MAX_COST)]
    InvalidCost(u32),

    /// The token could not be signed
    #[error("failed to issue session token")]
    TokenIssue(#[source] jsonwebtoken::errors::Error),

    /// Bad signature or malformed token
    #[error("invalid token")]
    TokenInvalid,

    /// Signature is valid but the token is past its expiry
    #[error("token expired")]
    TokenExpired,

    /// No bearer token was supplied
    #[error("no token provided")]
    MissingToken,
}

impl AuthError {
    /// HTTP status this error maps to at the request boundary
    ///
    /// - `PasswordTooLong` - 400 Bad Request
    /// - `MissingToken` - 401 Unauthorized
    /// - `TokenInvalid`, `TokenExpired` - 403 Forbidden
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::PasswordTooLong => StatusCode::BAD_REQUEST,
            Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::TokenInvalid | Self::TokenExpired => StatusCode::FORBIDDEN,
            Self::HashingFailure(_)
            | Self::MalformedDigest(_)
            | Self::InvalidCost(_)
            | Self::TokenIssue(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to a client
    ///
    /// Expired and invalid tokens share one message so the response does not
    /// tell an attacker which check failed.
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::PasswordTooLong => "Password must be at most 71 bytes.",
            Self::MissingToken => "No token provided.",
            Self::TokenInvalid | Self::TokenExpired => "Invalid token.",
            _ => "Internal Server Error",
        }
    }
}
