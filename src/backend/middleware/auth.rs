/**
 * Authentication Middleware
 *
 * This module protects routes that require a logged-in user. It reads the
 * bearer token from the Authorization header, verifies it with the
 * `TokenAuthority`, and hands the decoded identity to the handler through
 * request extensions.
 *
 * A request without a token is answered with 401; a request whose token is
 * malformed, forged or expired is answered with 403. Either way the handler
 * never runs.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::auth::{AuthError, IdentityClaim, TokenAuthority};
use crate::backend::error::BackendError;

const BEARER_PREFIX: &str = "Bearer ";

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

impl From<IdentityClaim> for AuthenticatedUser {
    fn from(claim: IdentityClaim) -> Self {
        Self {
            user_id: claim.user_id,
            email: claim.email,
        }
    }
}

/// Outcome of checking a request's Authorization header
#[derive(Debug)]
pub enum Authorization {
    /// Token verified; carries the identity it was issued for
    Authorized(IdentityClaim),
    /// Request must not reach the handler
    Rejected(AuthError),
}

impl Authorization {
    pub fn into_result(self) -> Result<IdentityClaim, AuthError> {
        match self {
            Self::Authorized(claim) => Ok(claim),
            Self::Rejected(reason) => Err(reason),
        }
    }
}

/// Check a raw Authorization header value
///
/// - no header, or `Bearer` with nothing after it: `MissingToken`
/// - not valid text, or not the `Bearer` scheme: `TokenInvalid`
/// - otherwise whatever `TokenAuthority::verify` decides
pub fn authorize(tokens: &TokenAuthority, header: Option<&HeaderValue>) -> Authorization {
    let Some(header) = header else {
        return Authorization::Rejected(AuthError::MissingToken);
    };

    let Ok(value) = header.to_str() else {
        return Authorization::Rejected(AuthError::TokenInvalid);
    };

    let token = match value.strip_prefix(BEARER_PREFIX) {
        Some(token) => token.trim(),
        None if value.trim() == BEARER_PREFIX.trim() => "",
        None => return Authorization::Rejected(AuthError::TokenInvalid),
    };

    if token.is_empty() {
        return Authorization::Rejected(AuthError::MissingToken);
    }

    match tokens.verify(token) {
        Ok(claim) => Authorization::Authorized(claim),
        Err(reason) => Authorization::Rejected(reason),
    }
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies the token
/// 3. Attaches the decoded identity to request extensions for use in handlers
///
/// Returns 401 if the token is missing and 403 if it is invalid or expired.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenAuthority>>,
    mut request: Request,
    next: Next,
) -> Response {
    match authorize(&tokens, request.headers().get(AUTHORIZATION)) {
        Authorization::Authorized(claim) => {
            tracing::debug!("Authorized request for user {}", claim.user_id);
            request.extensions_mut().insert(AuthenticatedUser::from(claim));
            next.run(request).await
        }
        Authorization::Rejected(reason) => {
            tracing::warn!(
                "Rejected {} {}: {}",
                request.method(),
                request.uri().path(),
                reason
            );
            BackendError::from(reason).into_response()
        }
    }
}

/// Axum extractor for authenticated user
///
/// Only meaningful on routes behind `auth_middleware`; anywhere else it
/// rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::from(AuthError::MissingToken)
            })?;

        Ok(AuthUser(user))
    }
}
