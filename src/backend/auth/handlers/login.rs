/**
 * Login Handler
 *
 * POST /login
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a session token for {id, email}
 *
 * Unknown email and wrong password produce the same 401 so the endpoint
 * cannot be used to enumerate accounts.
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use sqlx::PgPool;
use std::sync::Arc;

use crate::backend::auth::handlers::run_blocking;
use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::password::CredentialHasher;
use crate::backend::auth::sessions::{IdentityClaim, TokenAuthority};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::shared::SharedError;

fn invalid_credentials() -> BackendError {
    BackendError::handler(StatusCode::UNAUTHORIZED, "Invalid email or password.")
}

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing email or password
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - Database failure, corrupt stored digest,
///   or token signing failure
pub async fn login(
    State(pool): State<Option<PgPool>>,
    State(hasher): State<CredentialHasher>,
    State(tokens): State<Arc<TokenAuthority>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BackendError> {
    let Json(request) = body?;
    let pool = pool.ok_or_else(BackendError::database_unavailable)?;

    SharedError::require("email", &request.email)?;
    SharedError::require("password", &request.password)?;

    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            invalid_credentials()
        })?;

    let password = request.password;
    let digest = user.password_hash.clone();
    let valid = run_blocking(move || hasher.verify(&password, &digest))
        .await?
        .inspect_err(|e| tracing::error!("Stored digest for user {} is unusable: {}", user.id, e))?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(invalid_credentials());
    }

    let token = tokens.issue(&IdentityClaim {
        user_id: user.id,
        email: user.email.clone(),
    })?;

    tracing::info!("User logged in successfully: {} ({})", user.id, user.email);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}
