/**
 * Registration Handler
 *
 * POST /users
 *
 * 1. Require username, email and password
 * 2. Reject an email that is already registered
 * 3. Hash the password with bcrypt
 * 4. Store the user and return it (without the digest)
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use sqlx::PgPool;

use crate::backend::auth::handlers::run_blocking;
use crate::backend::auth::handlers::types::{CreateUserRequest, UserResponse};
use crate::backend::auth::password::CredentialHasher;
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::error::BackendError;
use crate::shared::SharedError;

const EMAIL_TAKEN: &str = "Email is already registered";

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing field, password over 71 bytes, or email
///   already registered
/// * `400`/`415`/`422` - Body is not the expected JSON
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If hashing or the insert fails
pub async fn register(
    State(pool): State<Option<PgPool>>,
    State(hasher): State<CredentialHasher>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    let Json(request) = body?;
    let pool = pool.ok_or_else(BackendError::database_unavailable)?;

    SharedError::require("username", &request.username)?;
    SharedError::require("email", &request.email)?;
    SharedError::require("password", &request.password)?;

    tracing::info!("Registration request for email: {}", request.email);

    if get_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::bad_request(EMAIL_TAKEN));
    }

    let CreateUserRequest {
        username,
        email,
        password,
    } = request;

    let password_hash = run_blocking(move || hasher.hash(&password)).await??;

    let user = match create_user(&pool, username, email, password_hash).await {
        Ok(user) => user,
        // Lost a race with a concurrent registration for the same email.
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            return Err(BackendError::bad_request(EMAIL_TAKEN));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
