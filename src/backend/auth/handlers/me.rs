/**
 * Get Current User Handler
 *
 * GET /me returns the user the bearer token was issued for. The route sits
 * behind `auth_middleware`, so the handler only sees verified identities.
 */
use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

pub async fn get_me(
    State(pool): State<Option<PgPool>>,
    AuthUser(current): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let pool = pool.ok_or_else(BackendError::database_unavailable)?;

    let user = get_user_by_id(&pool, current.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token refers to a user that no longer exists: {}", current.user_id);
            BackendError::not_found("User not found")
        })?;

    Ok(Json(UserResponse::from(user)))
}
