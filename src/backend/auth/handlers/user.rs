/**
 * Get User Handler
 *
 * GET /users/{id} returns the public view of one user.
 */
use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;

pub async fn get_user(
    State(pool): State<Option<PgPool>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, BackendError> {
    let pool = pool.ok_or_else(BackendError::database_unavailable)?;
    let id = Uuid::parse_str(&id).map_err(|_| BackendError::bad_request("Invalid user id"))?;

    let user = get_user_by_id(&pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    Ok(Json(UserResponse::from(user)))
}
