//! Post HTTP Handlers
//!
//! - `GET /posts` - every post
//! - `GET /posts/{id}` - one post
//! - `POST /posts` - create a post (behind `auth_middleware`)

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use super::db::{self, Post};
use super::types::CreatePostRequest;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::SharedError;

/// List all posts
///
/// An empty table is an empty list, not an error.
pub async fn list_posts(
    State(pool): State<Option<PgPool>>,
) -> Result<Json<Vec<Post>>, BackendError> {
    let pool = pool.ok_or_else(BackendError::database_unavailable)?;
    let posts = db::list_posts(&pool).await?;
    Ok(Json(posts))
}

/// Get a post by id
pub async fn get_post(
    State(pool): State<Option<PgPool>>,
    Path(id): Path<String>,
) -> Result<Json<Post>, BackendError> {
    let pool = pool.ok_or_else(BackendError::database_unavailable)?;
    let id = Uuid::parse_str(&id).map_err(|_| BackendError::bad_request("Invalid post id"))?;

    let post = db::get_post_by_id(&pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found("Post not found"))?;

    Ok(Json(post))
}

/// Create a post owned by the authenticated user
///
/// Answers 404 if the token's user has been deleted since it was issued.
pub async fn create_post(
    State(pool): State<Option<PgPool>>,
    AuthUser(author): AuthUser,
    body: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), BackendError> {
    let Json(request) = body?;
    let pool = pool.ok_or_else(BackendError::database_unavailable)?;

    SharedError::require("post_title", &request.post_title)?;
    SharedError::require("post_content", &request.post_content)?;

    let post = match db::create_post(
        &pool,
        author.user_id,
        &request.post_title,
        &request.post_content,
    )
    .await
    {
        Ok(post) => post,
        // The token outlived its user.
        Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
            tracing::warn!("Token refers to a user that no longer exists: {}", author.user_id);
            return Err(BackendError::not_found("User not found"));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("Post {} created by user {}", post.id, author.user_id);

    Ok((StatusCode::CREATED, Json(post)))
}
