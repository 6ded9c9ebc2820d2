//! Post Database Operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A post as stored in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub post_title: String,
    pub post_content: String,
    /// Owner; always the authenticated user who created the post
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Insert a post owned by `user_id`
pub async fn create_post(
    pool: &PgPool,
    user_id: Uuid,
    post_title: &str,
    post_content: &str,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, post_title, post_content, user_id, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, post_title, post_content, user_id, created_at
        "#
    )
    .bind(Uuid::new_v4())
    .bind(post_title)
    .bind(post_content)
    .bind(user_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// All posts, oldest first
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, post_title, post_content, user_id, created_at
        FROM posts
        ORDER BY created_at ASC, id ASC
        "#
    )
    .fetch_all(pool)
    .await
}

/// Get post by ID
///
/// # Returns
/// Post or None if not found
pub async fn get_post_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, post_title, post_content, user_id, created_at
        FROM posts
        WHERE id = $1
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
