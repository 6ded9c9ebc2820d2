//! Posts Module
//!
//! Posts are public to read; creating one requires a valid session token,
//! and the post's owner is always the identity carried by that token.
//!
//! - **`db`** - Post model and database operations
//! - **`types`** - Request types
//! - **`handlers`** - HTTP handlers for `/posts`

/// Post model and database operations
pub mod db;

/// Request types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use db::Post;
pub use handlers::{create_post, get_post, list_posts};
pub use types::CreatePostRequest;
