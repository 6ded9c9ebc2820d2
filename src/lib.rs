//! Postboard - Main Library
//!
//! Postboard is a small HTTP backend serving users and posts out of
//! PostgreSQL. Anyone can read; writing a post requires a bearer token
//! obtained by logging in.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared by every layer
//!   - Request validation errors
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and middleware
//!   - Password hashing (bcrypt) and session tokens (JWT)
//!   - Database persistence for users and posts
//!
//! # Usage
//!
//! ```rust,no_run
//! use postboard::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication
//!
//! - Passwords are stored only as bcrypt digests
//! - Login returns a self-contained HS256 JWT (3 hour lifetime by default)
//! - Protected routes read `Authorization: Bearer <token>`; a missing token
//!   is answered with 401, an invalid or expired one with 403
//!
//! # Error Handling
//!
//! - `Result<T, E>` for every fallible operation
//! - `AuthError` for the authentication core, `BackendError` for handlers,
//!   `SharedError` for request validation

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
