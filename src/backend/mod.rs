//! Backend Module
//!
//! All server-side code: a small Axum HTTP server exposing users and posts,
//! with credential login and bearer-token authorization on the write path.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Configuration, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Password hashing, tokens, users, login
//! ├── posts/          - Post persistence and handlers
//! ├── middleware/     - Authorization middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! - **Public**: `GET /posts`, `GET /posts/{id}`, `GET /users/{id}`,
//!   `POST /users`, `POST /login`
//! - **Protected**: `POST /posts`, `GET /me` go through `auth_middleware`
//!   first; the handler only runs for a valid, unexpired token
//!
//! # Thread Safety
//!
//! Shared state is read-only after startup: the database pool is internally
//! synchronized, and the hasher and token authority are immutable values
//! behind `Arc`/`Copy`. bcrypt work runs on Tokio's blocking pool.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Posts
pub mod posts;

/// Middleware for request processing
pub mod middleware;

pub use error::BackendError;
pub use server::create_app;
