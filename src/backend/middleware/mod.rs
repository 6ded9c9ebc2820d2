//! Middleware Module
//!
//! HTTP middleware for the backend server. Middleware runs before handlers
//! and can short-circuit a request.
//!
//! - **`auth`** - Bearer-token authorization for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::post, Router};
//! use postboard::backend::middleware::auth_middleware;
//! use postboard::backend::posts::create_post;
//! use postboard::backend::server::AppState;
//!
//! fn protected(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/posts", post(create_post))
//!         .route_layer(from_fn_with_state(state.tokens.clone(), auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, authorize, AuthUser, AuthenticatedUser, Authorization};
