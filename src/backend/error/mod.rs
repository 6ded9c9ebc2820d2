//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `HandlerError` - Request-level failures with an explicit status
//! - `StateError` - Server-side failures outside the database
//! - `Auth` - Hashing, digest and token failures from `auth`
//! - `Database` - sqlx errors
//! - `SharedError` - Request validation errors
//! - `InvalidBody` - Request bodies axum could not decode as JSON
//!
//! # HTTP Response Conversion
//!
//! All backend errors implement `IntoResponse`, so handlers can return
//! `Result<_, BackendError>` and use `?` freely. Server errors are logged in
//! full and answered with a generic body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
