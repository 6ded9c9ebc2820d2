//! Shared Module
//!
//! Types that every layer of the backend uses, independent of Axum or the
//! database. At the moment this is the request validation error; request
//! and response bodies live next to their handlers.

/// Shared error types
pub mod error;

pub use error::SharedError;
