//! Shared Error Types
//!
//! Errors raised while validating request data, before any business logic
//! runs.
//!
//! # Usage
//!
//! ```rust
//! use postboard::shared::error::SharedError;
//!
//! assert!(SharedError::require("username", "alice").is_ok());
//! assert!(SharedError::require("username", "  ").is_err());
//! ```
use thiserror::Error;

/// Validation errors shared across the backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A required field was missing or blank
    #[error("All fields are required (missing '{field}')")]
    MissingField {
        /// Name of the missing field
        field: String,
    },
}

impl SharedError {
    /// Require `value` to contain something other than whitespace
    pub fn require(field: &str, value: &str) -> Result<(), Self> {
        if value.trim().is_empty() {
            return Err(Self::MissingField {
                field: field.to_string(),
            });
        }
        Ok(())
    }
}
