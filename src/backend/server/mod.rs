//! Server Module
//!
//! Everything needed to turn configuration into a running Axum app.
//!
//! - **`config`** - Environment configuration and database connection
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - App creation
//!
//! # Initialization Flow
//!
//! 1. `ServerConfig::from_env()` (fails fast without `JWT_SECRET`)
//! 2. `create_app(&config)` connects the database and builds the router
//! 3. The binary binds a listener and runs `axum::serve`

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
