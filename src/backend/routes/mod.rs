//! Routes Module
//!
//! - **`router`** - Top-level router, shared layers and service routes
//! - **`api_routes`** - User, login and post endpoints

/// Main router creation
pub mod router;

/// User, login and post routes
pub mod api_routes;

pub use router::create_router;
