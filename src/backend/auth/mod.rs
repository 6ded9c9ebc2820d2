//! Authentication Module
//!
//! This module handles password hashing, session tokens, user persistence
//! and the HTTP handlers for registration and login.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── error.rs        - AuthError taxonomy
//! ├── password.rs     - bcrypt credential hasher
//! ├── sessions.rs     - JWT token authority
//! ├── users.rs        - User model and database operations
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - POST /users
//!     ├── login.rs    - POST /login
//!     ├── user.rs     - GET /users/{id}
//!     └── me.rs       - GET /me
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: password → `CredentialHasher::hash` → digest stored with the user
//! 2. **Login**: stored digest → `CredentialHasher::verify` → `TokenAuthority::issue`
//! 3. **Protected request**: bearer token → `TokenAuthority::verify` → identity
//!    attached to the request by `middleware::auth_middleware`
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10 by default)
//! - Tokens are HS256 JWTs that expire after 3 hours by default
//! - Unknown email and wrong password get the same 401 response
//! - Passwords, digests, tokens and the signing secret are never logged

/// Authentication error taxonomy
pub mod error;

/// bcrypt password hashing
pub mod password;

/// JWT token issuance and verification
pub mod sessions;

/// User data model and database operations
pub mod users;

/// HTTP handlers for user and login endpoints
pub mod handlers;

pub use error::AuthError;
pub use password::CredentialHasher;
pub use sessions::{IdentityClaim, SigningSecret, TokenAuthority};
pub use handlers::types::{CreateUserRequest, LoginRequest, LoginResponse, UserResponse};
pub use handlers::{get_me, get_user, login, register};
