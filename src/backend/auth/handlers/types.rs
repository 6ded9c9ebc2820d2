/**
 * Request and Response Types
 *
 * Bodies for the user and login endpoints. Request fields default to empty
 * strings so a missing field reaches the handler's own validation and gets
 * a 400 instead of a deserialization rejection.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::User;

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct CreateUserRequest {
    /// Display name
    pub username: String,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct LoginRequest {
    /// Email the account was registered with
    pub email: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    /// JWT token for authentication
    pub token: String,
}

/// Public view of a user; never includes the password digest
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
