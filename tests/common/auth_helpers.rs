//! Authentication test helpers
//!
//! Utilities for building a test app, creating users and generating tokens.

use axum::Router;
use chrono::Duration;
use sqlx::PgPool;
use uuid::Uuid;

use postboard::backend::auth::users::create_user;
use postboard::backend::auth::{IdentityClaim, SigningSecret};
use postboard::backend::routes::create_router;
use postboard::backend::server::{AppState, ServerConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Configuration with the lowest bcrypt cost to keep tests fast
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .jwt_secret(SigningSecret::new(TEST_SECRET))
        .bcrypt_cost(4)
        .token_ttl(Duration::hours(3))
        .build()
        .expect("valid test configuration")
}

/// Router plus the state it was built from
pub fn test_app(pool: Option<PgPool>) -> (Router, AppState) {
    let state = AppState::new(&test_config(), pool);
    (create_router(state.clone()), state)
}

/// A fresh email so tests can share one database
pub fn unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4())
}

/// Create a test user directly in the database and issue a token for it
pub async fn create_test_user(
    pool: &PgPool,
    state: &AppState,
    email: &str,
    password: &str,
) -> TestUser {
    let password_hash = state.hasher.hash(password).expect("hash password");
    let user = create_user(pool, "tester".to_string(), email.to_string(), password_hash)
        .await
        .expect("create user");

    let token = state
        .tokens
        .issue(&IdentityClaim {
            user_id: user.id,
            email: user.email.clone(),
        })
        .expect("issue token");

    TestUser {
        id: user.id,
        email: user.email,
        password: password.to_string(),
        token,
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
