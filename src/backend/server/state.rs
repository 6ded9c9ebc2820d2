/**
 * Application State Management
 *
 * `AppState` holds everything handlers share: the optional database pool,
 * the password hasher and the token authority. The hasher and authority
 * are built once from `ServerConfig` and never mutated, so no locking is
 * needed.
 *
 * The `FromRef` implementations let handlers extract only the part they
 * need, e.g. `State(pool): State<Option<PgPool>>`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::backend::auth::{CredentialHasher, TokenAuthority};
use crate::backend::server::config::ServerConfig;

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    ///
    /// `None` if `DATABASE_URL` is not set or the connection failed.
    /// Handlers answer 503 in that case.
    pub db_pool: Option<PgPool>,

    /// bcrypt hasher with the configured cost
    pub hasher: CredentialHasher,

    /// Issues and verifies session tokens
    pub tokens: Arc<TokenAuthority>,
}

impl AppState {
    /// Build state from configuration and an already-connected pool
    pub fn new(config: &ServerConfig, db_pool: Option<PgPool>) -> Self {
        Self {
            db_pool,
            hasher: config.hasher,
            tokens: Arc::new(config.token_authority()),
        }
    }
}

impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for CredentialHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher
    }
}

impl FromRef<AppState> for Arc<TokenAuthority> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
