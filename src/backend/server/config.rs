/**
 * Server Configuration
 *
 * This module loads the process-wide configuration once at startup: the
 * token signing secret, the bcrypt cost, token lifetime, listen port and
 * the optional PostgreSQL connection.
 *
 * # Configuration Sources
 *
 * Environment variables (a `.env` file is loaded by the binary first):
 *
 * - `JWT_SECRET` - required; the server refuses to start without it
 * - `DATABASE_URL` - optional; database features are disabled when unset
 * - `SERVER_PORT` or `PORT` - default 3000
 * - `BCRYPT_COST` - default 10
 * - `TOKEN_TTL_SECS` - default 10800 (3 hours)
 */

use chrono::Duration;
use sqlx::PgPool;
use std::fmt;
use thiserror::Error;

use crate::backend::auth::password::{CredentialHasher, DEFAULT_COST};
use crate::backend::auth::sessions::{SigningSecret, TokenAuthority, DEFAULT_TOKEN_TTL_SECS};

/// Port used when neither `SERVER_PORT` nor `PORT` is set
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration, fixed for the lifetime of the process
#[derive(Clone)]
pub struct ServerConfig {
    /// PostgreSQL URL; `None` disables database features
    pub database_url: Option<String>,
    /// Listen port
    pub port: u16,
    /// Token signing secret
    pub jwt_secret: SigningSecret,
    /// Password hasher with the configured cost
    pub hasher: CredentialHasher,
    /// Lifetime of issued session tokens
    pub token_ttl: Duration,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_configured", &self.database_url.is_some())
            .field("port", &self.port)
            .field("jwt_secret", &self.jwt_secret)
            .field("bcrypt_cost", &self.hasher.cost())
            .field("token_ttl_secs", &self.token_ttl.num_seconds())
            .finish()
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut builder = ServerConfig::builder();

        if let Some(secret) = get("JWT_SECRET") {
            builder = builder.jwt_secret(SigningSecret::new(secret));
        }
        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(port) = get("SERVER_PORT").or_else(|| get("PORT")) {
            builder = builder.port(parse("SERVER_PORT", &port)?);
        }
        if let Some(cost) = get("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse("BCRYPT_COST", &cost)?);
        }
        if let Some(ttl) = get("TOKEN_TTL_SECS") {
            let secs: i64 = parse("TOKEN_TTL_SECS", &ttl)?;
            let ttl = Duration::try_seconds(secs)
                .filter(|ttl| *ttl >= Duration::zero())
                .ok_or(ConfigError::InvalidValue {
                    key: "TOKEN_TTL_SECS",
                    value: ttl,
                })?;
            builder = builder.token_ttl(ttl);
        }

        builder.build()
    }

    /// Token authority built from the secret and lifetime
    pub fn token_authority(&self) -> TokenAuthority {
        TokenAuthority::new(&self.jwt_secret, self.token_ttl)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Builder for ServerConfig
#[derive(Debug)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    port: u16,
    jwt_secret: Option<SigningSecret>,
    bcrypt_cost: u32,
    token_ttl: Duration,
}

impl Default for ServerConfigBuilder {
    fn default() -> Self {
        Self {
            database_url: None,
            port: DEFAULT_PORT,
            jwt_secret: None,
            bcrypt_cost: DEFAULT_COST,
            token_ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECS),
        }
    }
}

impl ServerConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: SigningSecret) -> Self {
        self.jwt_secret = Some(secret);
        self
    }

    /// Set the bcrypt cost factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Set the session token lifetime
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let hasher = CredentialHasher::new(self.bcrypt_cost).map_err(|_| {
            ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            }
        })?;

        Ok(ServerConfig {
            database_url: self.database_url,
            port: self.port,
            jwt_secret,
            hasher,
            token_ttl: self.token_ttl,
        })
    }
}

/// Connect to PostgreSQL and run migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the connection succeeds
/// - `None` if the connection fails; handlers that need the database then
///   answer 503
pub async fn load_database(database_url: &str) -> Option<PgPool> {
    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}
