/**
 * Session Management and JWT Tokens
 *
 * This module issues and verifies the stateless session tokens handed out
 * at login. A token is an HS256 JWT whose payload carries the user's id and
 * email plus issued-at and expiry timestamps, so verification needs nothing
 * but the shared secret and the current time.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::backend::auth::error::AuthError;

/// Default token lifetime: 3 hours
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3 * 60 * 60;

/// Identity carried inside a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaim {
    /// User ID
    pub user_id: Uuid,
    /// User email
    pub email: String,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User ID
    sub: String,
    email: String,
    /// Issued at time (Unix timestamp)
    iat: i64,
    /// Expiration time (Unix timestamp)
    exp: i64,
}

/// HMAC secret used to sign session tokens
///
/// `Debug` output is redacted so the secret cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(String);

impl SigningSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

/// Issues and verifies session tokens
///
/// Built once at startup from configuration and shared read-only between
/// request handlers.
#[derive(Clone)]
pub struct TokenAuthority {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl fmt::Debug for TokenAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenAuthority")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenAuthority {
    /// Create an authority signing with `secret` and issuing tokens valid for `ttl`
    pub fn new(secret: &SigningSecret, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by hand in `verify_at`: strictly `now < exp`, no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Lifetime of issued tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a JWT token for a user
    ///
    /// # Returns
    /// JWT token string
    pub fn issue(&self, claim: &IdentityClaim) -> Result<String, AuthError> {
        self.issue_at(claim, Utc::now())
    }

    /// Create a JWT token as if the current time were `now`
    pub fn issue_at(&self, claim: &IdentityClaim, now: DateTime<Utc>) -> Result<String, AuthError> {
        let iat = now.timestamp();
        let claims = Claims {
            sub: claim.user_id.to_string(),
            email: claim.email.clone(),
            iat,
            exp: iat + self.ttl.num_seconds(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(AuthError::TokenIssue)
    }

    /// Verify and decode a JWT token
    ///
    /// # Returns
    /// The identity the token was issued for
    pub fn verify(&self, token: &str) -> Result<IdentityClaim, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`
    ///
    /// The signature is checked before any claim is read; expiry is checked
    /// only once the signature is known to be good.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<IdentityClaim, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            })?
            .claims;

        if now.timestamp() >= claims.exp {
            return Err(AuthError::TokenExpired);
        }

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::TokenInvalid)?;

        Ok(IdentityClaim {
            user_id,
            email: claims.email,
        })
    }
}
