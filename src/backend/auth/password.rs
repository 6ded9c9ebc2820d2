/**
 * Password Hashing
 *
 * bcrypt-based credential hashing. Digests use the modular crypt format
 * (`$2b$<cost>$<salt><hash>`), so the salt and cost travel with the digest
 * and verification needs nothing but the digest itself.
 *
 * Both operations are CPU-bound on purpose. Handlers call them through
 * `tokio::task::spawn_blocking` so a slow hash does not stall the runtime.
 */

use bcrypt::BcryptError;

use crate::backend::auth::error::AuthError;

/// Cost factor used when none is configured
pub const DEFAULT_COST: u32 = 10;

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Longest password bcrypt can take without truncating it
///
/// bcrypt reads 72 bytes including a trailing NUL.
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Salted, adaptive one-way password hasher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialHasher {
    cost: u32,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl CredentialHasher {
    /// Create a hasher with the given bcrypt cost factor
    ///
    /// # Errors
    ///
    /// `AuthError::InvalidCost` if `cost` is outside `MIN_COST..=MAX_COST`.
    pub fn new(cost: u32) -> Result<Self, AuthError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(AuthError::InvalidCost(cost));
        }
        Ok(Self { cost })
    }

    /// Configured cost factor
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Derive a digest from a plaintext password
    ///
    /// Every call draws a fresh salt, so hashing the same password twice
    /// gives two different digests.
    ///
    /// # Errors
    ///
    /// - `AuthError::PasswordTooLong` if `plaintext` is over `MAX_PASSWORD_BYTES`
    /// - `AuthError::HashingFailure` if bcrypt cannot produce a digest
    pub fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        bcrypt::non_truncating_hash(plaintext, self.cost).map_err(|err| match err {
            BcryptError::Truncation(_) => AuthError::PasswordTooLong,
            other => AuthError::HashingFailure(other),
        })
    }

    /// Check a plaintext password against a stored digest
    ///
    /// Returns `Ok(false)` for a wrong password. The comparison is done by
    /// bcrypt in constant time. A password too long to have been hashed
    /// never matches.
    ///
    /// # Errors
    ///
    /// `AuthError::MalformedDigest` if `digest` is not a bcrypt string.
    pub fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, AuthError> {
        match bcrypt::non_truncating_verify(plaintext, digest) {
            Ok(valid) => Ok(valid),
            Err(BcryptError::Truncation(_)) => Ok(false),
            Err(err) => Err(AuthError::MalformedDigest(err)),
        }
    }
}
