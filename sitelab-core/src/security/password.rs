//! Password hashing for user records
//!
//! Uses Argon2id (OWASP recommended) with a random salt per hash.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;

/// Argon2id password hasher
pub struct PasswordHasherService {
    argon2: Argon2<'static>,
}

impl Default for PasswordHasherService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherService {
    /// Hasher with the default Argon2id parameters (19 MiB, t=2, p=1)
    pub fn new() -> Self {
        Self { argon2: Argon2::default() }
    }

    /// Hash a password into PHC string format
    ///
    /// Example output: `$argon2id$v=19$m=19456,t=2,p=1$salt$hash`
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        Ok(password_hash.to_string())
    }

    /// Verify a password against a stored PHC hash
    ///
    /// A mismatch is `Ok(false)`; only a malformed hash or an internal
    /// failure is an error.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::InvalidHash(e.to_string()))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

/// Password-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
    #[error("Invalid password hash: {0}")]
    InvalidHash(String),
    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}

/// Hash with a default [`PasswordHasherService`]
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    PasswordHasherService::new().hash_password(password)
}

/// Verify with a default [`PasswordHasherService`]
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    PasswordHasherService::new().verify_password(password, hash)
}
