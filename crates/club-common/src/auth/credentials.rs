//! Credential hashing for the local identity provider
//!
//! Uses Argon2id with a random salt per account.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use club_core::AuthError;

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash
///
/// # Errors
/// Returns an error if the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Credential checks used when creating accounts and signing in
#[derive(Debug, Clone, Copy)]
pub struct CredentialHasher {
    min_password_length: usize,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new(club_core::validation::MIN_PASSWORD_LEN)
    }
}

impl CredentialHasher {
    #[must_use]
    pub fn new(min_password_length: usize) -> Self {
        Self {
            min_password_length,
        }
    }

    /// Reject passwords shorter than the configured minimum
    pub fn check_strength(&self, password: &str) -> Result<(), AuthError> {
        if password.chars().count() < self.min_password_length {
            return Err(AuthError::WeakPassword {
                min: self.min_password_length,
            });
        }
        Ok(())
    }

    /// Check strength, then hash
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        self.check_strength(password)?;
        hash_password(password)
    }

    /// Verify a password and map a mismatch to `AuthError::WrongPassword`
    pub fn verify_or_error(&self, password: &str, hash: &str) -> Result<(), AppError> {
        if verify_password(password, hash)? {
            Ok(())
        } else {
            Err(AuthError::WrongPassword.into())
        }
    }
}
