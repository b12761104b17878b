//! Password hashing and verification utilities
//!
//! Argon2id with a random salt per hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use booking_core::DomainError;

use crate::error::AppError;

const MIN_PASSWORD_LEN: usize = 8;
const MAX_PASSWORD_LEN: usize = 128;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash
///
/// # Errors
/// Returns an error if the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// # Errors
    /// Returns an error if the password is too weak or hashing fails
    pub fn hash_new(&self, password: &str) -> Result<String, AppError> {
        validate_password_strength(password)?;
        hash_password(password)
    }

    /// Verify a password and return an error if invalid
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the password doesn't match
    pub fn verify_or_error(&self, password: &str, hash: &str) -> Result<(), AppError> {
        if verify_password(password, hash)? {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

/// Validate password strength
///
/// Requires 8 to 128 characters with at least one letter and one digit.
///
/// # Errors
/// Returns `DomainError::WeakPassword` naming the first unmet rule
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    let length = password.chars().count();
    let rules: [(bool, &str); 4] = [
        (length >= MIN_PASSWORD_LEN, "must be at least 8 characters long"),
        (length <= MAX_PASSWORD_LEN, "must be at most 128 characters long"),
        (password.chars().any(char::is_alphabetic), "must contain a letter"),
        (password.chars().any(|c| c.is_ascii_digit()), "must contain a digit"),
    ];

    match rules.iter().find(|(ok, _)| !ok) {
        Some((_, rule)) => Err(DomainError::WeakPassword(format!("Password {rule}")).into()),
        None => Ok(()),
    }
}
