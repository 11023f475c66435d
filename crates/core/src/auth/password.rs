//! Password hashing with Argon2id.

use argon2::{
    Argon2, PasswordHash,
    password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Failed to hash password.
    #[error("failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password.
    #[error("failed to verify password: {0}")]
    VerifyError(String),

    /// Invalid password hash format.
    #[error("invalid password hash format")]
    InvalidHash,
}

/// A one-way password hash in PHC string format.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashedPassword(String);

impl std::fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HashedPassword([hidden])")
    }
}

impl HashedPassword {
    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns `PasswordError::HashError` if hashing fails.
    ///
    /// # Example
    ///
    /// ```
    /// use catalog_core::auth::HashedPassword;
    ///
    /// let hash = HashedPassword::from_plaintext("my_secure_password").unwrap();
    /// assert!(hash.as_str().starts_with("$argon2id$"));
    /// ```
    pub fn from_plaintext(password: &str) -> Result<Self, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| Self(hash.to_string()))
            .map_err(|e| PasswordError::HashError(e.to_string()))
    }

    /// Wraps a hash loaded from storage without re-hashing it.
    #[must_use]
    pub const fn from_stored(hash: String) -> Self {
        Self(hash)
    }

    /// Returns the PHC string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the PHC string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Checks a plaintext password against this hash.
    ///
    /// Returns `Ok(false)` on a mismatch.
    ///
    /// # Errors
    ///
    /// Returns `PasswordError::InvalidHash` if the stored hash is malformed.
    /// Returns `PasswordError::VerifyError` if verification fails unexpectedly.
    ///
    /// # Example
    ///
    /// ```
    /// use catalog_core::auth::HashedPassword;
    ///
    /// let hash = HashedPassword::from_plaintext("my_password").unwrap();
    /// assert!(hash.verify("my_password").unwrap());
    /// assert!(!hash.verify("wrong_password").unwrap());
    /// ```
    pub fn verify(&self, password: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(&self.0).map_err(|_| PasswordError::InvalidHash)?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerifyError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_phc_argon2id() {
        let password = "test_password_123!";
        let hash = HashedPassword::from_plaintext(password).unwrap();

        assert!(hash.as_str().starts_with("$argon2id$"));
        assert_ne!(hash.as_str(), password);
    }

    #[test]
    fn test_verify_correct_and_wrong_password() {
        let hash = HashedPassword::from_plaintext("correct_password").unwrap();

        assert!(hash.verify("correct_password").unwrap());
        assert!(!hash.verify("wrong_password").unwrap());
    }

    #[test]
    fn test_same_password_different_salts() {
        let hash1 = HashedPassword::from_plaintext("password1").unwrap();
        let hash2 = HashedPassword::from_plaintext("password1").unwrap();

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_stored_hash_still_verifies() {
        let original = HashedPassword::from_plaintext("stored").unwrap();
        let reloaded = HashedPassword::from_stored(original.clone().into_inner());

        assert!(reloaded.verify("stored").unwrap());
    }

    #[test]
    fn test_invalid_hash_format() {
        let result = HashedPassword::from_stored("invalid_hash".to_string()).verify("password");
        assert!(matches!(result, Err(PasswordError::InvalidHash)));
    }

    #[test]
    fn test_debug_hides_hash() {
        let hash = HashedPassword::from_plaintext("secret").unwrap();
        assert_eq!(format!("{hash:?}"), "HashedPassword([hidden])");
    }
}
