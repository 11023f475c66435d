//! User entity.

use catalog_shared::types::UserId;
use serde::Serialize;
use thiserror::Error;

use crate::auth::{HashedPassword, PasswordError};

/// User validation errors.
#[derive(Debug, Error)]
pub enum UserError {
    /// Name is empty.
    #[error("Name is required")]
    NameRequired,

    /// Email is empty.
    #[error("Email is required")]
    EmailRequired,

    /// Password is empty.
    #[error("Password is required")]
    PasswordRequired,

    /// Hashing the password failed.
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// A registered user. The password is only ever held as a hash and is never
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, unique.
    pub email: String,
    /// Argon2id hash of the password.
    #[serde(skip_serializing)]
    pub password: HashedPassword,
}

impl User {
    /// Creates a user, hashing the plaintext password.
    ///
    /// # Errors
    ///
    /// Returns a `UserError` if a field is empty or hashing fails.
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, UserError> {
        if name.trim().is_empty() {
            return Err(UserError::NameRequired);
        }
        let email = Self::normalize_email(email);
        if email.is_empty() {
            return Err(UserError::EmailRequired);
        }
        if password.is_empty() {
            return Err(UserError::PasswordRequired);
        }

        Ok(Self {
            id: UserId::new(),
            name: name.to_string(),
            email: email.to_string(),
            password: HashedPassword::from_plaintext(password)?,
        })
    }

    /// Canonical form of an email, used both when storing and looking up.
    #[must_use]
    pub fn normalize_email(email: &str) -> &str {
        email.trim()
    }

    /// Compares a plaintext password with the stored hash.
    ///
    /// # Errors
    ///
    /// Returns a `PasswordError` if the stored hash cannot be read.
    pub fn compare_password(&self, password: &str) -> Result<bool, PasswordError> {
        self.password.verify(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new("John Doe", "j@j.com", "123456").unwrap();

        assert!(!user.id.is_nil());
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "j@j.com");
        assert!(!user.password.as_str().is_empty());
        assert_ne!(user.password.as_str(), "123456");
    }

    #[test]
    fn test_email_is_stored_normalized() {
        let user = User::new("John Doe", "  j@j.com ", "123456").unwrap();

        assert_eq!(user.email, "j@j.com");
        assert_eq!(User::normalize_email("  j@j.com "), user.email);
    }

    #[test]
    fn test_compare_password() {
        let user = User::new("John Doe", "j@j.com", "123456").unwrap();

        assert!(user.compare_password("123456").unwrap());
        assert!(!user.compare_password("1234567").unwrap());
    }

    #[test]
    fn test_required_fields() {
        assert!(matches!(
            User::new("", "j@j.com", "123456"),
            Err(UserError::NameRequired)
        ));
        assert!(matches!(
            User::new("John", " ", "123456"),
            Err(UserError::EmailRequired)
        ));
        assert!(matches!(
            User::new("John", "j@j.com", ""),
            Err(UserError::PasswordRequired)
        ));
    }

    #[test]
    fn test_password_not_serialized() {
        let user = User::new("John Doe", "j@j.com", "123456").unwrap();
        let value = serde_json::to_value(&user).unwrap();

        assert!(value.get("password").is_none());
        assert_eq!(value["email"], "j@j.com");
    }
}
