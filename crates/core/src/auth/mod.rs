//! Password hashing for user credentials.
//!
//! Passwords are hashed with Argon2id and kept in PHC string form. The
//! plaintext is never stored.

mod password;

pub use password::{HashedPassword, PasswordError};
