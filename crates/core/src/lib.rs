//! Domain entities for the catalog service.
//!
//! This crate contains pure domain logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `product` - Product entity, validation, and partial updates
//! - `user` - User entity and password comparison
//! - `auth` - Argon2id password hashing

pub mod auth;
pub mod product;
pub mod user;

pub use product::{Product, ProductChanges, ProductError};
pub use user::{User, UserError};
