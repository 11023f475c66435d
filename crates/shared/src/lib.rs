//! Shared types, errors, and configuration for the catalog service.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - List request types (pagination and sort order)
//! - Application-wide error types
//! - Configuration management
//! - JWT issuance and validation

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::Claims;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use jwt::{JwtConfig, JwtError, JwtService};
