//! Repository abstractions for data access.
//!
//! Handlers talk to the `ProductStore` and `UserStore` traits; the `SeaORM`
//! repositories in this module are the implementations used in production
//! and in tests (against in-memory SQLite).

pub mod product;
pub mod user;

pub use product::ProductRepository;
pub use user::UserRepository;

use async_trait::async_trait;
use catalog_core::{Product, User};
use catalog_shared::types::{PageRequest, ProductId};
use sea_orm::{DbErr, SqlErr};

/// Error types for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row matched.
    #[error("{0} not found")]
    NotFound(String),

    /// A unique constraint was violated.
    #[error("{0} already exists")]
    Conflict(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl StoreError {
    /// Classifies an insert failure, turning unique violations into `Conflict`.
    fn on_insert(err: DbErr, what: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(what.to_string()),
            _ => Self::Database(err),
        }
    }
}

/// Data access for products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Inserts a new product.
    async fn create(&self, product: &Product) -> Result<(), StoreError>;

    /// Fetches a product by id.
    async fn get_by_id(&self, id: ProductId) -> Result<Product, StoreError>;

    /// Overwrites every field of product `id` with `product`.
    async fn update(&self, id: ProductId, product: &Product) -> Result<(), StoreError>;

    /// Deletes product `id`.
    async fn delete(&self, id: ProductId) -> Result<(), StoreError>;

    /// Lists products ordered by creation time, optionally paginated.
    async fn get_all(&self, request: PageRequest) -> Result<Vec<Product>, StoreError>;
}

/// Data access for users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a new user. A duplicate email is a `Conflict`.
    async fn create(&self, user: &User) -> Result<(), StoreError>;

    /// Looks a user up by email.
    async fn get_by_email(&self, email: &str) -> Result<User, StoreError>;
}
