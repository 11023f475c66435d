//! Product entity and its invariants.

use catalog_shared::types::ProductId;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Product validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProductError {
    /// A textual id did not parse as a UUID.
    #[error("Invalid ID")]
    InvalidId,

    /// The id is the nil UUID.
    #[error("ID is required")]
    IdRequired,

    /// Name is empty or whitespace.
    #[error("Name is required")]
    NameRequired,

    /// Price is zero.
    #[error("Price is required")]
    PriceRequired,

    /// Price is negative or not a finite number.
    #[error("Invalid price")]
    InvalidPrice,
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price, strictly positive.
    pub price: f64,
    /// Creation time, RFC 3339 UTC with nanoseconds.
    pub created_at: String,
}

impl Product {
    /// Creates a validated product with a fresh id and the current time.
    ///
    /// # Errors
    ///
    /// Returns the first invariant the product violates.
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self, ProductError> {
        let product = Self {
            id: ProductId::new(),
            name: name.into(),
            price,
            created_at: timestamp_now(),
        };
        product.validate()?;
        Ok(product)
    }

    /// Checks the product invariants.
    ///
    /// # Errors
    ///
    /// Returns the first invariant the product violates.
    #[allow(clippy::float_cmp)]
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_nil() {
            return Err(ProductError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        if self.price == 0.0 {
            return Err(ProductError::PriceRequired);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ProductError::InvalidPrice);
        }
        Ok(())
    }

    /// Parses a product id from a path segment.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::IdRequired` for an empty string and
    /// `ProductError::InvalidId` for anything that is not a UUID.
    pub fn parse_id(raw: &str) -> Result<ProductId, ProductError> {
        if raw.trim().is_empty() {
            return Err(ProductError::IdRequired);
        }
        ProductId::parse(raw.trim()).map_err(|_| ProductError::InvalidId)
    }

    /// Applies a partial update in place.
    ///
    /// Only a non-empty name and a non-zero price overwrite the current
    /// values; the result is validated.
    ///
    /// # Errors
    ///
    /// Returns the first invariant the updated product violates. The product
    /// is left modified in that case.
    #[allow(clippy::float_cmp)]
    pub fn apply(&mut self, changes: ProductChanges) -> Result<(), ProductError> {
        if let Some(name) = changes.name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        if let Some(price) = changes.price.filter(|p| *p != 0.0) {
            self.price = price;
        }
        self.validate()
    }
}

/// Partial update for a product. Empty strings and zero count as "not given".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductChanges {
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New price.
    #[serde(default)]
    pub price: Option<f64>,
}

/// Current UTC time in the fixed-width form stored in `created_at`.
#[must_use]
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true)
}
