//! Product entity and repository trait.
//!
//! Maps to the `products` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Represents a product in the catalog.
///
/// Maps to the `products` table:
/// - id: UUID PRIMARY KEY DEFAULT gen_random_uuid()
/// - name: VARCHAR(200) NOT NULL
/// - price: NUMERIC(12, 2) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Identity assigned by the store; immutable once set
    pub id: Uuid,

    /// Product name (1-200 characters)
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// A product before the store has assigned it an identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
}

impl Product {
    /// Check if the product is free of charge.
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }
}

/// Repository trait for Product data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch all products in store order.
    async fn find_all(&self) -> Result<Vec<Product>, AppError>;

    /// Find a product by its ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, AppError>;

    /// Persist a new product; the store assigns its identity.
    async fn insert(&self, product: &NewProduct) -> Result<Product, AppError>;

    /// Update an existing product.
    async fn update(&self, product: &Product) -> Result<Product, AppError>;

    /// Delete a product.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}
