//! Product Service
//!
//! Orchestrates repository calls and maps entities to transfer objects.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{NewProduct, Product, ProductRepository};

/// Product service trait
#[async_trait]
pub trait ProductService: Send + Sync {
    /// List all products in store order
    async fn list(&self) -> Result<Vec<ProductDto>, ProductError>;

    /// Get a product by ID
    async fn get(&self, id: Uuid) -> Result<ProductDto, ProductError>;

    /// Add a new product; the store assigns its identity
    async fn add(&self, name: String, price: Decimal) -> Result<ProductDto, ProductError>;

    /// Update an existing product
    async fn update(&self, id: Uuid, update: UpdateProductDto) -> Result<ProductDto, ProductError>;

    /// Remove a product
    async fn remove(&self, id: Uuid) -> Result<(), ProductError>;
}

/// Product data transfer object
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDto {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            created_at: product.created_at,
        }
    }
}

/// Update product request
#[derive(Debug, Clone, Default)]
pub struct UpdateProductDto {
    pub name: Option<String>,
    pub price: Option<Decimal>,
}

/// Product service errors
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// ProductService implementation
pub struct ProductServiceImpl<R>
where
    R: ProductRepository + ?Sized,
{
    repo: Arc<R>,
}

impl<R> ProductServiceImpl<R>
where
    R: ProductRepository + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ProductService for ProductServiceImpl<R>
where
    R: ProductRepository + ?Sized + 'static,
{
    async fn list(&self) -> Result<Vec<ProductDto>, ProductError> {
        let products = self
            .repo
            .find_all()
            .await
            .map_err(|e| ProductError::Internal(e.to_string()))?;

        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<ProductDto, ProductError> {
        let product = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| ProductError::Internal(e.to_string()))?
            .ok_or(ProductError::NotFound)?;

        Ok(ProductDto::from(product))
    }

    async fn add(&self, name: String, price: Decimal) -> Result<ProductDto, ProductError> {
        let draft = NewProduct { name, price };

        let created = self
            .repo
            .insert(&draft)
            .await
            .map_err(|e| ProductError::Internal(e.to_string()))?;

        Ok(ProductDto::from(created))
    }

    async fn update(&self, id: Uuid, update: UpdateProductDto) -> Result<ProductDto, ProductError> {
        let mut product = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| ProductError::Internal(e.to_string()))?
            .ok_or(ProductError::NotFound)?;

        // Apply updates
        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(price) = update.price {
            product.price = price;
        }

        let updated = self
            .repo
            .update(&product)
            .await
            .map_err(|e| ProductError::Internal(e.to_string()))?;

        Ok(ProductDto::from(updated))
    }

    async fn remove(&self, id: Uuid) -> Result<(), ProductError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| ProductError::Internal(e.to_string()))?
            .ok_or(ProductError::NotFound)?;

        self.repo
            .delete(id)
            .await
            .map_err(|e| ProductError::Internal(e.to_string()))?;

        Ok(())
    }
}
