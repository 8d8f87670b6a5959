//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ProductService**: Product catalog CRUD operations

pub mod product_service;

// Re-export product service types
pub use product_service::{
    ProductDto, ProductError, ProductService, ProductServiceImpl, UpdateProductDto,
};
