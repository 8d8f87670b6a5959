//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! This module provides concrete implementations of the repository traits
//! defined in the domain layer.
//!
//! ## Available Repositories
//!
//! - **ProductRepository** - Product catalog storage (uses the "products" table)

pub mod product_repository;

// Re-export repository structs for convenience
pub use product_repository::PgProductRepository;
