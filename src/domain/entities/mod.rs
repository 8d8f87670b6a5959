//! # Domain Entities
//!
//! Core domain entities representing the business objects of the catalog.
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod product;

// Re-export Product entity and related types
pub use product::{NewProduct, Product, ProductRepository};

#[cfg(test)]
pub use product::MockProductRepository;
