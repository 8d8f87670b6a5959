//! Response DTOs
//!
//! Data structures for API response bodies.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::application::services::ProductDto;

/// Product response
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub created_at: String,
}

impl From<ProductDto> for ProductResponse {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            price: dto.price,
            created_at: dto.created_at.to_rfc3339(),
        }
    }
}
