//! Request DTOs
//!
//! Data structures for API request bodies.

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Create product request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(custom(function = validate_price))]
    pub price: Decimal,
}

/// Update product request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(custom(function = validate_price))]
    pub price: Option<Decimal>,
}

/// Prices must not be negative; zero is allowed (free products).
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        let mut err = ValidationError::new("negative_price");
        err.message = Some("Price must not be negative".into());
        return Err(err);
    }
    Ok(())
}
