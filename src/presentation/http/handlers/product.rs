//! Product Handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::dto::request::{CreateProductRequest, UpdateProductRequest};
use crate::application::dto::response::ProductResponse;
use crate::application::services::{
    ProductError, ProductService, ProductServiceImpl, UpdateProductDto,
};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// List all products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let service = ProductServiceImpl::new(state.products.clone());

    let products = service.list().await.map_err(map_product_error)?;

    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// Create a new product
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Validate request
    body.validate().map_err(validation_error)?;

    let service = ProductServiceImpl::new(state.products.clone());

    let product = service
        .add(body.name, body.price)
        .await
        .map_err(map_product_error)?;

    let location = format!("/api/products/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ProductResponse::from(product)),
    ))
}

/// Get product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ProductResponse>, AppError> {
    let product_id: Uuid = product_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid product ID".into()))?;

    let service = ProductServiceImpl::new(state.products.clone());

    let product = service.get(product_id).await.map_err(map_product_error)?;

    Ok(Json(ProductResponse::from(product)))
}

/// Update product
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let product_id: Uuid = product_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid product ID".into()))?;

    // Validate request
    body.validate().map_err(validation_error)?;

    let service = ProductServiceImpl::new(state.products.clone());

    let update = UpdateProductDto {
        name: body.name,
        price: body.price,
    };

    let product = service
        .update(product_id, update)
        .await
        .map_err(map_product_error)?;

    Ok(Json(ProductResponse::from(product)))
}

/// Delete product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let product_id: Uuid = product_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid product ID".into()))?;

    let service = ProductServiceImpl::new(state.products.clone());

    service.remove(product_id).await.map_err(map_product_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Translate service errors to the HTTP error taxonomy.
fn map_product_error(e: ProductError) -> AppError {
    match e {
        ProductError::NotFound => AppError::NotFound("Product not found".into()),
        ProductError::Validation(msg) => AppError::Validation(msg),
        ProductError::Internal(msg) => AppError::Internal(msg),
    }
}
