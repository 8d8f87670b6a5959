//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use chrono::Utc;
use parking_lot::Mutex;
use tower::ServiceExt;
use uuid::Uuid;

use product_catalog::config::{CorsSettings, DatabaseSettings, ServerSettings, Settings};
use product_catalog::domain::{NewProduct, Product, ProductRepository};
use product_catalog::presentation::http::routes;
use product_catalog::shared::error::AppError;
use product_catalog::startup::AppState;

/// In-memory repository standing in for PostgreSQL in integration tests.
///
/// Preserves insertion order, matching the store ordering guarantee of
/// the real repository.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.products.lock().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, AppError> {
        Ok(self.products.lock().iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, AppError> {
        let now = Utc::now();
        let stored = Product {
            id: Uuid::new_v4(),
            name: product.name.clone(),
            price: product.price,
            created_at: now,
            updated_at: now,
        };
        self.products.lock().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, product: &Product) -> Result<Product, AppError> {
        let mut products = self.products.lock();
        let entry = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Product with id {} not found", product.id))
            })?;

        entry.name = product.name.clone();
        entry.price = product.price;
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut products = self.products.lock();
        let before = products.len();
        products.retain(|p| p.id != id);

        if products.len() == before {
            return Err(AppError::NotFound(format!(
                "Product with id {} not found",
                id
            )));
        }
        Ok(())
    }
}

/// Settings fixture that never touches the environment or config files.
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "postgres://localhost/unused".into(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout: 5,
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        environment: "test".into(),
    }
}

/// Test application builder
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a new test application backed by an in-memory repository
    pub async fn new() -> Self {
        let state = AppState {
            products: Arc::new(InMemoryProductRepository::default()),
            settings: Arc::new(test_settings()),
        };

        Self {
            router: routes::create_router(state),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Read a response body as JSON
pub async fn response_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
