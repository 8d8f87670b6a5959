//! Product API Tests
//!
//! End-to-end tests for the product CRUD endpoints, driven through the
//! full router with an in-memory repository.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{response_json, TestApp};

#[tokio::test]
async fn test_list_on_empty_store_returns_empty_array() {
    let app = TestApp::new().await;

    let response = app.get("/api/products").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_returns_201_with_location_and_body() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/api/products", r#"{"name":"Widget","price":9.99}"#)
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get("location")
        .expect("Location header missing")
        .to_str()
        .unwrap()
        .to_owned();

    let body = response_json(response).await;
    let id = body["id"].as_str().expect("id missing");

    assert!(!id.is_empty());
    assert_eq!(location, format!("/api/products/{}", id));
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["price"], json!(9.99));
}

#[tokio::test]
async fn test_created_product_appears_in_list() {
    let app = TestApp::new().await;

    let created = app
        .post_json("/api/products", r#"{"name":"Widget","price":9.99}"#)
        .await;
    let created_body = response_json(created).await;

    let response = app.get("/api/products").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let items = body.as_array().unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], created_body["id"]);
    assert_eq!(items[0]["name"], "Widget");
    assert_eq!(items[0]["price"], json!(9.99));
}

#[tokio::test]
async fn test_list_after_two_creates_contains_both() {
    let app = TestApp::new().await;

    app.post_json("/api/products", r#"{"name":"Widget","price":9.99}"#)
        .await;
    app.post_json("/api/products", r#"{"name":"Gadget","price":12.50}"#)
        .await;

    let response = app.get("/api/products").await;
    let body = response_json(response).await;
    let items = body.as_array().unwrap();

    assert_eq!(items.len(), 2);
    let names: Vec<_> = items.iter().map(|i| i["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"Widget"));
    assert!(names.contains(&"Gadget"));
}

#[tokio::test]
async fn test_get_by_id_returns_created_product() {
    let app = TestApp::new().await;

    let created = app
        .post_json("/api/products", r#"{"name":"Widget","price":9.99}"#)
        .await;
    let created_body = response_json(created).await;
    let id = created_body["id"].as_str().unwrap();

    let response = app.get(&format!("/api/products/{}", id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["id"], created_body["id"]);
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["price"], json!(9.99));
}

#[tokio::test]
async fn test_get_missing_product_returns_404() {
    let app = TestApp::new().await;

    let response = app
        .get("/api/products/00000000-0000-0000-0000-000000000000")
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_with_malformed_id_returns_400() {
    let app = TestApp::new().await;

    let response = app.get("/api/products/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_with_negative_price_returns_400() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/api/products", r#"{"name":"Widget","price":-1.00}"#)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_with_empty_name_returns_400() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/api/products", r#"{"name":"","price":9.99}"#)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_with_zero_price_is_allowed() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/api/products", r#"{"name":"Freebie","price":0}"#)
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_update_changes_name_and_keeps_price() {
    let app = TestApp::new().await;

    let created = app
        .post_json("/api/products", r#"{"name":"Widget","price":9.99}"#)
        .await;
    let created_body = response_json(created).await;
    let id = created_body["id"].as_str().unwrap().to_owned();

    let response = app
        .put_json(
            &format!("/api/products/{}", id),
            r#"{"name":"Widget Pro"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["id"].as_str().unwrap(), id);
    assert_eq!(body["name"], "Widget Pro");
    assert_eq!(body["price"], json!(9.99));
}

#[tokio::test]
async fn test_update_missing_product_returns_404() {
    let app = TestApp::new().await;

    let response = app
        .put_json(
            "/api/products/00000000-0000-0000-0000-000000000000",
            r#"{"name":"Ghost"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_removes_product() {
    let app = TestApp::new().await;

    let created = app
        .post_json("/api/products", r#"{"name":"Widget","price":9.99}"#)
        .await;
    let created_body = response_json(created).await;
    let id = created_body["id"].as_str().unwrap().to_owned();

    let response = app.delete(&format!("/api/products/{}", id)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.get(&format!("/api/products/{}", id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_product_returns_404() {
    let app = TestApp::new().await;

    let response = app
        .delete("/api/products/00000000-0000-0000-0000-000000000000")
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
