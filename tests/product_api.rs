//! HTTP-level tests for `HttpProductClient` against a mock server.
//!
//! Each test pins down the request the client sends (method, path, query,
//! headers, body) and how the canned response is mapped back.

use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

use storefront::api::{ApiError, HttpProductClient, ProductApi};
use storefront::config::ApiConfig;
use storefront::models::{ErrorCode, NewProduct, ProductQuery};

const TOKEN: &str = "valid_jwt_token";

fn client(server: &MockServer, token: Option<&str>) -> HttpProductClient {
    let config = ApiConfig {
        base_url: server.url("/api"),
        token: token.map(str::to_string),
        timeout_secs: 5,
    };
    HttpProductClient::new(&config).expect("client should build")
}

// ---------------------------------------------------------------------------
// GET /products
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_products_without_params() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET)
                .path("/api/products")
                .query_param_missing("category")
                .query_param_missing("limit")
                .query_param_missing("offset");
            then.status(200).json_body(json!({
                "products": [{
                    "id": "12345",
                    "name": "Wireless Headphones",
                    "price": 199.99,
                    "category": "electronics"
                }],
                "total": 150,
                "limit": 20,
                "offset": 0
            }));
        })
        .await;

    let page = client(&server, None)
        .list_products(&ProductQuery::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.total, 150);
    assert_eq!(page.limit, 20);
    assert_eq!(page.offset, 0);
    assert_eq!(page.products.len(), 1);
    assert_eq!(page.products[0].name, "Wireless Headphones");
}

#[tokio::test]
async fn list_products_with_category_filter() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET)
                .path("/api/products")
                .query_param("category", "electronics");
            then.status(200).json_body(json!({
                "products": [],
                "total": 50,
                "limit": 20,
                "offset": 0
            }));
        })
        .await;

    let query = ProductQuery {
        category: Some("electronics".into()),
        ..ProductQuery::default()
    };
    let page = client(&server, None).list_products(&query).await.unwrap();

    mock.assert_async().await;
    assert!(page.products.is_empty());
    assert_eq!(page.total, 50);
}

#[tokio::test]
async fn list_products_limit_above_max_is_validation_error() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET)
                .path("/api/products")
                .query_param("limit", "101");
            then.status(400).json_body(json!({
                "error": "VALIDATION_ERROR",
                "message": "Limit cannot exceed 100"
            }));
        })
        .await;

    let query = ProductQuery {
        limit: Some(101),
        ..ProductQuery::default()
    };
    let err = client(&server, None).list_products(&query).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.status(), Some(400));
    match err {
        ApiError::Validation(body) => {
            assert_eq!(body.code(), ErrorCode::Validation);
            assert_eq!(body.message, "Limit cannot exceed 100");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn list_products_sends_pagination_params() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET)
                .path("/api/products")
                .query_param("limit", "10")
                .query_param("offset", "40");
            then.status(200).json_body(json!({
                "products": [],
                "total": 45,
                "limit": 10,
                "offset": 40
            }));
        })
        .await;

    let query = ProductQuery {
        category: None,
        limit: Some(10),
        offset: Some(40),
    };
    let page = client(&server, None).list_products(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.offset, 40);
}

// ---------------------------------------------------------------------------
// POST /products
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_product_success() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/api/products")
                .header("authorization", "Bearer valid_jwt_token")
                .header("content-type", "application/json")
                .json_body(json!({
                    "name": "Test Product",
                    "description": "A test product",
                    "price": 99.99,
                    "category": "electronics",
                    "stock": 10
                }));
            then.status(201).json_body(json!({
                "id": "54321",
                "name": "Test Product",
                "description": "A test product",
                "price": 99.99,
                "category": "electronics",
                "stock": 10,
                "createdAt": "2024-01-15T10:30:00Z"
            }));
        })
        .await;

    let payload = NewProduct::new("Test Product", 99.99)
        .description("A test product")
        .category("electronics")
        .stock(10);
    let created = client(&server, Some(TOKEN))
        .create_product(&payload)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(created.id, "54321");
    assert_eq!(created.name, "Test Product");
    assert_eq!(created.stock, Some(10));
    assert_eq!(created.created_at.as_deref(), Some("2024-01-15T10:30:00Z"));
}

#[tokio::test]
async fn create_product_without_token_is_unauthorized() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/api/products")
                .header_missing("authorization");
            then.status(401).json_body(json!({
                "error": "UNAUTHORIZED",
                "message": "Authentication required"
            }));
        })
        .await;

    let payload = NewProduct::new("Test Product", 99.99).category("electronics");
    let err = client(&server, None)
        .create_product(&payload)
        .await
        .unwrap_err();

    mock.assert_async().await;
    match err {
        ApiError::Unauthorized(body) => assert_eq!(body.message, "Authentication required"),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn create_product_missing_required_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/api/products")
                .header("authorization", "Bearer valid_jwt_token")
                .json_body(json!({"description": "Missing required fields"}));
            then.status(400).json_body(json!({
                "error": "VALIDATION_ERROR",
                "message": "Missing required fields",
                "details": [
                    {"field": "name", "message": "Name is required"},
                    {"field": "price", "message": "Price is required"}
                ]
            }));
        })
        .await;

    let payload = NewProduct {
        description: Some("Missing required fields".into()),
        ..NewProduct::default()
    };
    let err = client(&server, Some(TOKEN))
        .create_product(&payload)
        .await
        .unwrap_err();

    mock.assert_async().await;
    let body = err.body().expect("validation errors carry a body");
    assert_eq!(body.code(), ErrorCode::Validation);
    let fields: Vec<_> = body.details.iter().map(|d| d.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "price"]);
    assert_eq!(body.details[0].message, "Name is required");
}

// ---------------------------------------------------------------------------
// GET /products/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_product_by_id() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/api/products/12345");
            then.status(200).json_body(json!({
                "id": "12345",
                "name": "Wireless Headphones",
                "price": 199.99,
                "category": "electronics"
            }));
        })
        .await;

    let product = client(&server, None).get_product("12345").await.unwrap();

    mock.assert_async().await;
    assert_eq!(product.id, "12345");
    assert_eq!(product.price, 199.99);
}

#[tokio::test]
async fn get_product_not_found() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/api/products/nonexistent");
            then.status(404).json_body(json!({
                "error": "NOT_FOUND",
                "message": "Product not found"
            }));
        })
        .await;

    let err = client(&server, None)
        .get_product("nonexistent")
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, ApiError::NotFound(_)));
    assert_eq!(err.status(), Some(404));
}

// ---------------------------------------------------------------------------
// Response mapping edge cases
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unexpected_status_with_plain_text_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/api/products/12345");
            then.status(503).body("upstream unavailable");
        })
        .await;

    let err = client(&server, None).get_product("12345").await.unwrap_err();

    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body.error, "HTTP_503");
            assert_eq!(body.message, "upstream unavailable");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/api/products/12345");
            then.status(200).json_body(json!({"id": "12345"}));
        })
        .await;

    let err = client(&server, None).get_product("12345").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let config = ApiConfig {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        base_url: "http://127.0.0.1:9/api".to_string(),
        token: None,
        timeout_secs: 2,
    };
    let client = HttpProductClient::new(&config).unwrap();
    let err = client.get_product("12345").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}
