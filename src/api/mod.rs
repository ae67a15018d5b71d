//! ProductApi trait and HTTP integration.
//!
//! Callers depend on the trait so that the reqwest-backed client can be
//! swapped for a test double.

pub mod http;

pub use http::HttpProductClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ApiErrorBody, NewProduct, Product, ProductPage, ProductQuery};

/// Errors from the products API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("validation failed ({0})")]
    Validation(ApiErrorBody),

    #[error("unauthorized ({0})")]
    Unauthorized(ApiErrorBody),

    #[error("not found ({0})")]
    NotFound(ApiErrorBody),

    #[error("API returned HTTP {status} ({body})")]
    Status { status: u16, body: ApiErrorBody },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// HTTP status behind this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Validation(_) => Some(400),
            ApiError::Unauthorized(_) => Some(401),
            ApiError::NotFound(_) => Some(404),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error payload sent by the server, if any.
    pub fn body(&self) -> Option<&ApiErrorBody> {
        match self {
            ApiError::Validation(body)
            | ApiError::Unauthorized(body)
            | ApiError::NotFound(body)
            | ApiError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Operations exposed by the products API.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// `GET /products` with the given filters.
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage, ApiError>;

    /// `POST /products`. Authenticated with the configured bearer token.
    async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError>;

    /// `GET /products/{id}`.
    async fn get_product(&self, id: &str) -> Result<Product, ApiError>;
}
