//! Product resources exchanged with the products API.

use serde::{Deserialize, Serialize};

/// A product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    /// RFC 3339 timestamp, set by the server on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Payload for `POST /products`.
///
/// Every field is optional on the wire so that incomplete payloads can be
/// sent as-is; the server is the one that rejects a missing `name` or
/// `price` with a validation error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

impl NewProduct {
    /// Start a payload with the two fields the server requires.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }
}

/// One page of `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

/// Optional filters for `GET /products`.
///
/// Values are forwarded verbatim; range checks (e.g. the maximum `limit`)
/// belong to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ProductQuery {
    /// Query-string pairs for the parameters that are set, in a fixed order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref category) = self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}
