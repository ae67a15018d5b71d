//! Shared types for the products API.
//!
//! The client, the command layer and the renderers all import from here
//! rather than reaching into each other's internals.

pub mod error;
pub mod product;

pub use error::{ApiErrorBody, ErrorCode, FieldError};
pub use product::{NewProduct, Product, ProductPage, ProductQuery};
