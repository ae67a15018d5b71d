//! storefront: arithmetic helpers and a products API client (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod api;
pub mod calculator;
pub mod commands;
pub mod config;
pub mod constants;
pub mod env;
pub mod models;
pub mod output;
