//! JSON output renderer.
//!
//! Products and pages are printed in their wire shape so the output can be
//! piped back into other tools.

use crate::calculator::Operation;
use crate::models::{Product, ProductPage};
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render_product(&self, product: &Product) -> String {
        serde_json::to_string_pretty(product).unwrap_or_else(|_| "{}".to_string())
    }

    fn render_page(&self, page: &ProductPage) -> String {
        serde_json::to_string_pretty(page).unwrap_or_else(|_| "{}".to_string())
    }

    fn render_calculation(&self, op: Operation, a: f64, b: f64, result: f64) -> String {
        let output = serde_json::json!({
            "operation": op.to_string(),
            "a": a,
            "b": b,
            "result": result,
        });
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
