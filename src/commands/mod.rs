//! Operations behind each CLI subcommand.
//!
//! Each function talks to a `&dyn ProductApi` and returns the rendered
//! output, leaving printing and exit codes to the binary.

use crate::api::{ApiError, ProductApi};
use crate::calculator::{self, CalculatorError, Operation};
use crate::models::{NewProduct, ProductQuery};
use crate::output::OutputFormat;

/// `storefront products list`.
pub async fn list_products(
    api: &dyn ProductApi,
    query: &ProductQuery,
    format: OutputFormat,
) -> Result<String, ApiError> {
    let page = api.list_products(query).await?;
    Ok(format.renderer().render_page(&page))
}

/// `storefront products get <id>`.
pub async fn get_product(
    api: &dyn ProductApi,
    id: &str,
    format: OutputFormat,
) -> Result<String, ApiError> {
    let product = api.get_product(id).await?;
    Ok(format.renderer().render_product(&product))
}

/// `storefront products create`.
pub async fn create_product(
    api: &dyn ProductApi,
    product: &NewProduct,
    format: OutputFormat,
) -> Result<String, ApiError> {
    let created = api.create_product(product).await?;
    Ok(format.renderer().render_product(&created))
}

/// `storefront calc <op> <a> <b>`.
pub fn calculate(
    op: Operation,
    a: f64,
    b: f64,
    format: OutputFormat,
) -> Result<String, CalculatorError> {
    let result = calculator::evaluate(op, a, b)?;
    Ok(format.renderer().render_calculation(op, a, b, result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_renders_result() {
        let output = calculate(Operation::Add, 2.0, 3.0, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["result"], 5.0);
    }

    #[test]
    fn calculate_propagates_divide_by_zero() {
        let err = calculate(Operation::Divide, 5.0, 0.0, OutputFormat::Terminal).unwrap_err();
        assert_eq!(err.to_string(), "Cannot divide by zero");
    }
}
