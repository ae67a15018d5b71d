//! Terminal renderer: styled flowing text, one block per product.

use colored::Colorize;

use crate::calculator::Operation;
use crate::models::{Product, ProductPage};
use crate::output::OutputRenderer;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render_product(&self, product: &Product) -> String {
        let mut output = format!(" {}  {}\n", product.id.dimmed(), product.name.bold());

        let mut facts = vec![
            format!("{:.2}", product.price).green().to_string(),
            product.category.cyan().to_string(),
        ];
        if let Some(stock) = product.stock {
            facts.push(format!("{stock} in stock"));
        }
        output.push_str(&format!("   {}\n", facts.join(" · ")));

        if let Some(ref description) = product.description {
            output.push_str(&format!("   {description}\n"));
        }
        if let Some(ref created_at) = product.created_at {
            output.push_str(&format!("   {} {}\n", "created".dimmed(), created_at));
        }
        output
    }

    fn render_page(&self, page: &ProductPage) -> String {
        if page.products.is_empty() {
            return format!(
                "{}\n",
                format!("  No products found ({} total).", page.total).yellow()
            );
        }

        let mut output = String::new();
        for product in &page.products {
            output.push_str(&self.render_product(product));
            output.push('\n');
        }

        let first = u64::from(page.offset) + 1;
        let last = u64::from(page.offset) + page.products.len() as u64;
        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        output.push_str(&format!(
            " showing {}-{} of {} (limit {}, offset {})\n",
            first,
            last,
            page.total.to_string().bold(),
            page.limit,
            page.offset,
        ));
        output
    }

    fn render_calculation(&self, op: Operation, a: f64, b: f64, result: f64) -> String {
        format!("{a} {} {b} = {}\n", op.symbol(), result.to_string().bold())
    }
}
