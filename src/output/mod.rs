//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use clap::ValueEnum;

use crate::calculator::Operation;
use crate::models::{Product, ProductPage};

pub use json::JsonRenderer;
pub use terminal::TerminalRenderer;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn OutputRenderer> {
        match self {
            OutputFormat::Terminal => Box::new(TerminalRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

/// Trait for rendering API results and calculations to a string.
pub trait OutputRenderer {
    fn render_product(&self, product: &Product) -> String;

    fn render_page(&self, page: &ProductPage) -> String;

    fn render_calculation(&self, op: Operation, a: f64, b: f64, result: f64) -> String;
}
