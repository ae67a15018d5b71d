//! Clap argument types.

use clap::Parser;

use storefront::calculator::Operation;
use storefront::models::{NewProduct, ProductQuery};
use storefront::output::OutputFormat;

/// Arithmetic helpers and a client for the storefront products API.
#[derive(Parser, Debug)]
#[command(name = "storefront", version = storefront::constants::VERSION)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Products API base URL (overrides config and STOREFRONT_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Bearer token for authenticated requests (overrides config and STOREFRONT_TOKEN).
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Evaluate an arithmetic operation.
    Calc(CalcArgs),

    /// Query and create products.
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },

    /// Print version information.
    Version,
}

/// Arguments for the `calc` subcommand.
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// One of: add, subtract, multiply, divide.
    pub op: Operation,

    #[arg(allow_negative_numbers = true)]
    pub a: f64,

    #[arg(allow_negative_numbers = true)]
    pub b: f64,
}

/// Product subcommands.
#[derive(clap::Subcommand, Debug)]
pub enum ProductsAction {
    /// List products, optionally filtered.
    List {
        #[arg(long)]
        category: Option<String>,

        /// Page size. The server rejects values above its maximum.
        #[arg(long)]
        limit: Option<u32>,

        #[arg(long)]
        offset: Option<u32>,
    },

    /// Fetch a single product by id.
    Get {
        id: String,
    },

    /// Create a product. Requires a token.
    Create {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        stock: Option<u32>,
    },
}

impl ProductsAction {
    /// Query parameters for `list`; empty for other actions.
    pub fn query(&self) -> ProductQuery {
        match self {
            ProductsAction::List {
                category,
                limit,
                offset,
            } => ProductQuery {
                category: category.clone(),
                limit: *limit,
                offset: *offset,
            },
            _ => ProductQuery::default(),
        }
    }

    /// Payload for `create`; `None` for other actions.
    pub fn new_product(&self) -> Option<NewProduct> {
        match self {
            ProductsAction::Create {
                name,
                price,
                category,
                description,
                stock,
            } => Some(NewProduct {
                name: name.clone(),
                description: description.clone(),
                price: *price,
                category: category.clone(),
                stock: *stock,
            }),
            _ => None,
        }
    }
}
