//! storefront: arithmetic helpers and products API CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use storefront::api::HttpProductClient;
use storefront::commands;
use storefront::config::Config;
use storefront::constants;
use storefront::env::Env;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::args::{CalcArgs, Cli, Command, ProductsAction};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `STOREFRONT_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env(constants::ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Calc(ref args) => run_calc(args, &cli),
        Command::Products { ref action } => run_products(action, &cli).await,
        Command::Version => run_version(),
    }
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    Ok(())
}

fn run_calc(args: &CalcArgs, cli: &Cli) -> Result<()> {
    let output = commands::calculate(args.op, args.a, args.b, cli.format)
        .with_context(|| format!("{} failed", args.op))?;
    print!("{output}");
    Ok(())
}

async fn run_products(action: &ProductsAction, cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let mut config = Config::load(Some(&cwd), &Env::real()).context("failed to load config")?;
    config.apply_overrides(cli.base_url.clone(), cli.token.clone());
    tracing::debug!(?config, "configuration resolved");

    let client = HttpProductClient::new(&config.api).context("failed to build API client")?;

    let output = match action {
        ProductsAction::List { .. } => {
            commands::list_products(&client, &action.query(), cli.format)
                .await
                .context("failed to list products")?
        }
        ProductsAction::Get { id } => commands::get_product(&client, id, cli.format)
            .await
            .with_context(|| format!("failed to fetch product {id}"))?,
        ProductsAction::Create { .. } => {
            let payload = action.new_product().unwrap_or_default();
            commands::create_product(&client, &payload, cli.format)
                .await
                .context("failed to create product")?
        }
    };

    print!("{output}");
    Ok(())
}
