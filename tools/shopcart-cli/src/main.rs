//! shopcart - browse the catalog and drive a cart session from the terminal.
//!
//! Commands:
//! - `shopcart products` - List the catalog
//! - `shopcart session` - Apply cart commands from a script or stdin
//! - `shopcart render` - Render the storefront page as HTML
//! - `shopcart config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, ProductsArgs, RenderArgs, SessionArgs};

/// shopcart - a small storefront with a cart
#[derive(Parser)]
#[command(name = "shopcart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog file path (overrides the config)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products in the catalog
    Products(ProductsArgs),

    /// Run a cart session from a script or stdin
    Session(SessionArgs),

    /// Render the storefront page
    Render(RenderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config and catalog
    let loaded = context::Context::load(cli.config.as_deref(), cli.catalog.as_deref(), output.clone());
    let ctx = match loaded {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(&ctx.config.logging, ctx.output.is_verbose());
    tracing::debug!(products = ctx.catalog.len(), "catalog loaded");

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Session(args) => commands::session::run(args, &ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
