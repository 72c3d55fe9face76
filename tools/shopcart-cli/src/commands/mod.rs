//! CLI command implementations.

pub mod config;
pub mod products;
pub mod render;
pub mod session;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Show descriptions as well.
    #[arg(short, long)]
    pub long: bool,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Script file to run (default: read from stdin).
    #[arg(short, long)]
    pub script: Option<String>,

    /// Stop at the first failing line.
    #[arg(long)]
    pub strict: bool,

    /// Only print the cart when asked with `show`.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Script file to apply before rendering (default: empty cart).
    #[arg(short, long)]
    pub script: Option<String>,

    /// Render with the cart modal open.
    #[arg(long)]
    pub open_cart: bool,

    /// Write the page to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Stop at the first failing script line.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a default shopcart.toml in the current directory.
    Init {
        /// Overwrite an existing file without asking.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file and the catalog it points to.
    Validate,
}
