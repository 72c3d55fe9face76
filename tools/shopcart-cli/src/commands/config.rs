//! Configuration management commands.

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(built-in demo)"),
    );
    ctx.output.kv("products", &ctx.catalog.len().to_string());

    ctx.output.info("[display]");
    ctx.output.kv("currency_symbol", &ctx.config.display.currency_symbol);
    ctx.output.kv("title", &ctx.config.display.title);
    ctx.output.kv("shop_heading", &ctx.config.display.shop_heading);

    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_NAMES[0]);

    if path.exists() && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", path.display()))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !overwrite {
            ctx.output.warn("Left existing config untouched");
            return Ok(());
        }
    }

    std::fs::write(&path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    ctx.output.success(&format!("Created {}", path.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let Some(ref path) = ctx.config_path else {
        bail!(
            "No config file found (looked for {} in {} and its parents)",
            CONFIG_NAMES.join(", "),
            ctx.cwd.display()
        );
    };

    // Re-read so the check covers the file as it is now.
    let config = CliConfig::load(&path.to_string_lossy())?;
    let catalog = config.load_catalog(&ctx.config_dir())?;

    if config.display.currency_symbol.is_empty() {
        ctx.output.warn("display.currency_symbol is empty; prices will show without a symbol");
    }

    ctx.output.success(&format!(
        "{} is valid ({} products)",
        path.display(),
        catalog.len()
    ));
    Ok(())
}
