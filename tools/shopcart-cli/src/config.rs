//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopcart_core::{demo_catalog, Catalog};
use shopcart_storefront::{PageOptions, PriceFormat};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Storefront display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Load the configured catalog, relative paths resolved against `base`.
    ///
    /// Falls back to the built-in demo catalog when no path is configured.
    pub fn load_catalog(&self, base: &Path) -> Result<Catalog> {
        match self.catalog.path.as_deref() {
            Some(path) => load_catalog_file(&base.join(path)),
            None => Ok(demo_catalog()),
        }
    }

    /// Page rendering options derived from the display settings.
    pub fn page_options(&self, cart_open: bool) -> PageOptions {
        PageOptions {
            title: self.display.title.clone(),
            shop_heading: self.display.shop_heading.clone(),
            cart_open,
            price_format: self.price_format(),
        }
    }

    /// Price format derived from the display settings.
    pub fn price_format(&self) -> PriceFormat {
        PriceFormat::new(self.display.currency_symbol.clone())
    }
}

/// Catalog source configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Path to a TOML or JSON catalog file with a `products` array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Symbol shown before prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Store title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Heading above the product list.
    #[serde(default = "default_shop_heading")]
    pub shop_heading: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_title() -> String {
    "Elegant Context".to_string()
}

fn default_shop_heading() -> String {
    "Elegant Clothing For Everyone".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            title: default_title(),
            shop_heading: default_shop_heading(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Load a catalog from a TOML or JSON file.
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let display = path.display();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", display))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to load JSON catalog: {}", display))
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to load TOML catalog: {}", display))
    }
}

/// Generate a default shopcart.toml config file.
pub fn generate_default_config() -> String {
    r#"# shopcart configuration

[catalog]
# TOML or JSON file with a `products` array; the built-in demo catalog is
# used when unset.
# path = "catalog.toml"

[display]
currency_symbol = "$"
title = "Elegant Context"
shop_heading = "Elegant Clothing For Everyone"

[logging]
# Overridden by RUST_LOG.
level = "warn"
# "human" or "json"
format = "human"
"#
    .to_string()
}
