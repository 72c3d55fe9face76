//! Price formatting and escaping shared by the section renderers.

use serde::{Deserialize, Serialize};
use shopcart_core::Money;

/// How prices are shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFormat {
    /// Symbol placed before the amount.
    pub currency_symbol: String,
}

impl PriceFormat {
    /// Create a format with the given symbol.
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Format an amount, e.g. `$16.99`.
    pub fn format(&self, amount: Money) -> String {
        amount.display_with(&self.currency_symbol)
    }
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self::new("$")
    }
}

/// Escape text for inclusion in HTML content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
