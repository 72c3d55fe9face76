//! Cart pricing summaries.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// Per-line-item pricing breakdown, in cart order.
    pub line_items: Vec<LineItemPricing>,
    /// Sum of all line subtotals.
    pub total: Money,
}

impl CartPricing {
    /// Get the line for a product.
    pub fn line(&self, product_id: &ProductId) -> Option<&LineItemPricing> {
        self.line_items.iter().find(|l| &l.product_id == product_id)
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItemPricing {
    /// Product ID.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Subtotal (unit_price * quantity).
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_lookup() {
        let pricing = CartPricing {
            line_items: vec![LineItemPricing {
                product_id: ProductId::new("b"),
                unit_price: Money::new(2500),
                quantity: 3,
                subtotal: Money::new(7500),
            }],
            total: Money::new(7500),
        };

        assert_eq!(
            pricing.line(&ProductId::new("b")).map(|l| l.subtotal),
            Some(Money::new(7500))
        );
        assert!(pricing.line(&ProductId::new("missing")).is_none());
    }
}
