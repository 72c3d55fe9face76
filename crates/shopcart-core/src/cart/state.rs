//! Cart state and line item types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cart::{CartPricing, LineItemPricing};
use crate::catalog::Product;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;

/// A line item in the cart.
///
/// `name` and `price` are copied from the catalog when the product is first
/// added and are not re-synced afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Product this line refers to.
    pub id: ProductId,
    /// Product title at first add.
    pub name: String,
    /// Unit price at first add.
    pub price: Money,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl LineItem {
    /// Snapshot a catalog product into a new line with quantity 1.
    pub(crate) fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.title.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// Same line with a different quantity.
    pub(crate) fn with_quantity(&self, quantity: i64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Result<Money, CartError> {
        self.price
            .checked_mul(self.quantity)
            .ok_or(CartError::Overflow)
    }
}

/// An immutable snapshot of the cart.
///
/// Items are kept in first-add order and are unique by product id. Cloning a
/// snapshot shares the item list; transitions always build a new one, so a
/// snapshot never changes after it is handed out.
#[derive(Debug, Clone, Serialize)]
pub struct CartState {
    items: Arc<[LineItem]>,
}

impl CartState {
    /// An empty cart.
    pub fn new() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    pub(crate) fn from_items(items: Vec<LineItem>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }

    /// Line items in first-add order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line item by product id.
    pub fn get_item(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub(crate) fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of unit price times quantity over all lines.
    ///
    /// Recomputed on every call.
    pub fn total_price(&self) -> Result<Money, CartError> {
        let subtotals = self
            .items
            .iter()
            .map(LineItem::subtotal)
            .collect::<Result<Vec<_>, _>>()?;
        Money::checked_sum(subtotals).ok_or(CartError::Overflow)
    }

    /// Per-line pricing breakdown plus the cart total.
    pub fn pricing(&self) -> Result<CartPricing, CartError> {
        let line_items = self
            .items
            .iter()
            .map(|item| {
                Ok::<_, CartError>(LineItemPricing {
                    product_id: item.id.clone(),
                    unit_price: item.price,
                    quantity: item.quantity,
                    subtotal: item.subtotal()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total = Money::checked_sum(line_items.iter().map(|line| line.subtotal))
            .ok_or(CartError::Overflow)?;

        Ok(CartPricing { line_items, total })
    }

    /// Whether two snapshots share the same item list allocation.
    pub fn ptr_eq(&self, other: &CartState) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for CartState {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for CartState {}
