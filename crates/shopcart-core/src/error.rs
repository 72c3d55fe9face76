//! Cart error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in cart and catalog operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(ProductId),

    /// Two catalog entries share an id.
    #[error("Duplicate product in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// Catalog price is zero or negative.
    #[error("Invalid price for {product_id}: {amount_cents} cents")]
    InvalidPrice {
        product_id: ProductId,
        amount_cents: i64,
    },

    /// Decimal amount that is not finite or does not fit in cents.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,
}

impl CartError {
    /// Whether this error is a lookup miss, either in the catalog or in the cart.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CartError::ProductNotFound(_) | CartError::ItemNotInCart(_)
        )
    }
}
