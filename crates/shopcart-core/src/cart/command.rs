//! Cart commands and the pure transition function.

use serde::{Deserialize, Serialize};

use crate::cart::{CartState, LineItem};
use crate::catalog::CatalogLookup;
use crate::error::CartError;
use crate::ids::ProductId;

/// A transition request against the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartCommand {
    /// Add one unit of a catalog product.
    AddItem { product_id: ProductId },
    /// Change the quantity of a line already in the cart.
    UpdateQuantity { product_id: ProductId, delta: i64 },
}

impl CartCommand {
    /// Add one unit of a product.
    pub fn add(product_id: impl Into<ProductId>) -> Self {
        CartCommand::AddItem {
            product_id: product_id.into(),
        }
    }

    /// Change a line's quantity by `delta`.
    pub fn update(product_id: impl Into<ProductId>, delta: i64) -> Self {
        CartCommand::UpdateQuantity {
            product_id: product_id.into(),
            delta,
        }
    }

    /// The product this command targets.
    pub fn product_id(&self) -> &ProductId {
        match self {
            CartCommand::AddItem { product_id } => product_id,
            CartCommand::UpdateQuantity { product_id, .. } => product_id,
        }
    }

    /// Quantity change requested; an add counts as `+1`.
    pub fn delta(&self) -> i64 {
        match self {
            CartCommand::AddItem { .. } => 1,
            CartCommand::UpdateQuantity { delta, .. } => *delta,
        }
    }
}

/// Apply one command to a snapshot, producing the successor snapshot.
///
/// The input snapshot is never modified. On error no successor exists and
/// the caller keeps the snapshot it passed in.
pub fn reduce<C>(
    state: &CartState,
    command: &CartCommand,
    catalog: &C,
) -> Result<CartState, CartError>
where
    C: CatalogLookup + ?Sized,
{
    match command {
        CartCommand::AddItem { product_id } => add_item(state, product_id, catalog),
        CartCommand::UpdateQuantity { product_id, delta } => {
            update_quantity(state, product_id, *delta)
        }
    }
}

fn add_item<C>(
    state: &CartState,
    product_id: &ProductId,
    catalog: &C,
) -> Result<CartState, CartError>
where
    C: CatalogLookup + ?Sized,
{
    let mut items = state.items().to_vec();

    if let Some(position) = state.position(product_id) {
        let existing = &state.items()[position];
        let quantity = existing
            .quantity
            .checked_add(1)
            .ok_or(CartError::Overflow)?;
        items[position] = existing.with_quantity(quantity);
    } else {
        let product = catalog
            .lookup(product_id)
            .ok_or_else(|| CartError::ProductNotFound(product_id.clone()))?;
        items.push(LineItem::from_product(product));
    }

    Ok(CartState::from_items(items))
}

fn update_quantity(
    state: &CartState,
    product_id: &ProductId,
    delta: i64,
) -> Result<CartState, CartError> {
    let position = state
        .position(product_id)
        .ok_or_else(|| CartError::ItemNotInCart(product_id.clone()))?;

    if delta == 0 {
        return Ok(state.clone());
    }

    let existing = &state.items()[position];
    // Quantity is at least 1, so only a positive delta can overflow.
    let quantity = existing
        .quantity
        .checked_add(delta)
        .ok_or(CartError::Overflow)?;

    let mut items = state.items().to_vec();
    if quantity <= 0 {
        items.remove(position);
    } else {
        items[position] = existing.with_quantity(quantity);
    }

    Ok(CartState::from_items(items))
}
