//! Session-scoped owner of the authoritative cart state.

use tracing::{debug, warn};

use crate::cart::{reduce, CartCommand, CartState};
use crate::catalog::{CatalogLookup, Product};
use crate::error::CartError;
use crate::ids::{ProductId, SessionId};
use crate::money::Money;

/// Owns one session's cart and applies commands to it.
///
/// Construct one per session and pass it to whatever needs the cart.
/// Mutation requires `&mut self`, so a host sharing a manager across threads
/// must serialize access itself (for example behind a `Mutex`).
#[derive(Debug, Clone)]
pub struct CartManager {
    session_id: SessionId,
    state: CartState,
    history: Vec<CartCommand>,
}

impl CartManager {
    /// Create a manager with an empty cart for a session.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            state: CartState::new(),
            history: Vec::new(),
        }
    }

    /// Session this cart belongs to.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// The latest snapshot.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Commands applied successfully so far, oldest first.
    ///
    /// Kept for diagnostics; the session report lists it.
    pub fn history(&self) -> &[CartCommand] {
        &self.history
    }

    /// Total price of the latest snapshot.
    pub fn total_price(&self) -> Result<Money, CartError> {
        self.state.total_price()
    }

    /// Add one unit of `product_id`, resolving new lines through `catalog`.
    pub fn add_item<C>(
        &mut self,
        product_id: &ProductId,
        catalog: &C,
    ) -> Result<CartState, CartError>
    where
        C: CatalogLookup + ?Sized,
    {
        self.dispatch(
            CartCommand::AddItem {
                product_id: product_id.clone(),
            },
            catalog,
        )
    }

    /// Change the quantity of a line already in the cart.
    ///
    /// A resulting quantity of zero or less removes the line.
    pub fn update_item_quantity(
        &mut self,
        product_id: &ProductId,
        delta: i64,
    ) -> Result<CartState, CartError> {
        // Quantity updates never consult the catalog.
        let no_catalog: &[Product] = &[];
        self.dispatch(
            CartCommand::UpdateQuantity {
                product_id: product_id.clone(),
                delta,
            },
            no_catalog,
        )
    }

    /// Apply a command and return the new snapshot.
    ///
    /// On error the current state is kept as is and nothing is recorded.
    pub fn dispatch<C>(&mut self, command: CartCommand, catalog: &C) -> Result<CartState, CartError>
    where
        C: CatalogLookup + ?Sized,
    {
        match reduce(&self.state, &command, catalog) {
            Ok(next) => {
                let product_id = command.product_id();
                let quantity = next.get_item(product_id).map(|item| item.quantity).unwrap_or(0);
                debug!(
                    session = %self.session_id,
                    product_id = %product_id,
                    delta = command.delta(),
                    quantity,
                    lines = next.unique_item_count(),
                    "cart command applied"
                );
                self.state = next;
                self.history.push(command);
                Ok(self.state.clone())
            }
            Err(e) => {
                warn!(session = %self.session_id, error = %e, "cart command rejected");
                Err(e)
            }
        }
    }
}

impl Default for CartManager {
    fn default() -> Self {
        Self::new(SessionId::generate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn widget_catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(1u64, "Widget", Money::new(1000)),
            Product::new(2u64, "Gadget", Money::new(250)),
        ])
        .unwrap()
    }

    #[test]
    fn test_manager_starts_empty() {
        let manager = CartManager::new(SessionId::new("s-1"));
        assert!(manager.state().is_empty());
        assert!(manager.history().is_empty());
        assert_eq!(manager.session_id().as_str(), "s-1");
    }

    #[test]
    fn test_add_and_update_record_history() {
        let catalog = widget_catalog();
        let mut manager = CartManager::default();
        let id = ProductId::from(1u64);

        manager.add_item(&id, &catalog).unwrap();
        manager.update_item_quantity(&id, 2).unwrap();

        assert_eq!(manager.state().items()[0].quantity, 3);
        assert_eq!(
            manager.history(),
            &[CartCommand::add(1u64), CartCommand::update(1u64, 2)]
        );
        assert_eq!(manager.total_price().unwrap(), Money::new(3000));
    }

    #[test]
    fn test_returned_snapshot_is_independent() {
        let catalog = widget_catalog();
        let mut manager = CartManager::default();
        let id = ProductId::from(1u64);

        let first = manager.add_item(&id, &catalog).unwrap();
        let second = manager.add_item(&id, &catalog).unwrap();

        assert_eq!(first.items()[0].quantity, 1);
        assert_eq!(second.items()[0].quantity, 2);
        assert_eq!(&second, manager.state());
    }

    #[test]
    fn test_rejected_command_keeps_state() {
        let catalog = widget_catalog();
        let mut manager = CartManager::default();
        manager.add_item(&ProductId::from(1u64), &catalog).unwrap();
        let before = manager.state().clone();

        let err = manager
            .update_item_quantity(&ProductId::from(2u64), -1)
            .unwrap_err();
        assert_eq!(err, CartError::ItemNotInCart(ProductId::from(2u64)));
        assert!(manager.state().ptr_eq(&before));
        assert_eq!(manager.history().len(), 1);

        let err = manager.add_item(&ProductId::from(9u64), &catalog).unwrap_err();
        assert!(err.is_not_found());
        assert!(manager.state().ptr_eq(&before));
    }

    #[test]
    fn test_dispatch_with_command_values() {
        let catalog = widget_catalog();
        let mut manager = CartManager::default();
        for command in [
            CartCommand::add(2u64),
            CartCommand::add(1u64),
            CartCommand::update(2u64, -1),
        ] {
            manager.dispatch(command, &catalog).unwrap();
        }
        let ids: Vec<&str> = manager.state().items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }
}
