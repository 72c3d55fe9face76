//! Cart state management for the shopcart storefront.
//!
//! This crate provides:
//!
//! - **Catalog**: read-only products and the [`CatalogLookup`] seam
//! - **Cart**: immutable [`CartState`] snapshots, [`CartCommand`]s, the pure
//!   [`reduce`] transition and the session-owned [`CartManager`]
//! - **Money**: fixed-point prices and totals
//!
//! # Example
//!
//! ```rust
//! use shopcart_core::prelude::*;
//!
//! let catalog = Catalog::new(vec![Product::new(1u64, "Widget", Money::new(1000))]).unwrap();
//! let mut cart = CartManager::new(SessionId::generate());
//! let widget = ProductId::from(1u64);
//!
//! cart.add_item(&widget, &catalog).unwrap();
//! cart.add_item(&widget, &catalog).unwrap();
//! assert_eq!(cart.state().items()[0].quantity, 2);
//!
//! let state = cart.update_item_quantity(&widget, -2).unwrap();
//! assert!(state.is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use cart::{reduce, CartCommand, CartManager, CartState, LineItem};
pub use catalog::{demo_catalog, Catalog, CatalogLookup, Product};
pub use error::CartError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{demo_catalog, Catalog, CatalogLookup, Product};

    // Cart
    pub use crate::cart::{
        reduce, CartCommand, CartManager, CartPricing, CartState, LineItem, LineItemPricing,
    };
}
