//! Shopping cart module.
//!
//! Contains the cart state, the commands that transition it, the manager
//! that owns it for a session, and pricing summaries.

mod command;
mod manager;
mod pricing;
mod state;

pub use command::{reduce, CartCommand};
pub use manager::CartManager;
pub use pricing::{CartPricing, LineItemPricing};
pub use state::{CartState, LineItem};
