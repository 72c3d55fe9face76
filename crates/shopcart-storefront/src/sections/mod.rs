//! Section renderers for the storefront.

mod cart;
mod header;
mod shop;

pub use cart::*;
pub use header::*;
pub use shop::*;
