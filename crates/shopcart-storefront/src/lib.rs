//! Storefront sections rendered from cart snapshots.
//!
//! Every renderer takes the latest [`CartState`](shopcart_core::CartState)
//! by reference and returns an HTML fragment; nothing here holds on to
//! cart state between calls.

mod format;
mod page;
mod sections;

pub use format::{html_escape, PriceFormat};
pub use page::{render_page, PageOptions};
pub use sections::*;
