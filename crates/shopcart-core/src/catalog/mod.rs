//! Product catalog module.
//!
//! Contains the read-only product types the cart snapshots from, and the
//! lookup seam the cart resolves product ids through.

mod catalog;
mod product;

pub use catalog::{demo_catalog, Catalog, CatalogLookup};
pub use product::Product;
