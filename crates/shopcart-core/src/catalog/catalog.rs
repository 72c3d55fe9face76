//! Catalog container and the lookup seam used by the cart.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use crate::catalog::Product;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;

/// Resolves product ids to catalog entries.
///
/// The cart owns no catalog of its own; callers hand one of these to
/// [`CartManager::add_item`](crate::cart::CartManager::add_item).
pub trait CatalogLookup {
    /// Look up a product by id.
    fn lookup(&self, id: &ProductId) -> Option<&Product>;
}

impl CatalogLookup for [Product] {
    fn lookup(&self, id: &ProductId) -> Option<&Product> {
        self.iter().find(|p| &p.id == id)
    }
}

impl CatalogLookup for Vec<Product> {
    fn lookup(&self, id: &ProductId) -> Option<&Product> {
        self.as_slice().lookup(id)
    }
}

impl CatalogLookup for HashMap<ProductId, Product> {
    fn lookup(&self, id: &ProductId) -> Option<&Product> {
        self.get(id)
    }
}

impl<T: CatalogLookup + ?Sized> CatalogLookup for &T {
    fn lookup(&self, id: &ProductId) -> Option<&Product> {
        (**self).lookup(id)
    }
}

/// An ordered product catalog with unique ids.
///
/// Deserializes from `{ "products": [...] }` (JSON or TOML), running the same
/// validation as [`Catalog::new`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

/// File form of a catalog.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let file = CatalogFile::deserialize(deserializer)?;
        Catalog::new(file.products).map_err(serde::de::Error::custom)
    }
}

impl Catalog {
    /// Build a catalog, preserving the given display order.
    ///
    /// Returns an error if two products share an id or a price is not positive.
    pub fn new(products: Vec<Product>) -> Result<Self, CartError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if !product.price.is_positive() {
                return Err(CartError::InvalidPrice {
                    product_id: product.id.clone(),
                    amount_cents: product.price.amount_cents,
                });
            }
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CartError::DuplicateProduct(product.id.clone()));
            }
        }
        Ok(Self { products, index })
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Get a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).map(|&position| &self.products[position])
    }

    /// Check whether a product id exists.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogLookup for Catalog {
    fn lookup(&self, id: &ProductId) -> Option<&Product> {
        self.get(id)
    }
}

/// Built-in catalog used when no catalog file is configured.
pub fn demo_catalog() -> Catalog {
    let products = vec![
        Product::new("p1", "Mauve Tailored Dress", Money::new(2999))
            .with_image("product-1.jpg")
            .with_description("A tailored dress in soft mauve, cut for everyday elegance."),
        Product::new("p2", "Classic Black Shirt", Money::new(1999))
            .with_image("product-2.jpg")
            .with_description("A crisp black shirt that pairs with anything."),
        Product::new("p3", "Linen Summer Trousers", Money::new(3450))
            .with_image("product-3.jpg")
            .with_description("Breathable linen trousers with a relaxed fit."),
        Product::new("p4", "Wool Winter Coat", Money::new(8999))
            .with_image("product-4.jpg")
            .with_description("A warm double-breasted coat in charcoal wool."),
        Product::new("p5", "Leather Ankle Boots", Money::new(6450))
            .with_image("product-5.jpg")
            .with_description("Hand-finished leather boots with a low block heel."),
    ];
    Catalog {
        index: products
            .iter()
            .enumerate()
            .map(|(position, p)| (p.id.clone(), position))
            .collect(),
        products,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product::new("1", "Widget", Money::new(1000))
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new(vec![widget()]).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(&ProductId::new("1")));
        assert_eq!(
            catalog.lookup(&ProductId::new("1")).map(|p| p.title.as_str()),
            Some("Widget")
        );
        assert!(catalog.lookup(&ProductId::new("2")).is_none());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(vec![
            Product::new("b", "Second", Money::new(100)),
            Product::new("a", "First", Money::new(200)),
        ])
        .unwrap();
        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let result = Catalog::new(vec![widget(), widget()]);
        assert_eq!(
            result.unwrap_err(),
            CartError::DuplicateProduct(ProductId::new("1"))
        );
    }

    #[test]
    fn test_catalog_rejects_non_positive_price() {
        let result = Catalog::new(vec![Product::new("free", "Freebie", Money::zero())]);
        assert!(matches!(result, Err(CartError::InvalidPrice { .. })));
    }

    #[test]
    fn test_catalog_deserializes_from_json() {
        let json = r#"{"products": [
            {"id": 1, "title": "Widget", "price": 10.00},
            {"id": "p2", "title": "Gadget", "price": 3.5, "description": "Small"}
        ]}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&ProductId::new("p2")).unwrap().price, Money::new(350));
        assert!(catalog.contains(&ProductId::new("1")));
    }

    #[test]
    fn test_catalog_deserialize_validates() {
        let duplicate = r#"{"products": [
            {"id": 1, "title": "Widget", "price": 10.00},
            {"id": "1", "title": "Widget again", "price": 12.00}
        ]}"#;
        let err = serde_json::from_str::<Catalog>(duplicate).unwrap_err();
        assert!(err.to_string().contains("Duplicate product in catalog: 1"));

        let free = r#"{"products": [{"id": 1, "title": "Freebie", "price": 0}]}"#;
        let err = serde_json::from_str::<Catalog>(free).unwrap_err();
        assert!(err.to_string().contains("Invalid price"));
    }

    #[test]
    fn test_catalog_rejects_out_of_range_price() {
        let json = r#"{"products": [{"id": 1, "title": "Yacht", "price": 1e300}]}"#;
        let err = serde_json::from_str::<Catalog>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid amount"));
    }

    #[test]
    fn test_slice_and_map_lookup() {
        let products = vec![widget()];
        assert!(products.lookup(&ProductId::new("1")).is_some());

        let map: HashMap<ProductId, Product> =
            products.iter().map(|p| (p.id.clone(), p.clone())).collect();
        assert!(map.lookup(&ProductId::new("1")).is_some());
        assert!(map.lookup(&ProductId::new("x")).is_none());
    }

    #[test]
    fn test_demo_catalog_is_valid() {
        let demo = demo_catalog();
        let rebuilt = Catalog::new(demo.products().to_vec()).unwrap();
        assert_eq!(demo, rebuilt);
        assert!(!demo.is_empty());
    }
}
