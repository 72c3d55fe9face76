//! Full storefront page assembly.

use shopcart_core::{CartError, CartState, Catalog};
use tracing::debug;

use crate::format::{html_escape, PriceFormat};
use crate::sections::{render_cart, render_header, render_shop};

/// Options for rendering a whole page.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Store title shown in the header and the document title.
    pub title: String,
    /// Heading above the product list.
    pub shop_heading: String,
    /// Whether the cart modal is open.
    pub cart_open: bool,
    /// Price formatting.
    pub price_format: PriceFormat,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Elegant Context".to_string(),
            shop_heading: "Elegant Clothing For Everyone".to_string(),
            cart_open: false,
            price_format: PriceFormat::default(),
        }
    }
}

/// Render the header, the cart modal (when open) and the shop.
pub fn render_page(
    catalog: &Catalog,
    state: &CartState,
    options: &PageOptions,
) -> Result<String, CartError> {
    let header = render_header(&options.title, state, options.cart_open);
    let shop = render_shop(&options.shop_heading, catalog, &options.price_format);

    let modal = if options.cart_open {
        format!(
            r#"<dialog id="modal" open>
    <h2>Your Cart</h2>
    {}
    <form method="dialog" id="modal-actions">
        <button>Close</button>
        <button data-action="checkout">Checkout</button>
    </form>
</dialog>"#,
            render_cart(state, &options.price_format)?
        )
    } else {
        String::new()
    };

    debug!(
        products = catalog.len(),
        lines = state.unique_item_count(),
        cart_open = options.cart_open,
        "rendered storefront page"
    );

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
</head>
<body>
{header}
{modal}
{shop}
</body>
</html>
"#,
        title = html_escape(&options.title),
        header = header,
        modal = modal,
        shop = shop
    ))
}
