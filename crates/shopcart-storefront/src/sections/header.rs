//! Header section - store title and cart toggle.

use shopcart_core::CartState;

use crate::format::html_escape;

/// Render the page header.
///
/// The toggle shows the number of distinct line items in the cart.
pub fn render_header(title: &str, state: &CartState, cart_open: bool) -> String {
    format!(
        r#"<header id="main-header" data-section="header">
    <div id="main-title">
        <img src="logo.png" alt="{title}">
        <h1>{title}</h1>
    </div>
    <p>
        <button data-action="toggle-cart" aria-expanded="{expanded}">Cart ({count})</button>
    </p>
</header>"#,
        title = html_escape(title),
        expanded = cart_open,
        count = state.unique_item_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_core::prelude::*;

    #[test]
    fn test_header_counts_lines_not_units() {
        let catalog = demo_catalog();
        let mut cart = CartManager::default();
        let first = catalog.products()[0].id.clone();
        cart.add_item(&first, &catalog).unwrap();
        cart.add_item(&first, &catalog).unwrap();

        let html = render_header("Shop", cart.state(), false);
        assert!(html.contains("Cart (1)"));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn test_header_escapes_title() {
        let html = render_header("Bits & Bobs", &CartState::new(), true);
        assert!(html.contains("<h1>Bits &amp; Bobs</h1>"));
        assert!(html.contains(r#"aria-expanded="true""#));
    }
}
