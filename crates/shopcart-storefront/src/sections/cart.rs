//! Cart section - line items, quantity controls and the total.

use shopcart_core::{CartError, CartState, LineItem};

use crate::format::{html_escape, PriceFormat};

/// Render the cart contents.
///
/// Fails only if the total overflows.
pub fn render_cart(state: &CartState, price_format: &PriceFormat) -> Result<String, CartError> {
    let total = price_format.format(state.total_price()?);

    let body = if state.is_empty() {
        "<p>No items in cart!</p>".to_string()
    } else {
        let items_html: String = state
            .items()
            .iter()
            .map(|item| render_line_item(item, price_format))
            .collect();
        format!(r#"<ul id="cart-items">{}</ul>"#, items_html)
    };

    Ok(format!(
        r#"<div id="cart" data-section="cart">
    {body}
    <p id="cart-total-price">Cart Total: <strong>{total}</strong></p>
</div>"#,
        body = body,
        total = total
    ))
}

fn render_line_item(item: &LineItem, price_format: &PriceFormat) -> String {
    let id = html_escape(item.id.as_str());
    format!(
        r#"
        <li data-product-id="{id}">
            <div>
                <span>{name}</span>
                <span> ({price})</span>
            </div>
            <div class="cart-item-actions">
                <button data-action="update-quantity" data-product-id="{id}" data-delta="-1">-</button>
                <span>{quantity}</span>
                <button data-action="update-quantity" data-product-id="{id}" data-delta="1">+</button>
            </div>
        </li>"#,
        id = id,
        name = html_escape(&item.name),
        price = price_format.format(item.price),
        quantity = item.quantity
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_core::prelude::*;

    #[test]
    fn test_empty_cart_message() {
        let html = render_cart(&CartState::new(), &PriceFormat::default()).unwrap();
        assert!(html.contains("No items in cart!"));
        assert!(html.contains("Cart Total: <strong>$0.00</strong>"));
        assert!(!html.contains("cart-items"));
    }

    #[test]
    fn test_cart_lists_items_and_total() {
        let catalog = Catalog::new(vec![
            Product::new("a", "Alpha", Money::new(350)),
            Product::new("b", "Beta", Money::new(999)),
        ])
        .unwrap();
        let mut cart = CartManager::default();
        cart.add_item(&ProductId::new("a"), &catalog).unwrap();
        cart.add_item(&ProductId::new("a"), &catalog).unwrap();
        cart.add_item(&ProductId::new("b"), &catalog).unwrap();

        let html = render_cart(cart.state(), &PriceFormat::default()).unwrap();

        assert!(html.contains("<span>Alpha</span>"));
        assert!(html.contains("<span> ($3.50)</span>"));
        assert!(html.contains("<span>2</span>"));
        assert!(html.contains("Cart Total: <strong>$16.99</strong>"));
        assert!(html.contains(r#"data-product-id="b" data-delta="-1""#));
    }
}
