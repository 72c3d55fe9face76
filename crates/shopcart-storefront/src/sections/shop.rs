//! Shop section - the product list with add-to-cart buttons.

use shopcart_core::{Catalog, Product};

use crate::format::{html_escape, PriceFormat};

/// Render the product list.
pub fn render_shop(heading: &str, catalog: &Catalog, price_format: &PriceFormat) -> String {
    let products_html: String = catalog
        .products()
        .iter()
        .map(|p| render_product(p, price_format))
        .collect();

    format!(
        r#"<section id="shop" data-section="shop">
    <h2>{}</h2>
    <ul id="products">
        {}
    </ul>
</section>"#,
        html_escape(heading),
        products_html
    )
}

fn render_product(product: &Product, price_format: &PriceFormat) -> String {
    let image = product
        .image
        .as_deref()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{}">"#,
                html_escape(src),
                html_escape(&product.title)
            )
        })
        .unwrap_or_default();

    let description = product
        .description
        .as_deref()
        .map(|d| format!("<p>{}</p>", html_escape(d)))
        .unwrap_or_default();

    format!(
        r#"<li>
            <article class="product" data-product-id="{id}">
                {image}
                <div class="product-content">
                    <div>
                        <h3>{title}</h3>
                        <p class="product-price">{price}</p>
                        {description}
                    </div>
                    <p class="product-actions">
                        <button data-action="add-to-cart" data-product-id="{id}">Add to Cart</button>
                    </p>
                </div>
            </article>
        </li>"#,
        id = html_escape(product.id.as_str()),
        image = image,
        title = html_escape(&product.title),
        price = price_format.format(product.price),
        description = description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_core::Money;

    #[test]
    fn test_shop_lists_products_in_order() {
        let catalog = Catalog::new(vec![
            Product::new("b", "Boots", Money::new(6450)).with_description("Leather"),
            Product::new("a", "Apron", Money::new(1200)),
        ])
        .unwrap();

        let html = render_shop("Our Products", &catalog, &PriceFormat::default());

        let boots = html.find("Boots").unwrap();
        let apron = html.find("Apron").unwrap();
        assert!(boots < apron);
        assert!(html.contains("$64.50"));
        assert!(html.contains("<p>Leather</p>"));
        assert!(html.contains(r#"data-action="add-to-cart" data-product-id="a""#));
    }

    #[test]
    fn test_product_without_image_has_no_img_tag() {
        let catalog = Catalog::new(vec![Product::new("a", "Apron", Money::new(1200))]).unwrap();
        let html = render_shop("Shop", &catalog, &PriceFormat::default());
        assert!(!html.contains("<img"));
    }
}
