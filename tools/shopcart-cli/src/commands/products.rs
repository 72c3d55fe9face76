//! Catalog listing.

use anyhow::Result;

use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let products = ctx.catalog.products();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    let price_format = ctx.config.price_format();
    ctx.output.header(&format!("Products ({})", products.len()));

    let id_width = products.iter().map(|p| p.id.as_str().len()).max().unwrap_or(2).max(2);
    let title_width = products.iter().map(|p| p.title.len()).max().unwrap_or(5).max(5);
    let widths = [id_width, title_width, 10];

    ctx.output.table_row(&["ID", "TITLE", "PRICE"], &widths);
    for product in products {
        let price = price_format.format(product.price);
        ctx.output
            .table_row(&[product.id.as_str(), product.title.as_str(), price.as_str()], &widths);
        if args.long {
            if let Some(ref description) = product.description {
                ctx.output.kv("description", description);
            }
        }
    }

    Ok(())
}
