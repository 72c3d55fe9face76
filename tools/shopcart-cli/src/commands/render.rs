//! Storefront page rendering.

use std::fs::File;
use std::io::BufReader;

use anyhow::{Context as _, Result};
use shopcart_core::{CartManager, SessionId};
use shopcart_storefront::render_page;

use super::session::{run_script, ScriptOptions};
use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut manager = CartManager::new(SessionId::generate());

    if let Some(ref script) = args.script {
        let path = ctx.resolve_path(script);
        let file = File::open(&path)
            .with_context(|| format!("Failed to open script: {}", path.display()))?;
        let options = ScriptOptions {
            strict: args.strict,
            echo: false,
        };
        let summary = run_script(BufReader::new(file), &mut manager, ctx, options)?;
        ctx.output.debug(&format!(
            "applied {} command(s), {} failed",
            summary.applied, summary.failed
        ));
    }

    let options = ctx.config.page_options(args.open_cart);
    let html = render_page(&ctx.catalog, manager.state(), &options)?;

    match args.output {
        Some(ref output) => {
            let path = ctx.resolve_path(output);
            std::fs::write(&path, html)
                .with_context(|| format!("Failed to write page: {}", path.display()))?;
            ctx.output.success(&format!("Wrote {}", path.display()));
        }
        None => print!("{}", html),
    }

    Ok(())
}
