//! Interactive or scripted cart session.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use shopcart_core::{CartCommand, CartManager, CartState, LineItem, Money, SessionId};
use shopcart_storefront::PriceFormat;
use tracing::info_span;

use super::SessionArgs;
use crate::context::Context;
use crate::output::Output;
use crate::script::{parse_line, Instruction};

/// How a script is run.
#[derive(Debug, Clone, Copy)]
pub struct ScriptOptions {
    /// Abort on the first failing line.
    pub strict: bool,
    /// Print the cart after every applied command.
    pub echo: bool,
}

/// Counts from a finished script run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScriptSummary {
    /// Commands applied.
    pub applied: usize,
    /// Lines that failed to parse or apply.
    pub failed: usize,
}

/// Final JSON record for a session.
#[derive(Serialize)]
struct SessionReport<'a> {
    session: &'a SessionId,
    #[serde(flatten)]
    summary: ScriptSummary,
    history: &'a [CartCommand],
}

/// JSON record emitted per instruction.
#[derive(Serialize)]
struct StepRecord<'a> {
    line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'a CartCommand>,
    items: &'a [LineItem],
    total: Money,
}

/// Run the session command.
pub fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let mut manager = CartManager::new(SessionId::generate());
    let options = ScriptOptions {
        strict: args.strict,
        echo: !args.quiet,
    };

    let summary = match args.script {
        Some(ref script) => {
            let path = ctx.resolve_path(script);
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            run_script(BufReader::new(file), &mut manager, ctx, options)?
        }
        None => {
            ctx.output
                .info("Reading cart commands from stdin (add, inc, dec, update, show, total)");
            run_script(io::stdin().lock(), &mut manager, ctx, options)?
        }
    };

    finish(&manager, summary, &ctx.output);
    Ok(())
}

/// Report the end of a session, with the applied command log.
fn finish(manager: &CartManager, summary: ScriptSummary, output: &Output) {
    if output.is_json() {
        output.json_line(&session_report(manager, summary));
        return;
    }

    output.success(&format!(
        "Session {} finished: {} applied, {} failed",
        manager.session_id(),
        summary.applied,
        summary.failed
    ));
    for (index, command) in manager.history().iter().enumerate() {
        output.debug(&format!("#{} {}", index + 1, describe(command)));
    }
}

fn session_report(manager: &CartManager, summary: ScriptSummary) -> SessionReport<'_> {
    SessionReport {
        session: manager.session_id(),
        summary,
        history: manager.history(),
    }
}

/// Apply every instruction read from `reader` to `manager`.
///
/// Failing lines are reported and skipped, or abort the run when strict.
pub fn run_script<R: BufRead>(
    reader: R,
    manager: &mut CartManager,
    ctx: &Context,
    options: ScriptOptions,
) -> Result<ScriptSummary> {
    let span = info_span!("session", id = %manager.session_id());
    let _enter = span.enter();

    let price_format = ctx.config.price_format();
    let mut summary = ScriptSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.context("Failed to read script line")?;

        let outcome = parse_line(&line)
            .map_err(anyhow::Error::from)
            .and_then(|instruction| match instruction {
                Some(instruction) => {
                    execute(instruction, line_no, manager, ctx, &price_format, options)
                }
                None => Ok(false),
            });

        match outcome {
            Ok(true) => summary.applied += 1,
            Ok(false) => {}
            Err(e) => {
                summary.failed += 1;
                if options.strict {
                    bail!("line {}: {:#}", line_no, e);
                }
                ctx.output.error(&format!("line {}: {:#}", line_no, e));
            }
        }
    }

    Ok(summary)
}

/// Execute one instruction. Returns whether a cart command was applied.
fn execute(
    instruction: Instruction,
    line_no: usize,
    manager: &mut CartManager,
    ctx: &Context,
    price_format: &PriceFormat,
    options: ScriptOptions,
) -> Result<bool> {
    match instruction {
        Instruction::Command(command) => {
            let state = manager.dispatch(command.clone(), &ctx.catalog)?;
            if options.echo {
                report(&ctx.output, line_no, Some(&command), &state, price_format)?;
            }
            Ok(true)
        }
        Instruction::Show => {
            report(&ctx.output, line_no, None, manager.state(), price_format)?;
            Ok(false)
        }
        Instruction::Total => {
            let total = manager.total_price()?;
            if ctx.output.is_json() {
                ctx.output
                    .json_line(&serde_json::json!({ "line": line_no, "total": total }));
            } else {
                ctx.output.kv("Cart Total", &price_format.format(total));
            }
            Ok(false)
        }
    }
}

fn report(
    output: &Output,
    line_no: usize,
    command: Option<&CartCommand>,
    state: &CartState,
    price_format: &PriceFormat,
) -> Result<()> {
    let total = state.total_price()?;

    if output.is_json() {
        output.json_line(&StepRecord {
            line: line_no,
            command,
            items: state.items(),
            total,
        });
        return Ok(());
    }

    if let Some(command) = command {
        output.debug(&format!("line {}: {}", line_no, describe(command)));
    }
    for line in cart_lines(state, price_format)? {
        output.line(&line);
    }
    Ok(())
}

fn describe(command: &CartCommand) -> String {
    match command {
        CartCommand::AddItem { product_id } => format!("add {}", product_id),
        CartCommand::UpdateQuantity { product_id, delta } => {
            format!("update {} {:+}", product_id, delta)
        }
    }
}

/// Text rendering of the cart, one entry per line.
pub fn cart_lines(state: &CartState, price_format: &PriceFormat) -> Result<Vec<String>> {
    let pricing = state.pricing()?;
    let mut lines = Vec::with_capacity(state.unique_item_count() + 1);

    if state.is_empty() {
        lines.push("  No items in cart!".to_string());
    }
    for item in state.items() {
        let subtotal = pricing
            .line(&item.id)
            .map(|line| price_format.format(line.subtotal))
            .unwrap_or_default();
        lines.push(format!(
            "  {} ({}) x{} = {}",
            item.name,
            price_format.format(item.price),
            item.quantity,
            subtotal
        ));
    }
    lines.push(format!("  Cart Total: {}", price_format.format(pricing.total)));

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    use shopcart_core::prelude::*;

    use crate::config::CliConfig;

    fn demo_context() -> Context {
        Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: PathBuf::from("."),
            catalog: demo_catalog(),
        }
    }

    fn run_text(script: &str, strict: bool) -> (Result<ScriptSummary>, CartManager) {
        let ctx = demo_context();
        let mut manager = CartManager::new(SessionId::new("test"));
        let options = ScriptOptions {
            strict,
            echo: false,
        };
        let result = run_script(Cursor::new(script), &mut manager, &ctx, options);
        (result, manager)
    }

    #[test]
    fn test_run_script_continues_past_failures() {
        let (result, manager) = run_text("add p1\nadd nope\ninc p1\n", false);
        assert_eq!(result.unwrap(), ScriptSummary { applied: 2, failed: 1 });
        assert_eq!(manager.state().items()[0].quantity, 2);
        assert_eq!(manager.history().len(), 2);
    }

    #[test]
    fn test_run_script_strict_stops_at_failing_line() {
        let (result, manager) = run_text("add p1\nadd nope\ninc p1\n", true);
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.starts_with("line 2:"), "{}", message);
        assert!(message.contains("Product not found: nope"), "{}", message);
        // The third line never ran.
        assert_eq!(manager.state().items()[0].quantity, 1);
    }

    #[test]
    fn test_run_script_skips_blank_and_comment_lines() {
        let script = "# warm up\n\nadd p2   # shirt\n   \nshow\ntotal\ndec p2\nfrobnicate\n";
        let (result, manager) = run_text(script, true);
        let err = result.unwrap_err();
        // Line numbers count every physical line, comments and blanks included.
        assert!(format!("{:#}", err).starts_with("line 8:"));
        assert!(manager.state().is_empty());
        assert_eq!(manager.history().len(), 2);
    }

    #[test]
    fn test_run_script_counts_parse_errors() {
        let (result, manager) = run_text("add\nupdate p1 many\nadd p3\n", false);
        assert_eq!(result.unwrap(), ScriptSummary { applied: 1, failed: 2 });
        assert_eq!(manager.state().unique_item_count(), 1);
    }

    #[test]
    fn test_session_report_lists_history() {
        let (result, manager) = run_text("add p1\nupdate p1 3\n", false);
        let report = session_report(&manager, result.unwrap());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["session"], "test");
        assert_eq!(json["applied"], 2);
        assert_eq!(json["failed"], 0);
        assert_eq!(json["history"][0]["type"], "add_item");
        assert_eq!(json["history"][1]["delta"], 3);
    }

    #[test]
    fn test_report_in_both_output_modes() {
        let mut manager = CartManager::default();
        manager.add_item(&ProductId::new("p1"), &demo_catalog()).unwrap();
        let command = CartCommand::add("p1");
        for json in [false, true] {
            let output = Output::new(false, json);
            report(&output, 1, Some(&command), manager.state(), &PriceFormat::default()).unwrap();
        }
    }

    #[test]
    fn test_cart_lines_empty() {
        let lines = cart_lines(&CartState::new(), &PriceFormat::default()).unwrap();
        assert_eq!(lines, vec!["  No items in cart!", "  Cart Total: $0.00"]);
    }

    #[test]
    fn test_cart_lines_with_items() {
        let catalog = Catalog::new(vec![Product::new("a", "Alpha", Money::new(350))]).unwrap();
        let mut manager = CartManager::default();
        manager.add_item(&ProductId::new("a"), &catalog).unwrap();
        manager.add_item(&ProductId::new("a"), &catalog).unwrap();

        let lines = cart_lines(manager.state(), &PriceFormat::default()).unwrap();
        assert_eq!(lines, vec!["  Alpha ($3.50) x2 = $7.00", "  Cart Total: $7.00"]);
    }

    #[test]
    fn test_describe_command() {
        assert_eq!(describe(&CartCommand::add("p1")), "add p1");
        assert_eq!(describe(&CartCommand::update("p1", -1)), "update p1 -1");
        assert_eq!(describe(&CartCommand::update("p1", 3)), "update p1 +3");
    }
}
