//! Cart session script parsing.
//!
//! One instruction per line:
//!
//! ```text
//! add <id>              # add one unit from the catalog
//! inc <id>              # quantity +1
//! dec <id>              # quantity -1
//! update <id> <delta>   # quantity +delta (any integer)
//! show                  # print the cart
//! total                 # print the total
//! ```
//!
//! `#` starts a comment; blank lines are ignored.

use shopcart_core::{CartCommand, ProductId};
use thiserror::Error;

/// A parsed script instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Apply a cart command.
    Command(CartCommand),
    /// Print the cart.
    Show,
    /// Print the total.
    Total,
}

/// Script syntax errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    /// Unrecognized instruction keyword.
    #[error("unknown instruction '{0}'")]
    UnknownInstruction(String),

    /// Wrong number of arguments.
    #[error("'{instruction}' expects {expected}")]
    WrongArguments {
        instruction: &'static str,
        expected: &'static str,
    },

    /// Delta is not an integer.
    #[error("invalid delta '{0}': expected an integer")]
    InvalidDelta(String),
}

/// Parse one script line. Returns `None` for blank and comment-only lines.
pub fn parse_line(line: &str) -> Result<Option<Instruction>, ScriptError> {
    let code = line.split('#').next().unwrap_or("").trim();
    if code.is_empty() {
        return Ok(None);
    }

    let mut words = code.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = words.collect();

    let instruction = match (keyword.as_str(), args.as_slice()) {
        ("add", [id]) => Instruction::Command(CartCommand::add(*id)),
        ("add", _) => return Err(wrong("add", "a product id")),
        ("inc", [id]) => Instruction::Command(CartCommand::update(*id, 1)),
        ("inc", _) => return Err(wrong("inc", "a product id")),
        ("dec", [id]) => Instruction::Command(CartCommand::update(*id, -1)),
        ("dec", _) => return Err(wrong("dec", "a product id")),
        ("update", [id, delta]) => Instruction::Command(CartCommand::UpdateQuantity {
            product_id: ProductId::new(*id),
            delta: parse_delta(delta)?,
        }),
        ("update", _) => return Err(wrong("update", "a product id and a delta")),
        ("show", []) => Instruction::Show,
        ("show", _) => return Err(wrong("show", "no arguments")),
        ("total", []) => Instruction::Total,
        ("total", _) => return Err(wrong("total", "no arguments")),
        (other, _) => return Err(ScriptError::UnknownInstruction(other.to_string())),
    };

    Ok(Some(instruction))
}

fn wrong(instruction: &'static str, expected: &'static str) -> ScriptError {
    ScriptError::WrongArguments {
        instruction,
        expected,
    }
}

fn parse_delta(raw: &str) -> Result<i64, ScriptError> {
    raw.strip_prefix('+')
        .unwrap_or(raw)
        .parse()
        .map_err(|_| ScriptError::InvalidDelta(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_line("add p1").unwrap(),
            Some(Instruction::Command(CartCommand::add("p1")))
        );
        assert_eq!(
            parse_line("  INC p1  ").unwrap(),
            Some(Instruction::Command(CartCommand::update("p1", 1)))
        );
        assert_eq!(
            parse_line("dec p1").unwrap(),
            Some(Instruction::Command(CartCommand::update("p1", -1)))
        );
        assert_eq!(
            parse_line("update p1 +5").unwrap(),
            Some(Instruction::Command(CartCommand::update("p1", 5)))
        );
        assert_eq!(
            parse_line("update p1 -12").unwrap(),
            Some(Instruction::Command(CartCommand::update("p1", -12)))
        );
    }

    #[test]
    fn test_parse_queries() {
        assert_eq!(parse_line("show").unwrap(), Some(Instruction::Show));
        assert_eq!(parse_line("total # running sum").unwrap(), Some(Instruction::Total));
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# just a note").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_line("remove p1"),
            Err(ScriptError::UnknownInstruction("remove".to_string()))
        );
        assert!(matches!(
            parse_line("add"),
            Err(ScriptError::WrongArguments { instruction: "add", .. })
        ));
        assert_eq!(
            parse_line("update p1 lots"),
            Err(ScriptError::InvalidDelta("lots".to_string()))
        );
        assert!(parse_line("show p1").is_err());
    }
}
