pub mod ast;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{BinOp, Expr, Token, UnOp};
pub use evaluator::Evaluator;
pub use lexer::Lexer;
pub use output::to_postfix;
pub use parser::{ParseError, Parser};

/// Evaluates an expression string to a single number.
///
/// This is the one call a host embeds: it lexes, parses, and evaluates in one
/// pass, returning either the numeric result or a typed parse failure. There
/// is no partial evaluation; malformed input never produces a value.
///
/// # Examples
///
/// ```
/// use mace_lang::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("5 > 3 && 2 == 2").unwrap(), 1.0);
/// assert!(evaluate("(1 + 2").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<f64, ParseError> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let expr = parser.parse()?;

    Ok(Evaluator::new().eval(&expr))
}
