//! Evaluate expressions supplied on the command line or stdin

use super::CliError;
use crate::{to_postfix, Evaluator, Lexer, Parser};

/// Options for the eval command
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// The expression to evaluate
    pub expression: String,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
    /// Include a postfix rendering of the parsed expression
    pub postfix: bool,
}

/// Result of an eval operation
#[derive(Debug)]
pub enum EvalOutcome {
    /// Syntax validation passed
    SyntaxValid,
    /// Expression evaluated successfully
    Success {
        result: f64,
        postfix: Option<String>,
    },
}

/// Execute a mace eval operation
pub fn execute_eval(options: &EvalOptions) -> Result<EvalOutcome, CliError> {
    let lexer = Lexer::new(&options.expression);
    let mut parser = Parser::new(lexer);
    let expr = parser.parse().map_err(CliError::Parse)?;

    if options.syntax_only {
        return Ok(EvalOutcome::SyntaxValid);
    }

    let result = Evaluator::new().eval(&expr);
    let postfix = options.postfix.then(|| to_postfix(&expr));

    Ok(EvalOutcome::Success { result, postfix })
}
