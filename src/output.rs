//! Postfix rendering of parsed expressions.
//!
//! A debugging aid for inspecting what the parser built: each node prints its
//! operands left to right followed by its operator, with tokens separated by
//! single spaces. The rendering has no evaluation semantics.
//!
//! # Examples
//!
//! ```
//! use mace_lang::{Lexer, Parser, to_postfix};
//!
//! let mut parser = Parser::new(Lexer::new("2 + 3 * 4"));
//! let expr = parser.parse().unwrap();
//!
//! assert_eq!(to_postfix(&expr), "2 3 4 * +");
//! ```

use crate::ast::Expr;

/// Render an expression tree as a space-separated postfix token string.
pub fn to_postfix(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(expr, &mut out);
    out
}

fn write_expr(expr: &Expr, out: &mut String) {
    match expr {
        Expr::Number(value) => push_token(out, &value.to_string()),
        Expr::UnaryOp { op, operand } => {
            write_expr(operand, out);
            push_token(out, op.symbol());
        }
        Expr::BinaryOp { op, left, right } => {
            write_expr(left, out);
            write_expr(right, out);
            push_token(out, op.symbol());
        }
    }
}

fn push_token(out: &mut String, token: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(token);
}
