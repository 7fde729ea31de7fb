use crate::ast::{BinOp, Expr, UnOp};

/// The expression evaluator.
///
/// Reduces a parsed AST to a single `f64` by a recursive tree walk. Evaluation
/// is total: every AST the parser can produce evaluates without error, and
/// numeric edge cases resolve through IEEE-754 float semantics (division by
/// zero yields infinity or NaN rather than failing). The walk takes the tree
/// by shared reference and never mutates it, so the same AST can be evaluated
/// repeatedly and from multiple threads at once.
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Evaluator
    }

    /// Evaluates an expression tree to a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use mace_lang::{Evaluator, Lexer, Parser};
    ///
    /// let mut parser = Parser::new(Lexer::new("2 + 3 * 4"));
    /// let expr = parser.parse().unwrap();
    ///
    /// assert_eq!(Evaluator::new().eval(&expr), 14.0);
    /// ```
    pub fn eval(&self, expr: &Expr) -> f64 {
        match expr {
            Expr::Number(value) => *value,

            Expr::UnaryOp {
                op: UnOp::Negate,
                operand,
            } => -self.eval(operand),

            // Both operands are reduced before the operator is applied, so
            // `&&` and `||` cannot short-circuit.
            Expr::BinaryOp { op, left, right } => {
                let left = self.eval(left);
                let right = self.eval(right);
                self.apply_binop(*op, left, right)
            }
        }
    }

    fn apply_binop(&self, op: BinOp, left: f64, right: f64) -> f64 {
        match op {
            // Truncated toward zero, so 2^-1 is 0 and (1/2)^1 is 0.
            BinOp::Power => left.powf(right).trunc(),
            BinOp::Multiply => left * right,
            BinOp::Divide => left / right,
            BinOp::Add => left + right,
            BinOp::Subtract => left - right,

            BinOp::Equal => bool_to_num(left == right),
            BinOp::NotEqual => bool_to_num(left != right),
            BinOp::GreaterThan => bool_to_num(left > right),
            BinOp::LessThan => bool_to_num(left < right),
            BinOp::GreaterEqual => bool_to_num(left >= right),
            BinOp::LessEqual => bool_to_num(left <= right),

            BinOp::And => bool_to_num(is_truthy(left) && is_truthy(right)),
            BinOp::Or => bool_to_num(is_truthy(left) || is_truthy(right)),
        }
    }
}

/// Any non-zero value is truthy, including NaN and the infinities.
fn is_truthy(value: f64) -> bool {
    value != 0.0
}

fn bool_to_num(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}
