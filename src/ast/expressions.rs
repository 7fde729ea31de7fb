use crate::ast::{BinOp, UnOp};

/// Abstract Syntax Tree node representing a parsed expression.
///
/// The AST is the internal representation of an expression after parsing.
/// It is a finite tree: every child is owned exclusively by its parent, so
/// dropping the root drops the whole tree. Nothing mutates the tree after
/// construction, which means one AST may be evaluated repeatedly, and from
/// multiple threads at once, without synchronization.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal number
    ///
    /// # Example
    /// ```text
    /// 42
    /// ```
    Number(f64),

    /// Unary operation
    ///
    /// # Example
    /// ```text
    /// -5
    /// --5        // nests: Negate(Negate(5))
    /// ```
    UnaryOp {
        op: UnOp,
        operand: Box<Expr>,
    },

    /// Binary operation (arithmetic, comparison, logical)
    ///
    /// # Example
    /// ```text
    /// 2 + 3
    /// 5 >= 3 && 1
    /// ```
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}
