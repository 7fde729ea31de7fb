use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Number literal, carried as the scanned digit run
    ///
    /// The lexer accumulates consecutive ASCII digits without interpreting
    /// them; the parser converts the string to `f64`. No sign, decimal point,
    /// or exponent notation is part of the literal.
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 007
    /// ```
    Number(String),

    // Arithmetic
    /// Exponentiation (`^`)
    Caret,

    /// Multiplication (`*`)
    Star,

    /// Division (`/`)
    Slash,

    /// Addition (`+`)
    Plus,

    /// Subtraction or unary negation (`-`)
    Minus,

    // Comparison
    /// Equality operator (`==`)
    EqEq,

    /// Inequality operator (`!=`)
    NotEq,

    /// Less than (`<`)
    Lt,

    /// Greater than (`>`)
    Gt,

    /// Less than or equal (`<=`)
    LtEq,

    /// Greater than or equal (`>=`)
    GtEq,

    // Logical
    /// Logical AND (`&&`)
    ///
    /// Both operands are always evaluated; there is no short-circuiting.
    AndAnd,

    /// Logical OR (`||`)
    ///
    /// Both operands are always evaluated; there is no short-circuiting.
    OrOr,

    // Delimiters
    /// Left parenthesis for grouping
    LParen,

    /// Right parenthesis
    RParen,

    /// End of input
    Eof,

    /// Unrecognized character
    ///
    /// The lexer never fails: anything it cannot classify is consumed and
    /// carried here, and the parser rejects it with a typed error. A lone `=`,
    /// `!`, `&`, or `|` lexes as `Undefined` since the grammar has no
    /// single-character form of those operators.
    Undefined(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(digits) => write!(f, "{}", digits),
            Token::Caret => write!(f, "^"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::EqEq => write!(f, "=="),
            Token::NotEq => write!(f, "!="),
            Token::Lt => write!(f, "<"),
            Token::Gt => write!(f, ">"),
            Token::LtEq => write!(f, "<="),
            Token::GtEq => write!(f, ">="),
            Token::AndAnd => write!(f, "&&"),
            Token::OrOr => write!(f, "||"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Eof => write!(f, "end of input"),
            Token::Undefined(ch) => write!(f, "{}", ch),
        }
    }
}
