use std::fmt;
use std::fmt::{Display, Formatter};

use num_bigint::BigUint;

use crate::op::OpKind;

/// The half-open byte range a token was scanned from, used for error
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Span {
        Span { start, end }
    }
}

/// Tokens are simple things like numbers, operators and parentheses.
///
/// The lexer only emits binary operator kinds; deciding whether a `+` or `-`
/// is unary needs parsing context, so that reclassification belongs to the
/// parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Num { val: BigUint },
    Paren { is_open: bool },
    Op(OpKind),
}

impl TokenKind {
    pub fn from_single_char(c: char) -> Option<TokenKind> {
        Some(match c {
            '+' => TokenKind::Op(OpKind::Add),
            '-' => TokenKind::Op(OpKind::Sub),
            '*' => TokenKind::Op(OpKind::Mul),
            '/' => TokenKind::Op(OpKind::Div),
            '(' => TokenKind::Paren { is_open: true },
            ')' => TokenKind::Paren { is_open: false },
            _ => return None,
        })
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Num { val } => write!(f, "{}", val),
            TokenKind::Paren { is_open: true } => f.write_str("("),
            TokenKind::Paren { is_open: false } => f.write_str(")"),
            TokenKind::Op(op) => write!(f, "{}", op.symbol()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,

    /// The source range the token was scanned from
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}
