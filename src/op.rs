use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::ParseError;

/// A list of all operators, unary and binary.
///
/// All operator metadata (precedence, arity, associativity, symbol, and the
/// semantic function) lives here so that the parser and the evaluator read
/// from the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    UnaryPlus,
    UnaryMinus,
}

/// How many operands an operator takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

/// How equal-precedence operators group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

impl OpKind {
    /// Binding power: unary operators bind tighter than any binary one.
    pub fn precedence(self) -> u8 {
        match self {
            OpKind::Add | OpKind::Sub => 5,
            OpKind::Mul | OpKind::Div => 10,
            OpKind::UnaryPlus | OpKind::UnaryMinus => 15,
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            OpKind::Add | OpKind::Sub | OpKind::Mul | OpKind::Div => Arity::Binary,
            OpKind::UnaryPlus | OpKind::UnaryMinus => Arity::Unary,
        }
    }

    /// All binary operators group left to right; prefix operators apply
    /// right to left.
    pub fn assoc(self) -> Assoc {
        match self.arity() {
            Arity::Binary => Assoc::Left,
            Arity::Unary => Assoc::Right,
        }
    }

    /// The character used when rendering the operator.
    pub fn symbol(self) -> char {
        match self {
            OpKind::Add | OpKind::UnaryPlus => '+',
            OpKind::Sub | OpKind::UnaryMinus => '-',
            OpKind::Mul => '*',
            OpKind::Div => '/',
        }
    }

    /// The unary counterpart of a binary operator, if it has one.
    ///
    /// The lexer only ever emits binary kinds; the parser calls this when an
    /// operator shows up where an operand is expected. Returns a new value
    /// instead of rewriting the token.
    pub fn as_unary(self) -> Option<OpKind> {
        Some(match self {
            OpKind::Add => OpKind::UnaryPlus,
            OpKind::Sub => OpKind::UnaryMinus,
            _ => return None,
        })
    }

    /// Applies a binary operator. Division truncates toward zero.
    pub fn apply_binary(self, lhs: &BigInt, rhs: &BigInt) -> Result<BigInt, ParseError> {
        Ok(match self {
            OpKind::Add => lhs + rhs,
            OpKind::Sub => lhs - rhs,
            OpKind::Mul => lhs * rhs,
            OpKind::Div => {
                if rhs.is_zero() {
                    return Err(ParseError::DivisionByZero);
                }
                lhs / rhs
            }
            OpKind::UnaryPlus | OpKind::UnaryMinus => {
                unreachable!("apply_binary called with a unary operator")
            }
        })
    }

    /// Applies a unary operator.
    pub fn apply_unary(self, operand: BigInt) -> BigInt {
        match self {
            OpKind::UnaryPlus => operand,
            OpKind::UnaryMinus => -operand,
            _ => unreachable!("apply_unary called with a binary operator"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_orders_precedence_correctly() {
        assert!(OpKind::Add.precedence() < OpKind::Mul.precedence());
        assert!(OpKind::Sub.precedence() < OpKind::Div.precedence());
        assert!(OpKind::Mul.precedence() < OpKind::UnaryMinus.precedence());
        assert_eq!(OpKind::Add.precedence(), OpKind::Sub.precedence());
        assert_eq!(OpKind::Mul.precedence(), OpKind::Div.precedence());
        assert_eq!(
            OpKind::UnaryPlus.precedence(),
            OpKind::UnaryMinus.precedence()
        );
    }

    #[test]
    fn it_reclassifies_only_plus_and_minus() {
        assert_eq!(OpKind::Add.as_unary(), Some(OpKind::UnaryPlus));
        assert_eq!(OpKind::Sub.as_unary(), Some(OpKind::UnaryMinus));
        assert_eq!(OpKind::Mul.as_unary(), None);
        assert_eq!(OpKind::Div.as_unary(), None);
    }

    #[test]
    fn it_truncates_division_toward_zero() {
        let div = |a: i64, b: i64| {
            OpKind::Div
                .apply_binary(&BigInt::from(a), &BigInt::from(b))
                .unwrap()
        };
        assert_eq!(div(7, 2), BigInt::from(3));
        assert_eq!(div(-7, 2), BigInt::from(-3));
        assert_eq!(div(7, -2), BigInt::from(-3));
        assert_eq!(div(-7, -2), BigInt::from(3));
    }

    #[test]
    fn it_reports_division_by_zero() {
        assert_eq!(
            OpKind::Div.apply_binary(&BigInt::from(1), &BigInt::from(0)),
            Err(ParseError::DivisionByZero)
        );
    }
}
