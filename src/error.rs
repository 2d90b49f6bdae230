use thiserror::Error;

/// When the expression is malformed, every stage of the pipeline reports
/// through this error. Positions are byte indices into the source string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character outside the recognized alphabet was found.
    #[error("unknown character {ch:?} at index {index}")]
    UnknownChar { ch: char, index: usize },

    /// An operator appeared where an operand was required and it is not a
    /// valid prefix operator (`*` and `/` cannot be unary).
    #[error("expected an expression at index {index}")]
    ExpectedExpression { index: usize },

    /// A closing parenthesis with no matching open parenthesis.
    #[error("mismatched closing parenthesis at index {index}")]
    MismatchedParen { index: usize },

    /// The expression ended with an open parenthesis still unclosed.
    #[error("unclosed parenthesis")]
    UnclosedParen,

    /// The parse did not finish with exactly one expression: empty input,
    /// adjacent operands, or a missing operand.
    #[error("malformed expression")]
    MalformedExpression,

    /// The right operand of a division evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,
}
