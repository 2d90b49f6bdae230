use num_bigint::BigInt;

use super::Node;
use crate::error::ParseError;

/// Computes the node value.
///
/// Total over any tree the parser builds, except that a division whose right
/// operand evaluates to zero reports [`ParseError::DivisionByZero`].
pub fn eval(node: &Node) -> Result<BigInt, ParseError> {
    Ok(match node {
        Node::Num { val } => val.clone(),
        Node::BinOp { op, lhs, rhs } => {
            let lhs = eval(lhs)?;
            let rhs = eval(rhs)?;
            op.apply_binary(&lhs, &rhs)?
        }
        Node::UnOp { op, operand } => op.apply_unary(eval(operand)?),
    })
}
