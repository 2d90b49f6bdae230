mod display;
mod eval;

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::BigInt;

use crate::error::ParseError;
use crate::op::OpKind;

/// A node is an operation in the AST (abstract syntax tree).
///
/// Every node exclusively owns its children. The parser only ever pairs a
/// binary kind with `BinOp` and a unary kind with `UnOp`, so evaluation and
/// rendering never re-check arity.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Node {
    Num {
        /// The number the node represents
        val: BigInt,
    },
    BinOp {
        op: OpKind,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    UnOp {
        op: OpKind,
        operand: Box<Node>,
    },
}

impl Node {
    /// Evaluates the node value.
    pub fn eval(&self) -> Result<BigInt, ParseError> {
        eval::eval(self)
    }

    pub(crate) fn bin_op(op: OpKind, lhs: Node, rhs: Node) -> Node {
        Node::BinOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub(crate) fn un_op(op: OpKind, operand: Node) -> Node {
        Node::UnOp {
            op,
            operand: Box::new(operand),
        }
    }
}

impl Add for Node {
    type Output = Node;

    fn add(self, rhs: Self) -> Self::Output {
        Node::bin_op(OpKind::Add, self, rhs)
    }
}

impl Sub for Node {
    type Output = Node;

    fn sub(self, rhs: Self) -> Self::Output {
        Node::bin_op(OpKind::Sub, self, rhs)
    }
}

impl Mul for Node {
    type Output = Node;

    fn mul(self, rhs: Self) -> Self::Output {
        Node::bin_op(OpKind::Mul, self, rhs)
    }
}

impl Div for Node {
    type Output = Node;

    fn div(self, rhs: Self) -> Self::Output {
        Node::bin_op(OpKind::Div, self, rhs)
    }
}

impl Neg for Node {
    type Output = Node;

    fn neg(self) -> Self::Output {
        Node::un_op(OpKind::UnaryMinus, self)
    }
}
