use log::{debug, trace};
use num_bigint::BigInt;

use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};
use crate::node::Node;
use crate::op::{Arity, Assoc, OpKind};

/// A parser converts a list of tokens into an AST (abstract syntax tree).
///
/// The algorithm is shunting-yard: one stack of pending operators (mixed
/// with markers for open parentheses), one stack of finished operands, and a
/// flag tracking whether the next operator token must be a prefix operator.
pub struct Parser<'a> {
    tokens: &'a [Token],
}

/// An entry on the operator stack.
enum StackEntry {
    Op(OpKind),
    /// The marker an opening parenthesis leaves behind; a closing
    /// parenthesis reduces down to it and discards it.
    OpenParen,
}

/// The whole state of one `parse` call. It lives on the parser's stack
/// frame, so parsing is reentrant and a failed parse leaves nothing behind.
struct ParseState {
    ops: Vec<StackEntry>,
    operands: Vec<Node>,
    expecting_operand: bool,
}

impl ParseState {
    fn new() -> ParseState {
        ParseState {
            ops: Vec::new(),
            operands: Vec::new(),
            // an expression always starts with an operand or a prefix
            expecting_operand: true,
        }
    }

    fn pop_operand(&mut self) -> Result<Node, ParseError> {
        self.operands.pop().ok_or(ParseError::MalformedExpression)
    }

    /// Combines one popped operator with its operands into a single node and
    /// pushes the node back as an operand.
    fn reduce(&mut self, op: OpKind) -> Result<(), ParseError> {
        trace!("reduce {:?}", op);
        let node = match op.arity() {
            Arity::Binary => {
                // the right operand was pushed last
                let rhs = self.pop_operand()?;
                let lhs = self.pop_operand()?;
                Node::bin_op(op, lhs, rhs)
            }
            Arity::Unary => {
                let operand = self.pop_operand()?;
                Node::un_op(op, operand)
            }
        };
        self.operands.push(node);
        Ok(())
    }

    /// Reduces every stacked operator that binds at least as tightly as the
    /// incoming one, then stacks the incoming operator.
    ///
    /// On an equal-precedence tie, a left-associative incoming operator
    /// reduces (`1 - 2 - 3` groups as `(1 - 2) - 3`) while a
    /// right-associative one stacks (`--1` nests instead of failing).
    fn push_operator(&mut self, incoming: OpKind) -> Result<(), ParseError> {
        while let Some(StackEntry::Op(top)) = self.ops.last() {
            let reduce_now = match incoming.assoc() {
                Assoc::Left => top.precedence() >= incoming.precedence(),
                Assoc::Right => top.precedence() > incoming.precedence(),
            };
            if !reduce_now {
                break;
            }

            let top = *top;
            self.ops.pop();
            self.reduce(top)?;
        }

        self.ops.push(StackEntry::Op(incoming));
        Ok(())
    }

    /// Reduces until the matching open-parenthesis marker and discards it.
    fn close_paren(&mut self, index: usize) -> Result<(), ParseError> {
        loop {
            match self.ops.pop() {
                Some(StackEntry::Op(op)) => self.reduce(op)?,
                Some(StackEntry::OpenParen) => return Ok(()),
                None => return Err(ParseError::MismatchedParen { index }),
            }
        }
    }

    /// Drains the operator stack and returns the one remaining operand.
    fn finish(mut self) -> Result<Node, ParseError> {
        while let Some(entry) = self.ops.pop() {
            match entry {
                StackEntry::Op(op) => self.reduce(op)?,
                StackEntry::OpenParen => return Err(ParseError::UnclosedParen),
            }
        }

        let root = self.pop_operand()?;
        if !self.operands.is_empty() {
            // more than one operand left: two adjacent operands in the input
            return Err(ParseError::MalformedExpression);
        }
        Ok(root)
    }
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &[Token]) -> Parser {
        Parser { tokens }
    }

    pub fn parse(self) -> Result<Node, ParseError> {
        let mut state = ParseState::new();

        for token in self.tokens {
            match &token.kind {
                TokenKind::Num { val } => {
                    state.operands.push(Node::Num {
                        val: BigInt::from(val.clone()),
                    });
                    state.expecting_operand = false;
                }
                TokenKind::Op(op) => {
                    // In operand position an operator can only be a prefix:
                    // reclassify it, leaving the token itself untouched.
                    let op = if state.expecting_operand {
                        op.as_unary().ok_or(ParseError::ExpectedExpression {
                            index: token.span.start,
                        })?
                    } else {
                        *op
                    };

                    // an operator always expects an operand after it
                    state.expecting_operand = true;
                    state.push_operator(op)?;
                }
                TokenKind::Paren { is_open: true } => {
                    state.ops.push(StackEntry::OpenParen);
                    state.expecting_operand = true;
                }
                TokenKind::Paren { is_open: false } => {
                    state.close_paren(token.span.start)?;
                    state.expecting_operand = false;
                }
            }
        }

        let root = state.finish()?;
        debug!("parsed expression: {}", root);
        Ok(root)
    }
}
