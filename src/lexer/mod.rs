mod token;

use std::iter::FusedIterator;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::ParseError;

pub use self::token::*;

/// Reads all tokens in the expression, failing on the first character
/// outside the recognized alphabet.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(expr).collect()
}

/// A lexer reads a mathematical expression and returns a list of tokens in
/// the expression.
/// This allows us to read the expression in a simpler way later when we want
/// to parse it.
pub struct Lexer<'a> {
    expr: &'a [u8],
    index: usize,
    has_failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer from an expression.
    pub fn new(expr: &str) -> Lexer {
        Lexer {
            expr: expr.as_bytes(),
            index: 0,
            has_failed: false,
        }
    }

    fn consume_whitespace(&mut self) {
        while self.index < self.expr.len() {
            match self.expr[self.index] as char {
                ' ' | '\n' | '\r' | '\t' => {}
                _ => break,
            }

            self.index += 1;
        }
    }

    fn try_consume_single_char_token(&mut self) -> Option<Token> {
        if self.index < self.expr.len() {
            let original_index = self.index;
            let c = self.expr[self.index] as char;

            if let Some(kind) = TokenKind::from_single_char(c) {
                // consume the character
                self.index += 1;

                return Some(Token {
                    kind,
                    span: Span::new(original_index, self.index),
                });
            }
        }

        None
    }

    fn try_consume_num(&mut self) -> Option<Token> {
        let original_index = self.index;
        let mut val: BigUint = Zero::zero();
        let mut has_digit = false;

        while self.index < self.expr.len() {
            let c = self.expr[self.index] as char;

            match c.to_digit(10) {
                Some(digit) => {
                    val *= 10u32;
                    val += digit;

                    has_digit = true;
                }
                None => break,
            }

            self.index += 1;
        }

        if !has_digit {
            self.index = original_index;
            return None;
        }

        Some(Token {
            kind: TokenKind::Num { val },
            span: Span::new(original_index, self.index),
        })
    }
}

// This means that when it returns a none option, then it will keep returning
// none options.
impl<'a> FusedIterator for Lexer<'a> {}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_failed {
            return None;
        }

        self.consume_whitespace();

        // is there anything left?
        if self.index >= self.expr.len() {
            return None;
        }

        let original_index = self.index;
        let maybe_token = self
            .try_consume_single_char_token()
            .or_else(|| self.try_consume_num());

        Some(maybe_token.ok_or_else(|| {
            self.has_failed = true;

            // if we didn't get any token, then the character is unknown
            ParseError::UnknownChar {
                ch: self.expr[original_index] as char,
                index: original_index,
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::op::OpKind;

    #[test]
    fn it_handles_empty_string() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next(), None);

        assert_eq!(tokenize(""), Ok(Vec::new()));
    }

    #[test]
    fn it_ignores_whitespace() {
        let mut lexer = Lexer::new("\t+ \r\n");
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: TokenKind::Op(OpKind::Add),
                span: Span::new(1, 2),
            }))
        );
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn it_handles_single_char_tokens() {
        const EXPECTED: [TokenKind; 6] = [
            TokenKind::Op(OpKind::Add),
            TokenKind::Op(OpKind::Sub),
            TokenKind::Op(OpKind::Mul),
            TokenKind::Op(OpKind::Div),
            TokenKind::Paren { is_open: true },
            TokenKind::Paren { is_open: false },
        ];

        let expected_tokens: Vec<Token> = EXPECTED
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, kind)| Token {
                kind,
                span: Span::new(i, i + 1),
            })
            .collect();

        let actual_tokens = tokenize("+-*/()").unwrap();

        assert_eq!(actual_tokens, expected_tokens);
    }

    #[test]
    fn it_handles_integer_numbers() {
        let mut lexer = Lexer::new("123");
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: TokenKind::Num {
                    val: BigUint::from(123u32),
                },
                span: Span::new(0, 3),
            }))
        );
        assert_eq!(lexer.next(), None);

        // the sign is not part of the number token
        let tokens = tokenize("-123").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token {
                    kind: TokenKind::Op(OpKind::Sub),
                    span: Span::new(0, 1),
                },
                Token {
                    kind: TokenKind::Num {
                        val: BigUint::from(123u32),
                    },
                    span: Span::new(1, 4),
                },
            ]
        );
    }

    #[test]
    fn it_splits_numbers_on_whitespace() {
        let tokens = tokenize("12 34").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token {
                    kind: TokenKind::Num {
                        val: BigUint::from(12u32),
                    },
                    span: Span::new(0, 2),
                },
                Token {
                    kind: TokenKind::Num {
                        val: BigUint::from(34u32),
                    },
                    span: Span::new(3, 5),
                },
            ]
        );
    }

    #[test]
    fn it_handles_numbers_beyond_machine_width() {
        let tokens = tokenize("340282366920938463463374607431768211457").unwrap();
        assert_eq!(tokens.len(), 1);
        match &tokens[0].kind {
            TokenKind::Num { val } => {
                assert_eq!(
                    val.to_string(),
                    "340282366920938463463374607431768211457"
                );
            }
            other => panic!("expected a number, got {:?}", other),
        }
    }

    #[test]
    fn it_rejects_unknown_characters() {
        let mut lexer = Lexer::new("1 + a");
        assert!(lexer.next().unwrap().is_ok());
        assert!(lexer.next().unwrap().is_ok());
        assert_eq!(
            lexer.next(),
            Some(Err(ParseError::UnknownChar { ch: 'a', index: 4 }))
        );
        // the lexer is fused after a failure
        assert_eq!(lexer.next(), None);

        assert_eq!(
            tokenize("2 ^ 3"),
            Err(ParseError::UnknownChar { ch: '^', index: 2 })
        );
    }

    #[test]
    fn it_displays_tokens_in_source_form() {
        let rendered: Vec<String> = tokenize("(1 + 23) / 4")
            .unwrap()
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(rendered, ["(", "1", "+", "23", ")", "/", "4"]);
    }
}
