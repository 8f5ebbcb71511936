use crate::{
    ast::{BinOp, Expr, Literal, Token, TokenAt},
    lexer::Lexer,
};
use std::{fmt, mem};

/// Errors reported while parsing. Each variant carries the rune offset
/// of the offending token; the parser fails on the first violation and
/// does not attempt recovery.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The lexer produced an illegal token (stray character, malformed
    /// numeric literal, tight comparison).
    IllegalToken { lexeme: String, position: usize },

    /// A well-formed token appeared where the grammar does not allow it.
    UnexpectedToken { token: Token, position: usize },

    /// The input ended in the middle of an expression.
    UnexpectedEof { position: usize },

    /// An open parenthesis was never closed.
    UnmatchedParen { position: usize },

    /// A complete expression was parsed but input remained.
    TrailingInput { token: Token, position: usize },
}

impl ParseError {
    /// Rune offset the error points at.
    pub fn position(&self) -> usize {
        match self {
            ParseError::IllegalToken { position, .. } => *position,
            ParseError::UnexpectedToken { position, .. } => *position,
            ParseError::UnexpectedEof { position } => *position,
            ParseError::UnmatchedParen { position } => *position,
            ParseError::TrailingInput { position, .. } => *position,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::IllegalToken { lexeme, position } => {
                write!(f, "illegal token '{}' at position {}", lexeme, position)
            }
            ParseError::UnexpectedToken { token, position } => {
                write!(f, "unexpected token '{}' at position {}", token, position)
            }
            ParseError::UnexpectedEof { position } => {
                write!(f, "unexpected end of input at position {}", position)
            }
            ParseError::UnmatchedParen { position } => {
                write!(f, "unmatched parenthesis opened at position {}", position)
            }
            ParseError::TrailingInput { token, position } => {
                write!(
                    f,
                    "trailing input '{}' at position {} after a complete expression",
                    token, position
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Recursive-descent parser over the lexer's token sequence.
///
/// Builds an immutable [`Expr`] tree honoring the grammar in
/// [`crate::ast`]. The grammar as factored here needs a single token of
/// lookahead: the decision to extend a comparison into a boolean chain
/// is made after the comparison's right operand has been consumed.
pub struct Parser {
    lexer: Lexer,
    current: TokenAt,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        Parser { lexer, current }
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Parses one complete expression and requires the whole input to be
    /// consumed; anything left over is a syntax error.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.expression()?;
        match &self.current.token {
            Token::Eof => Ok(expr),
            Token::Illegal(lexeme) => Err(ParseError::IllegalToken {
                lexeme: lexeme.clone(),
                position: self.current.position,
            }),
            token => Err(ParseError::TrailingInput {
                token: token.clone(),
                position: self.current.position,
            }),
        }
    }

    /// expression = suffixExpression [ binaryOp suffixExpression [ boolOp expression ] ]
    ///
    /// Chains of `&&`/`||` are right-associative over whole comparison
    /// terms: after one binary node is built, only a boolean connective
    /// may extend it, recursing into `expression` for the remainder.
    fn expression(&mut self) -> Result<Expr, ParseError> {
        let left = self.suffix_expression()?;

        let Some(op) = BinOp::from_token(&self.current.token) else {
            return Ok(left);
        };
        let op_position = self.current.position;
        self.advance();

        let right = self.suffix_expression()?;
        let mut node = Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            position: op_position,
        };

        if let Some(connective) = BinOp::from_token(&self.current.token) {
            if connective.is_boolean() {
                let position = self.current.position;
                self.advance();
                let rest = self.expression()?;
                node = Expr::Binary {
                    op: connective,
                    left: Box::new(node),
                    right: Box::new(rest),
                    position,
                };
            }
        }

        Ok(node)
    }

    /// suffixExpression = literal | NOT suffixExpression | "(" expression ")"
    ///
    /// `!` recurses into `suffixExpression`, not a bracketed expression,
    /// so `!a == b` negates `a` before the comparison.
    fn suffix_expression(&mut self) -> Result<Expr, ParseError> {
        let position = self.current.position;
        match mem::replace(&mut self.current.token, Token::Eof) {
            Token::Integer(n) => {
                self.advance();
                Ok(Expr::Literal {
                    value: Literal::Integer(n),
                    position,
                })
            }
            Token::Float(n) => {
                self.advance();
                Ok(Expr::Literal {
                    value: Literal::Float(n),
                    position,
                })
            }
            Token::String(s) => {
                self.advance();
                Ok(Expr::Literal {
                    value: Literal::String(s),
                    position,
                })
            }
            Token::Boolean(b) => {
                self.advance();
                Ok(Expr::Literal {
                    value: Literal::Boolean(b),
                    position,
                })
            }
            Token::Identifier(name) => {
                self.advance();
                Ok(Expr::Identifier { name, position })
            }
            Token::Not => {
                self.advance();
                let operand = self.suffix_expression()?;
                Ok(Expr::Unary {
                    operand: Box::new(operand),
                    position,
                })
            }
            Token::LParen => {
                self.advance();
                let inner = self.expression()?;
                match &self.current.token {
                    Token::RParen => {
                        let close = self.current.position;
                        self.advance();
                        Ok(Expr::Grouping {
                            inner: Box::new(inner),
                            open: position,
                            close,
                        })
                    }
                    Token::Eof => Err(ParseError::UnmatchedParen { position }),
                    token => Err(ParseError::UnexpectedToken {
                        token: token.clone(),
                        position: self.current.position,
                    }),
                }
            }
            Token::Eof => Err(ParseError::UnexpectedEof { position }),
            Token::Illegal(lexeme) => Err(ParseError::IllegalToken { lexeme, position }),
            token => Err(ParseError::UnexpectedToken { token, position }),
        }
    }
}
