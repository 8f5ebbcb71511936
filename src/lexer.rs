use crate::ast::{Token, TokenAt};
use num_bigint::BigInt;

/// Scans a filter expression into a sequence of positioned tokens.
///
/// The lexer holds the only mutable state (the read cursor) and yields
/// one token per call to [`next_token`](Lexer::next_token). Positions
/// are rune offsets into the input. Malformed input never aborts the
/// scan: it is reported as [`Token::Illegal`] and left for the parser
/// to reject.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Identifiers start with a letter or `_` and continue with letters,
    /// `_`, and `.` (dotted path segments).
    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphabetic() || ch == '_' || ch == '.' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Strings read verbatim until either quote character or end of
    /// input. An unterminated string lexes successfully; no escape
    /// sequences are recognized.
    fn read_string(&mut self) -> Token {
        let mut result = String::new();
        self.advance(); // consume opening quote

        while let Some(ch) = self.current_char() {
            self.advance();
            if ch == '"' || ch == '\'' {
                break;
            }
            result.push(ch);
        }

        Token::String(result)
    }

    /// A digit starts an integer literal; a single `.` switches to float
    /// accumulation, a second `.` makes the whole literal illegal.
    fn read_number(&mut self) -> Token {
        let mut number = String::new();
        let mut dot_found = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.' {
                self.advance();
                if dot_found {
                    number.push(ch);
                    return Token::Illegal(number);
                }
                dot_found = true;
                number.push(ch);
            } else {
                break;
            }
        }

        if dot_found {
            match number.parse::<f64>() {
                Ok(value) => Token::Float(value),
                Err(_) => Token::Illegal(number),
            }
        } else {
            match number.parse::<BigInt>() {
                Ok(value) => Token::Integer(value),
                Err(_) => Token::Illegal(number),
            }
        }
    }

    /// `>` and `<` must be followed by `=` or whitespace; an attached
    /// operand with no separating space is illegal.
    fn read_angle(&mut self, symbol: char, tight: Token, wide: Token) -> Token {
        self.advance();
        match self.current_char() {
            Some('=') => {
                self.advance();
                tight
            }
            Some(next) if !next.is_whitespace() => {
                self.advance();
                Token::Illegal(format!("{}{}", symbol, next))
            }
            _ => wide,
        }
    }

    /// `&&` and `||` only exist doubled; a lone `&` or `|` is illegal.
    fn read_doubled(&mut self, expected: char, token: Token) -> Token {
        self.advance();
        if self.current_char() == Some(expected) {
            self.advance();
            token
        } else {
            Token::Illegal(expected.to_string())
        }
    }

    /// Scans the next token, skipping leading whitespace, and returns it
    /// together with the rune offset where it started.
    pub fn next_token(&mut self) -> TokenAt {
        self.skip_whitespace();

        let position = self.position;
        let token = match self.current_char() {
            None => Token::Eof,
            Some('=') => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    Token::EqEq
                } else {
                    Token::Illegal("=".to_string())
                }
            }
            Some('!') => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    Token::NotEq
                } else {
                    Token::Not
                }
            }
            Some('>') => self.read_angle('>', Token::GtEq, Token::Gt),
            Some('<') => self.read_angle('<', Token::LtEq, Token::Lt),
            Some('&') => self.read_doubled('&', Token::And),
            Some('|') => self.read_doubled('|', Token::Or),
            Some('"') | Some('\'') => self.read_string(),
            Some('(') => {
                self.advance();
                Token::LParen
            }
            Some(')') => {
                self.advance();
                Token::RParen
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number(),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                let ident = self.read_identifier();
                match ident.as_str() {
                    "true" => Token::Boolean(true),
                    "false" => Token::Boolean(false),
                    _ => Token::Identifier(ident),
                }
            }
            Some(ch) => {
                self.advance();
                Token::Illegal(ch.to_string())
            }
        };

        TokenAt { token, position }
    }
}
