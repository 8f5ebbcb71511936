use num_bigint::BigInt;
use std::fmt;

/// Lexical tokens produced by the lexer.
///
/// Literal tokens carry their parsed payload; everything else is a bare
/// tag. `Illegal` carries the offending lexeme so error messages can show
/// what was actually scanned.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// End of input. Yielded repeatedly once the input is exhausted.
    Eof,

    /// A character sequence that is not part of the grammar
    ///
    /// # Examples
    /// ```text
    /// =
    /// 280.32.
    /// x>5      ('>' must be followed by '=' or a space)
    /// ```
    Illegal(String),

    // Literals
    /// Integer literal, arbitrary precision
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 345738983260257983
    /// ```
    Integer(BigInt),

    /// Floating-point literal (64-bit)
    ///
    /// # Examples
    /// ```text
    /// 280.32
    /// ```
    Float(f64),

    /// String literal enclosed in double or single quotes
    ///
    /// # Examples
    /// ```text
    /// "Saturn"
    /// 'Mars'
    /// ```
    String(String),

    /// Reserved boolean literals `true` and `false`
    Boolean(bool),

    /// Field name, dot-separated path segments permitted
    ///
    /// # Examples
    /// ```text
    /// destination
    /// owner.name
    /// ```
    Identifier(String),

    // Comparison operators
    /// Equality (`==`)
    EqEq,

    /// Inequality (`!=`)
    NotEq,

    /// Greater than (`>`)
    Gt,

    /// Greater than or equal (`>=`)
    GtEq,

    /// Less than (`<`)
    Lt,

    /// Less than or equal (`<=`)
    LtEq,

    // Boolean operators
    /// Logical AND (`&&`)
    And,

    /// Logical OR (`||`)
    Or,

    /// Logical negation (`!`)
    Not,

    // Grouping
    /// Open parenthesis
    LParen,

    /// Close parenthesis
    RParen,
}

impl Token {
    /// Tokens that can stand alone as an operand.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Token::Integer(_)
                | Token::Float(_)
                | Token::String(_)
                | Token::Boolean(_)
                | Token::Identifier(_)
        )
    }

    /// Tokens that can join two operands, comparisons and connectives alike.
    pub fn is_binary_operator(&self) -> bool {
        matches!(
            self,
            Token::EqEq
                | Token::NotEq
                | Token::Gt
                | Token::GtEq
                | Token::Lt
                | Token::LtEq
                | Token::And
                | Token::Or
        )
    }

    /// The two boolean connectives, which chain whole comparison terms.
    pub fn is_boolean_operator(&self) -> bool {
        matches!(self, Token::And | Token::Or)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => write!(f, "EOF"),
            Token::Illegal(s) => write!(f, "ILLEGAL({})", s),
            Token::Integer(n) => write!(f, "{}", n),
            Token::Float(n) => write!(f, "{}", n),
            Token::String(s) => write!(f, "\"{}\"", s),
            Token::Boolean(b) => write!(f, "{}", b),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::EqEq => write!(f, "=="),
            Token::NotEq => write!(f, "!="),
            Token::Gt => write!(f, ">"),
            Token::GtEq => write!(f, ">="),
            Token::Lt => write!(f, "<"),
            Token::LtEq => write!(f, "<="),
            Token::And => write!(f, "&&"),
            Token::Or => write!(f, "||"),
            Token::Not => write!(f, "!"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// A token together with the rune offset where it started.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenAt {
    pub token: Token,
    pub position: usize,
}
