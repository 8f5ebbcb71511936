use crate::ast::BinOp;
use num_bigint::BigInt;

/// A literal constant embedded in the expression source.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `true` or `false`
    Boolean(bool),
    /// Quoted string
    String(String),
    /// Arbitrary-precision integer
    Integer(BigInt),
    /// 64-bit float
    Float(f64),
}

/// Abstract syntax tree node of a compiled filter expression.
///
/// Each node exclusively owns its children; the tree is acyclic and
/// dropped as a unit. Every variant records the rune offset it was
/// parsed at so evaluation errors can point back into the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal constant
    ///
    /// # Examples
    /// ```text
    /// 42
    /// "Saturn"
    /// true
    /// ```
    Literal { value: Literal, position: usize },

    /// Field-path name, resolved against the store at evaluation time
    ///
    /// # Examples
    /// ```text
    /// destination
    /// owner.name
    /// ```
    Identifier { name: String, position: usize },

    /// Logical negation (`!`) of one sub-expression
    Unary {
        operand: Box<Expr>,
        position: usize,
    },

    /// Comparison or boolean connective over two sub-expressions
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        position: usize,
    },

    /// Parenthesized sub-expression. Transparent to evaluation, but the
    /// bracket positions are kept for diagnostics.
    Grouping {
        inner: Box<Expr>,
        open: usize,
        close: usize,
    },
}

impl Expr {
    /// The source position the node starts at (for groupings, the open
    /// parenthesis).
    pub fn position(&self) -> usize {
        match self {
            Expr::Literal { position, .. } => *position,
            Expr::Identifier { position, .. } => *position,
            Expr::Unary { position, .. } => *position,
            Expr::Binary { position, .. } => *position,
            Expr::Grouping { open, .. } => *open,
        }
    }
}
