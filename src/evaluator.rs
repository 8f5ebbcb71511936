use num_bigint::BigInt;
use num_traits::FromPrimitive;
use std::cmp::Ordering;
use std::fmt;

use crate::{
    ast::{BinOp, Expr, Literal},
    lexer::Lexer,
    parser::{ParseError, Parser},
    store::{FindError, Store},
    value::Value,
};

/// Errors that can occur while evaluating a compiled filter.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The two operand kinds cannot be compared at all (e.g. string vs
    /// integer).
    IncompatibleTypes {
        left: &'static str,
        right: &'static str,
        op: BinOp,
        position: usize,
    },

    /// The operand kinds are comparable, but not with this operator
    /// (e.g. `<` on two strings). Names the allowed operator set.
    UnsupportedOperator {
        op: BinOp,
        left: &'static str,
        right: &'static str,
        allowed: &'static str,
        position: usize,
    },

    /// A boolean was required (unary `!` operand, or the final result)
    /// but another kind was produced.
    NotBoolean { kind: &'static str, position: usize },

    /// Field lookup failed (not found or ambiguous).
    Lookup { source: FindError, position: usize },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::IncompatibleTypes {
                left,
                right,
                op,
                position,
            } => write!(
                f,
                "incompatible types {} and {} for '{}' at position {}",
                left, right, op, position
            ),
            EvalError::UnsupportedOperator {
                op,
                left,
                right,
                allowed,
                position,
            } => write!(
                f,
                "operator '{}' is not supported for {} and {} at position {} (allowed: {})",
                op, left, right, position, allowed
            ),
            EvalError::NotBoolean { kind, position } => {
                write!(f, "expected a boolean, got {} at position {}", kind, position)
            }
            EvalError::Lookup { source, position } => {
                write!(f, "{} (referenced at position {})", source, position)
            }
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvalError::Lookup { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A compiled filter expression, reusable across evaluations.
///
/// Compilation and evaluation are independent phases: one `Filter` may
/// be evaluated repeatedly, including concurrently, against distinct
/// stores.
///
/// # Examples
///
/// ```
/// use picket_lang::{compile, Store};
///
/// let filter = compile("destination == \"Saturn\" && traveltime > 30000000").unwrap();
///
/// let mut store = Store::new();
/// store.insert("destination", "Saturn");
/// store.insert("traveltime", 50_000_000u64);
///
/// assert!(filter.evaluate(&store).unwrap());
/// ```
pub struct Filter {
    root: Expr,
}

impl Filter {
    /// Evaluates the filter against a store, resolving identifiers
    /// through it. The root expression must reduce to a boolean.
    pub fn evaluate(&self, store: &Store) -> Result<bool, EvalError> {
        match eval(&self.root, store)? {
            Value::Boolean(b) => Ok(b),
            value => Err(EvalError::NotBoolean {
                kind: value.kind(),
                position: self.root.position(),
            }),
        }
    }

    /// The underlying syntax tree.
    pub fn ast(&self) -> &Expr {
        &self.root
    }
}

/// Compiles a filter expression into a reusable [`Filter`], or reports
/// the first lexical or syntax error with its source position.
pub fn compile(input: &str) -> Result<Filter, ParseError> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    Ok(Filter {
        root: parser.parse()?,
    })
}

fn eval(expr: &Expr, store: &Store) -> Result<Value, EvalError> {
    match expr {
        Expr::Literal { value, .. } => Ok(match value {
            Literal::Boolean(b) => Value::Boolean(*b),
            Literal::String(s) => Value::String(s.clone()),
            Literal::Integer(n) => Value::BigInt(n.clone()),
            Literal::Float(n) => Value::Float(*n),
        }),
        Expr::Identifier { name, position } => {
            store.find(name).cloned().map_err(|source| EvalError::Lookup {
                source,
                position: *position,
            })
        }
        Expr::Unary { operand, .. } => match eval(operand, store)? {
            Value::Boolean(b) => Ok(Value::Boolean(!b)),
            value => Err(EvalError::NotBoolean {
                kind: value.kind(),
                position: operand.position(),
            }),
        },
        Expr::Binary {
            op,
            left,
            right,
            position,
        } => {
            // both operands are always evaluated; there is no
            // short-circuiting, even for && and ||
            let left = eval(left, store)?;
            let right = eval(right, store)?;
            apply(*op, left, right, *position)
        }
        Expr::Grouping { inner, .. } => eval(inner, store),
    }
}

fn unsupported(
    op: BinOp,
    left: &Value,
    right: &Value,
    allowed: &'static str,
    position: usize,
) -> EvalError {
    EvalError::UnsupportedOperator {
        op,
        left: left.kind(),
        right: right.kind(),
        allowed,
        position,
    }
}

/// Dispatches one binary operator on the runtime kinds of its operands.
fn apply(op: BinOp, left: Value, right: Value, position: usize) -> Result<Value, EvalError> {
    match (&left, &right) {
        (Value::Boolean(l), Value::Boolean(r)) => match op {
            BinOp::Equal => Ok(Value::Boolean(l == r)),
            BinOp::NotEqual => Ok(Value::Boolean(l != r)),
            BinOp::And => Ok(Value::Boolean(*l && *r)),
            BinOp::Or => Ok(Value::Boolean(*l || *r)),
            _ => Err(unsupported(op, &left, &right, "==, !=, &&, ||", position)),
        },
        (Value::String(l), Value::String(r)) => match op {
            BinOp::Equal => Ok(Value::Boolean(l == r)),
            BinOp::NotEqual => Ok(Value::Boolean(l != r)),
            _ => Err(unsupported(op, &left, &right, "==, !=", position)),
        },
        _ if is_numeric(&left) && is_numeric(&right) => {
            if op.is_boolean() {
                return Err(unsupported(
                    op,
                    &left,
                    &right,
                    "==, !=, <, <=, >, >=",
                    position,
                ));
            }
            let ordering = compare_numeric(&left, &right);
            let result = match op {
                BinOp::Equal => ordering == Some(Ordering::Equal),
                BinOp::NotEqual => ordering != Some(Ordering::Equal),
                BinOp::LessThan => ordering == Some(Ordering::Less),
                BinOp::LessEqual => {
                    matches!(ordering, Some(Ordering::Less | Ordering::Equal))
                }
                BinOp::GreaterThan => ordering == Some(Ordering::Greater),
                BinOp::GreaterEqual => {
                    matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
                }
                BinOp::And | BinOp::Or => unreachable!("rejected above"),
            };
            Ok(Value::Boolean(result))
        }
        _ => Err(EvalError::IncompatibleTypes {
            left: left.kind(),
            right: right.kind(),
            op,
            position,
        }),
    }
}

fn is_numeric(value: &Value) -> bool {
    value.is_integer() || matches!(value, Value::Float(_))
}

/// Three-way comparison across the numeric kinds. `None` means the
/// values admit no ordering (a NaN operand): equality is false and
/// every ordering test fails, while inequality holds.
fn compare_numeric(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Float(l), Value::Float(r)) => l.partial_cmp(r),
        (Value::Float(f), other) => compare_int_float(&other.to_bigint()?, *f).map(Ordering::reverse),
        (other, Value::Float(f)) => compare_int_float(&other.to_bigint()?, *f),
        (l, r) => Some(l.to_bigint()?.cmp(&r.to_bigint()?)),
    }
}

/// Exact comparison of an arbitrary-precision integer against a float.
///
/// The float is truncated toward zero and the rounding direction breaks
/// ties: when the truncation matches the integer exactly, the fraction
/// that was dropped decides the ordering. Equality holds only when the
/// truncation lost nothing. Symmetric by construction; the caller
/// reverses the ordering when the float sits on the left.
fn compare_int_float(int: &BigInt, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float == f64::INFINITY {
        return Some(Ordering::Less);
    }
    if float == f64::NEG_INFINITY {
        return Some(Ordering::Greater);
    }

    let truncated = float.trunc();
    let rounded = BigInt::from_f64(truncated)?;
    match int.cmp(&rounded) {
        // int == trunc(float): the dropped fraction decides
        Ordering::Equal if float > truncated => Some(Ordering::Less),
        Ordering::Equal if float < truncated => Some(Ordering::Greater),
        ordering => Some(ordering),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_rounding_ties() {
        let n = BigInt::from(345);
        assert_eq!(compare_int_float(&n, 345.0), Some(Ordering::Equal));
        assert_eq!(compare_int_float(&n, 345.3), Some(Ordering::Less));
        assert_eq!(compare_int_float(&n, 344.7), Some(Ordering::Greater));
    }

    #[test]
    fn test_exact_rounding_negative() {
        let n = BigInt::from(-235456);
        assert_eq!(compare_int_float(&n, -235456.0), Some(Ordering::Equal));
        assert_eq!(compare_int_float(&n, -235456.3), Some(Ordering::Greater));
        assert_eq!(compare_int_float(&n, -235455.7), Some(Ordering::Less));
    }

    #[test]
    fn test_nan_never_compares() {
        let n = BigInt::from(1);
        assert_eq!(compare_int_float(&n, f64::NAN), None);
    }
}
