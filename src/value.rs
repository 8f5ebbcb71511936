use num_bigint::BigInt;

/// A typed value stored in a [`Store`](crate::Store) or produced while
/// evaluating an expression.
///
/// The set of kinds is closed: booleans, strings, signed and unsigned
/// fixed-width integers, floats, and arbitrary-precision integers.
/// `From` conversions cover every supported native width, so the kind
/// restriction of the store is enforced by the type system rather than
/// checked at runtime.
///
/// # Examples
///
/// ```
/// use picket_lang::Value;
///
/// let b: Value = true.into();
/// let s: Value = "Saturn".into();
/// let n: Value = 50_000_000u64.into();
/// let f: Value = 280.32.into();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean
    Boolean(bool),

    /// UTF-8 string
    String(String),

    /// Signed fixed-width integer, widened to 64 bits
    Int(i64),

    /// Unsigned fixed-width integer, widened to 64 bits
    Uint(u64),

    /// 32- or 64-bit float, widened to 64 bits
    Float(f64),

    /// Arbitrary-precision integer
    BigInt(BigInt),
}

impl Value {
    /// Human-readable kind name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
            Value::Int(_) => "integer",
            Value::Uint(_) => "unsigned integer",
            Value::Float(_) => "float",
            Value::BigInt(_) => "integer",
        }
    }

    /// Whether the value belongs to the integer family (fixed-width or
    /// arbitrary precision).
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Uint(_) | Value::BigInt(_))
    }

    /// Promotes an integer-family value to arbitrary precision.
    ///
    /// Returns `None` for booleans, strings, and floats.
    pub fn to_bigint(&self) -> Option<BigInt> {
        match self {
            Value::Int(n) => Some(BigInt::from(*n)),
            Value::Uint(n) => Some(BigInt::from(*n)),
            Value::BigInt(n) => Some(n.clone()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}

macro_rules! impl_from_int {
    ($variant:ident: $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::$variant(n.into())
                }
            }
        )+
    };
}

impl_from_int!(Int: i8, i16, i32, i64);
impl_from_int!(Uint: u8, u16, u32, u64);
