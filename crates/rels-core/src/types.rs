//! The attribute value type carried by every tuple.
//!
//! `Scalar` is deliberately closed and small. Equality is total: variants must
//! match and floats compare by bit pattern, so `Eq`, `Hash` and `Ord` agree and
//! a scalar can key a hash-join index directly.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Scalar {
    Null,
    Bool(bool),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Str(String),
    Bin(Vec<u8>),
}

/// Shared `Null` handed out for absent attributes.
pub(crate) static NULL: Scalar = Scalar::Null;

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Stable name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::I32(_) => "i32",
            Scalar::I64(_) => "i64",
            Scalar::F32(_) => "f32",
            Scalar::F64(_) => "f64",
            Scalar::Str(_) => "str",
            Scalar::Bin(_) => "bin",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::I32(i) => Some(*i as i64),
            Scalar::I64(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::I32(i) => Some(*i as f64),
            Scalar::I64(i) => Some(*i as f64),
            Scalar::F32(f) => Some(*f as f64),
            Scalar::F64(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Feed a type-tagged encoding of this value into a blake3 hasher.
    pub(crate) fn hash_into(&self, hasher: &mut blake3::Hasher) {
        use Scalar::*;

        // Write type discriminant first
        hasher.update(&[type_order(self)]);

        match self {
            Null => {}
            Bool(b) => {
                hasher.update(&[*b as u8]);
            }
            I32(i) => {
                hasher.update(&i.to_le_bytes());
            }
            I64(i) => {
                hasher.update(&i.to_le_bytes());
            }
            F32(f) => {
                hasher.update(&f.to_bits().to_le_bytes());
            }
            F64(f) => {
                hasher.update(&f.to_bits().to_le_bytes());
            }
            Str(s) => {
                hasher.update(&(s.len() as u64).to_le_bytes());
                hasher.update(s.as_bytes());
            }
            Bin(b) => {
                hasher.update(&(b.len() as u64).to_le_bytes());
                hasher.update(b);
            }
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        use Scalar::*;
        match (self, other) {
            (Null, Null) => true,
            (Bool(x), Bool(y)) => x == y,
            (I32(x), I32(y)) => x == y,
            (I64(x), I64(y)) => x == y,
            (F32(x), F32(y)) => x.to_bits() == y.to_bits(),
            (F64(x), F64(y)) => x.to_bits() == y.to_bits(),
            (Str(x), Str(y)) => x == y,
            (Bin(x), Bin(y)) => x == y,
            _ => false,
        }
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use Scalar::*;
        type_order(self).hash(state);
        match self {
            Null => {}
            Bool(b) => b.hash(state),
            I32(i) => i.hash(state),
            I64(i) => i.hash(state),
            F32(f) => f.to_bits().hash(state),
            F64(f) => f.to_bits().hash(state),
            Str(s) => s.hash(state),
            Bin(b) => b.hash(state),
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scalar {
    /// Nulls sort first, then values are compared within their variant.
    /// Mixed variants are ordered by variant rank.
    fn cmp(&self, other: &Self) -> Ordering {
        use Scalar::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Bool(x), Bool(y)) => x.cmp(y),
            (I32(x), I32(y)) => x.cmp(y),
            (I64(x), I64(y)) => x.cmp(y),
            (F32(x), F32(y)) => float_cmp(x.is_nan(), y.is_nan(), || x.total_cmp(y)),
            (F64(x), F64(y)) => float_cmp(x.is_nan(), y.is_nan(), || x.total_cmp(y)),
            (Str(x), Str(y)) => x.cmp(y),
            (Bin(x), Bin(y)) => x.cmp(y),
            _ => type_order(self).cmp(&type_order(other)),
        }
    }
}

/// NaN sorts after every number; the rest follow IEEE total order, which
/// keeps `cmp` consistent with the bitwise equality above.
fn float_cmp(x_nan: bool, y_nan: bool, total: impl FnOnce() -> Ordering) -> Ordering {
    match (x_nan, y_nan) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => total(),
    }
}

/// Assign a numeric order to scalar types for mixed-type comparisons.
fn type_order(s: &Scalar) -> u8 {
    use Scalar::*;
    match s {
        Null => 0,
        Bool(_) => 1,
        I32(_) => 2,
        I64(_) => 3,
        F32(_) => 4,
        F64(_) => 5,
        Str(_) => 6,
        Bin(_) => 7,
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Scalar::*;
        match self {
            Null => write!(f, "null"),
            Bool(b) => write!(f, "{}", b),
            I32(i) => write!(f, "{}", i),
            I64(i) => write!(f, "{}", i),
            F32(x) => write!(f, "{}", x),
            F64(x) => write!(f, "{}", x),
            Str(s) => write!(f, "{:?}", s),
            Bin(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::I32(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::I64(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::F32(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::F64(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(v: Vec<u8>) -> Self {
        Scalar::Bin(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Scalar::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_cross_variant_coercion() {
        assert_ne!(Scalar::I32(1), Scalar::I64(1));
        assert_ne!(Scalar::I64(1), Scalar::F64(1.0));
        assert_eq!(Scalar::Null, Scalar::Null);
    }

    #[test]
    fn test_float_equality_is_bitwise() {
        assert_eq!(Scalar::F64(f64::NAN), Scalar::F64(f64::NAN));
        assert_ne!(Scalar::F64(0.0), Scalar::F64(-0.0));

        let mut set = HashSet::new();
        set.insert(Scalar::F64(f64::NAN));
        assert!(set.contains(&Scalar::F64(f64::NAN)));
    }

    #[test]
    fn test_ordering() {
        let mut values = vec![
            Scalar::F64(f64::NAN),
            Scalar::Str("b".into()),
            Scalar::F64(2.5),
            Scalar::Null,
            Scalar::F64(-1.0),
            Scalar::Str("a".into()),
        ];
        values.sort();
        assert_eq!(values[0], Scalar::Null);
        assert_eq!(values[1], Scalar::F64(-1.0));
        assert_eq!(values[2], Scalar::F64(2.5));
        assert_eq!(values[3], Scalar::F64(f64::NAN));
        assert_eq!(values[4], Scalar::Str("a".into()));
        assert_eq!(values[5], Scalar::Str("b".into()));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Scalar::from(None::<i64>), Scalar::Null);
        assert_eq!(Scalar::from(Some("x")), Scalar::Str("x".into()));
    }
}
