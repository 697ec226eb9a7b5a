use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A numeric format argument.
///
/// The variant records whether the number is integral or double precision,
/// which decides how it is formatted: integers never show a fractional part,
/// doubles always do.
///
/// Doubles compare and hash by bit pattern, so a value equals itself even
/// when it holds `NaN`, and a decoded copy equals the original exactly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    /// An integral number.
    Integer(i64),

    /// A double-precision number.
    Double(f64),
}

impl Number {
    /// Returns true for [`Number::Double`].
    pub fn is_double(&self) -> bool {
        matches!(self, Number::Double(_))
    }

    /// Get this number as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(n) => Some(*n),
            Number::Double(_) => None,
        }
    }

    /// Get this number as a double, widening integers.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(n) => *n as f64,
            Number::Double(n) => *n,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Double(a), Number::Double(b)) => a.to_bits() == b.to_bits(),
            (Number::Integer(_), Number::Double(_)) | (Number::Double(_), Number::Integer(_)) => {
                false
            }
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Number::Integer(n) => {
                state.write_u8(0);
                n.hash(state);
            }
            Number::Double(n) => {
                state.write_u8(1);
                n.to_bits().hash(state);
            }
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Integer(n.into())
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::Integer(n.into())
    }
}

/// Counts above `i64::MAX` saturate.
impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::Double(n.into())
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Double(n)
    }
}
