use serde::{Deserialize, Serialize};

use super::{DeferredText, Number};

/// A positional format argument.
///
/// Arguments are substituted into a template in order. A nested
/// [`DeferredText`] is resolved against the same context first, and its
/// content is substituted like text.
///
/// # Example
///
/// ```
/// use dtext::{Arg, DeferredText, Number};
///
/// let name: Arg = "Ada".into();
/// let count: Arg = 3.into();
/// let ratio: Arg = 0.25.into();
/// let inner: Arg = DeferredText::text("inner").into();
///
/// assert_eq!(name.as_text(), Some("Ada"));
/// assert_eq!(count.as_number(), Some(Number::Integer(3)));
/// assert!(ratio.as_number().is_some_and(|n| n.is_double()));
/// assert!(inner.as_nested().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arg {
    /// Text substituted verbatim.
    Text(String),

    /// A number formatted with the context's numeric conventions.
    Number(Number),

    /// A deferred value resolved before substitution.
    Nested(DeferredText),
}

impl Arg {
    /// Get this argument as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Arg::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get this argument as a number, if it is one.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Arg::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the nested value, if this argument is one.
    pub fn as_nested(&self) -> Option<&DeferredText> {
        match self {
            Arg::Nested(text) => Some(text),
            _ => None,
        }
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Text(s)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Text(s.to_string())
    }
}

impl From<Number> for Arg {
    fn from(n: Number) -> Self {
        Arg::Number(n)
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Arg::Number(n.into())
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Arg::Number(n.into())
    }
}

impl From<u32> for Arg {
    fn from(n: u32) -> Self {
        Arg::Number(n.into())
    }
}

impl From<usize> for Arg {
    fn from(n: usize) -> Self {
        Arg::Number(n.into())
    }
}

impl From<f32> for Arg {
    fn from(n: f32) -> Self {
        Arg::Number(n.into())
    }
}

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        Arg::Number(n.into())
    }
}

impl From<DeferredText> for Arg {
    fn from(text: DeferredText) -> Self {
        Arg::Nested(text)
    }
}
