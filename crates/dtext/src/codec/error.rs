//! Decoding errors.

use thiserror::Error;

/// An error that occurred while decoding a value.
///
/// Every variant except [`DecodeError::TooDeep`] means the input is
/// malformed: truncated, corrupt, or not produced by [`encode`](super::encode).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input ended in the middle of a value.
    #[error("malformed encoding: unexpected end of input at byte {offset}, {needed} more bytes needed")]
    UnexpectedEof { offset: usize, needed: usize },

    /// A variant tag is out of range.
    #[error("malformed encoding: invalid {what} tag {tag} at byte {offset}")]
    InvalidTag {
        what: &'static str,
        tag: u8,
        offset: usize,
    },

    /// A boolean byte is neither 0 nor 1.
    #[error("malformed encoding: invalid boolean {value} at byte {offset}")]
    InvalidBool { value: u8, offset: usize },

    /// A string is not valid UTF-8.
    #[error("malformed encoding: invalid UTF-8 in string at byte {offset}")]
    InvalidUtf8 { offset: usize },

    /// Bytes remain after a complete value.
    #[error("malformed encoding: {count} trailing bytes after value")]
    TrailingBytes { count: usize },

    /// Nested arguments go deeper than the decoder allows.
    #[error("maximum nesting depth {max_depth} exceeded while decoding")]
    TooDeep { max_depth: usize },
}

impl DecodeError {
    /// Returns true when the input itself is corrupt or truncated.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, DecodeError::TooDeep { .. })
    }
}
