//! Errors raised while matching a template against its arguments.

use thiserror::Error;

/// A mismatch between a template and the supplied arguments.
///
/// Argument positions are 1-based and count the implicit plural cardinal,
/// when present, as position 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A placeholder refers to an argument that was not supplied.
    #[error("placeholder refers to argument {position}, but {available} supplied")]
    MissingArgument { position: usize, available: usize },

    /// The conversion cannot format the argument's type.
    #[error("conversion '%{conversion}' cannot format {found} argument at position {position}")]
    ArgumentType {
        position: usize,
        conversion: char,
        found: &'static str,
    },

    /// An explicit argument is never referenced by the template.
    #[error("argument {position} is not used by the template")]
    UnusedArgument { position: usize },

    /// The template contains a malformed placeholder.
    #[error("invalid placeholder at byte {offset}: '{found}'")]
    InvalidPlaceholder { offset: usize, found: String },
}
