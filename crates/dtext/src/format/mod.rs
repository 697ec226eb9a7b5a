//! Positional format templates, locale number formatting and markup
//! detection.
//!
//! Templates use a printf-style subset: `%s`, `%S`, `%d`, `%f`, `%x`, `%X`
//! with optional `n$` argument index, `-0,+` flags, width and precision,
//! plus the `%%` and `%n` escapes.

mod ast;
mod error;
mod markup;
mod number;
mod parser;

pub use ast::{Conversion, Flags, FormatTemplate, Piece, Placeholder};
pub use error::FormatError;
pub use markup::{RECOGNIZED_TAGS, contains_markup};
pub use number::{NumberStyle, NumberSymbols, format_number};
pub use parser::{MAX_FIELD_WIDTH, parse_format};
