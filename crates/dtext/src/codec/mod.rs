//! Binary encoding of deferred text.
//!
//! The wire format is versionless and little-endian. Every value starts
//! with a variant tag followed by the variant's fields in declaration order:
//!
//! ```text
//! text    := tag:u8 body
//!   0 Empty    -
//!   1 Literal  string args
//!   2 Lookup   id:u64 args
//!   3 Joined   separator:u64 count:u32 string*
//!   4 Plural   id:u64 value:i64 cardinal:u8 args
//! args    := count:u32 arg*
//! arg     := tag:u8 body
//!   0 Text     string
//!   1 Integer  i64
//!   2 Double   f64 bits
//!   3 Nested   text
//! string  := len:u32 utf8
//! ```

mod decode;
mod encode;
mod error;

pub use decode::{decode, decode_with_max_depth};
pub use encode::encode;
pub use error::DecodeError;

mod tag {
    pub const EMPTY: u8 = 0;
    pub const LITERAL: u8 = 1;
    pub const LOOKUP: u8 = 2;
    pub const JOINED: u8 = 3;
    pub const PLURAL: u8 = 4;

    pub const ARG_TEXT: u8 = 0;
    pub const ARG_INTEGER: u8 = 1;
    pub const ARG_DOUBLE: u8 = 2;
    pub const ARG_NESTED: u8 = 3;
}
