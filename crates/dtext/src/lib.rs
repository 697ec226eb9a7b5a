//! Deferred, serializable text.
//!
//! A [`DeferredText`] describes how to produce a string later: a literal
//! template, a resource lookup, a joined list of fragments or a pluralized
//! phrase. Values can be encoded to bytes with [`codec`], shipped across a
//! process boundary, decoded, and only then resolved against a
//! [`TextContext`] that supplies templates, plural rules and number
//! formatting.
//!
//! ```
//! use dtext::{DeferredText, Quantity, ResourceTable, args};
//!
//! let mut table = ResourceTable::new();
//! table
//!     .load_str("en", r#"
//!         greeting = "Hello, %s!";
//!         months = { one: "%d month", other: "%d months" };
//!     "#)
//!     .unwrap();
//!
//! let text = DeferredText::lookup_with("greeting", args!["Ada"]);
//! assert_eq!(text.resolve(&table).unwrap().content, "Hello, Ada!");
//!
//! let months = DeferredText::plural("months", Quantity::with_cardinal(3));
//! let restored = DeferredText::from_bytes(&months.to_bytes()).unwrap();
//! assert_eq!(restored.resolve(&table).unwrap().content, "3 months");
//! ```

pub mod codec;
pub mod format;
pub mod resolver;
pub mod resources;
pub mod types;

pub use codec::{DecodeError, decode, encode};
pub use format::{FormatError, NumberStyle, NumberSymbols};
pub use resolver::{
    PluralCategory, ResolveError, Resolver, ResourceKind, TextContext, plural_category, resolve,
};
pub use resources::{LoadError, ResourceTable};
pub use types::{
    Arg, DeferredText, Number, PluralResourceId, Quantity, ResolvedText, ResourceId,
};

/// Nesting limit applied by [`Resolver`] and [`decode`] unless configured
/// otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Creates a `Vec<Arg>` from a list of values.
///
/// Each value is converted via `Into<Arg>`, so strings, integers, floats
/// and nested [`DeferredText`] values can be mixed freely.
///
/// # Example
///
/// ```
/// use dtext::{Arg, DeferredText, Number, args};
///
/// let a = args!["left", 2, 0.5, DeferredText::text("inner")];
/// assert_eq!(a.len(), 4);
/// assert_eq!(a[1], Arg::Number(Number::Integer(2)));
/// ```
#[macro_export]
macro_rules! args {
    [] => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    [ $($value:expr),+ $(,)? ] => {
        ::std::vec![ $( ::std::convert::Into::<$crate::Arg>::into($value) ),+ ]
    };
}
