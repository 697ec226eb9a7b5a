//! Resource files and the [`ResourceTable`] context.
//!
//! Resource files define named string and plural templates per language.
//! Names are hashed into [`ResourceId`](crate::ResourceId) and
//! [`PluralResourceId`](crate::PluralResourceId) values with the same
//! function used by `from_name`, so a value built from a name resolves
//! against the file that defines it.

mod bundle;
mod error;
mod parser;
mod table;

pub use error::{LoadError, ParseError};
pub use parser::{ResourceBody, ResourceDefinition, parse_resources};
pub use table::ResourceTable;
