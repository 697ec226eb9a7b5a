//! Error types for resolution.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::format::FormatError;

/// The kind of resource a lookup was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    String,
    Plural,
    Separator,
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            ResourceKind::String => "string",
            ResourceKind::Plural => "plural",
            ResourceKind::Separator => "separator",
        };
        f.write_str(name)
    }
}

/// An error that occurred while resolving deferred text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The context has no resource for an id.
    #[error("{kind} resource not found for id: {id:016x}")]
    ResourceNotFound { kind: ResourceKind, id: u64 },

    /// A template does not match its arguments.
    #[error("format mismatch: {0}")]
    FormatMismatch(#[from] FormatError),

    /// Nested arguments go deeper than the resolver allows.
    #[error("maximum nesting depth {max_depth} exceeded")]
    UnboundedRecursion { max_depth: usize },
}
