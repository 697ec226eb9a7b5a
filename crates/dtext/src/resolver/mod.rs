//! Resolution of deferred text against a context.
//!
//! The resolver pattern-matches on each [`DeferredText`](crate::DeferredText)
//! variant, asks the [`TextContext`] for templates and plural forms,
//! resolves nested arguments recursively and substitutes them into the
//! template. Markup detection runs on the final string.

mod context;
mod error;
mod plural;
mod resolve;
mod substitute;

pub use context::TextContext;
pub use error::{ResolveError, ResourceKind};
pub use plural::{PluralCategory, plural_category};
pub use resolve::{Resolver, resolve};
