//! The resolution algorithm.

use std::borrow::Cow;

use bon::Builder;
use tracing::{debug, debug_span, trace};

use crate::DEFAULT_MAX_DEPTH;
use crate::format::{contains_markup, parse_format};
use crate::resolver::substitute::{FormatArg, substitute};
use crate::resolver::{ResolveError, ResourceKind, TextContext};
use crate::types::{Arg, DeferredText, Number, ResolvedText};

/// Resolves [`DeferredText`] values against a [`TextContext`].
///
/// A resolver holds configuration only; it is cheap to copy and can be
/// shared freely. Use [`resolve`] for the default settings.
///
/// # Example
///
/// ```
/// use dtext::{DeferredText, ResolveError, Resolver, ResourceTable};
///
/// let table = ResourceTable::new();
/// let resolver = Resolver::builder().max_depth(1).build();
///
/// let inner = DeferredText::literal("<%s>", dtext::args![DeferredText::text("x")]);
/// let outer = DeferredText::literal("[%s]", dtext::args![inner]);
///
/// assert!(matches!(
///     resolver.resolve(&outer, &table),
///     Err(ResolveError::UnboundedRecursion { max_depth: 1 })
/// ));
/// ```
#[derive(Debug, Clone, Copy, Builder)]
pub struct Resolver {
    /// Maximum number of nested arguments between the root value and the
    /// deepest value resolved.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::builder().build()
    }
}

impl Resolver {
    /// Create a resolver with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured nesting limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Resolve `text` against `ctx`.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::ResourceNotFound`] when `ctx` has no resource for an id
    /// - [`ResolveError::FormatMismatch`] when a template and its arguments
    ///   disagree
    /// - [`ResolveError::UnboundedRecursion`] when nested arguments exceed
    ///   the nesting limit
    pub fn resolve<C: TextContext + ?Sized>(
        &self,
        text: &DeferredText,
        ctx: &C,
    ) -> Result<ResolvedText, ResolveError> {
        let _span = debug_span!(
            "resolve",
            variant = text.variant_name(),
            language = ctx.language()
        )
        .entered();
        self.resolve_at(text, ctx, 0)
            .inspect_err(|error| debug!(%error, "resolution failed"))
    }

    fn resolve_at<C: TextContext + ?Sized>(
        &self,
        text: &DeferredText,
        ctx: &C,
        depth: usize,
    ) -> Result<ResolvedText, ResolveError> {
        if depth > self.max_depth {
            return Err(ResolveError::UnboundedRecursion {
                max_depth: self.max_depth,
            });
        }

        match text {
            DeferredText::Empty => Ok(ResolvedText::default()),
            DeferredText::Literal { template, args } => {
                let content = self.format(template, args, None, ctx, depth)?;
                Ok(ResolvedText::detect(content))
            }
            DeferredText::Lookup { id, args } => {
                if let (true, [Arg::Text(text)]) = (id.is_null(), args.as_slice()) {
                    return Ok(ResolvedText::detect(text.as_str()));
                }
                trace!(%id, "looking up string resource");
                let template =
                    ctx.lookup_template(*id)
                        .ok_or(ResolveError::ResourceNotFound {
                            kind: ResourceKind::String,
                            id: id.as_u64(),
                        })?;
                let content = self.format(&template, args, None, ctx, depth)?;
                Ok(ResolvedText::detect(content))
            }
            DeferredText::Joined { separator, parts } => {
                let separator = if separator.is_null() {
                    Cow::Borrowed(" ")
                } else {
                    trace!(id = %separator, "looking up separator resource");
                    ctx.lookup_separator(*separator)
                        .ok_or(ResolveError::ResourceNotFound {
                            kind: ResourceKind::Separator,
                            id: separator.as_u64(),
                        })?
                };
                let is_rich = parts.iter().any(|part| contains_markup(part))
                    || (parts.len() > 1 && contains_markup(&separator));
                Ok(ResolvedText {
                    content: parts.join(&*separator),
                    is_rich,
                })
            }
            DeferredText::Plural { id, quantity, args } => {
                let category = ctx.plural_category(quantity.value);
                trace!(%id, %category, quantity = quantity.value, "looking up plural resource");
                let template = ctx.lookup_plural_template(*id, category).ok_or(
                    ResolveError::ResourceNotFound {
                        kind: ResourceKind::Plural,
                        id: id.as_u64(),
                    },
                )?;
                let cardinal = quantity
                    .use_formatted_cardinal
                    .then_some(Number::Integer(quantity.value));
                let content = self.format(&template, args, cardinal, ctx, depth)?;
                Ok(ResolvedText::detect(content))
            }
        }
    }

    /// Format `template` with `args`, preceded by the implicit `cardinal`.
    ///
    /// Templates with nothing to substitute are returned verbatim.
    fn format<C: TextContext + ?Sized>(
        &self,
        template: &str,
        args: &[Arg],
        cardinal: Option<Number>,
        ctx: &C,
        depth: usize,
    ) -> Result<String, ResolveError> {
        if args.is_empty() && cardinal.is_none() {
            return Ok(template.to_string());
        }

        let mut values = Vec::with_capacity(args.len() + 1);
        values.extend(cardinal.map(FormatArg::Number));
        let implicit = values.len();
        for arg in args {
            let value = match arg {
                Arg::Text(text) => FormatArg::Text(Cow::Borrowed(text.as_str())),
                Arg::Number(n) => FormatArg::Number(*n),
                Arg::Nested(inner) => {
                    let resolved = self.resolve_at(inner, ctx, depth + 1)?;
                    FormatArg::Text(Cow::Owned(resolved.content))
                }
            };
            values.push(value);
        }

        let parsed = parse_format(template)?;
        Ok(substitute(&parsed, &values, implicit, ctx)?)
    }
}

/// Resolve `text` against `ctx` with the default [`Resolver`].
///
/// # Example
///
/// ```
/// use dtext::{DeferredText, ResourceTable, resolve};
///
/// let table = ResourceTable::new();
/// let resolved = resolve(&DeferredText::text("Tap <b>Save</b>"), &table).unwrap();
/// assert_eq!(resolved.content, "Tap <b>Save</b>");
/// assert!(resolved.is_rich);
/// ```
pub fn resolve<C: TextContext + ?Sized>(
    text: &DeferredText,
    ctx: &C,
) -> Result<ResolvedText, ResolveError> {
    Resolver::default().resolve(text, ctx)
}
