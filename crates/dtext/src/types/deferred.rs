use serde::{Deserialize, Serialize};

use super::{Arg, PluralResourceId, Quantity, ResolvedText, ResourceId};
use crate::codec::{self, DecodeError};
use crate::resolver::{self, ResolveError, TextContext};

/// A description of text that is resolved later against a [`TextContext`].
///
/// Values are immutable, cheap to clone relative to the text they describe,
/// and compare structurally. Every variant round-trips through
/// [`DeferredText::to_bytes`] / [`DeferredText::from_bytes`] unchanged.
///
/// # Example
///
/// ```
/// use dtext::{DeferredText, ResourceTable, args};
///
/// let table = ResourceTable::new();
///
/// let text = DeferredText::literal("%s has %d items", args!["Cart", 3]);
/// assert_eq!(text.resolve(&table).unwrap().content, "Cart has 3 items");
///
/// let joined = DeferredText::fragments(["Success", "Text"]);
/// assert_eq!(joined.resolve(&table).unwrap().content, "Success Text");
///
/// assert_eq!(DeferredText::EMPTY.resolve(&table).unwrap().content, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeferredText {
    /// No content. Always resolves to the empty string.
    #[default]
    Empty,

    /// A template with positional placeholders, formatted with `args`.
    Literal {
        template: String,
        #[serde(default)]
        args: Vec<Arg>,
    },

    /// A template looked up by `id`, formatted with `args`.
    Lookup {
        id: ResourceId,
        #[serde(default)]
        args: Vec<Arg>,
    },

    /// Literal fragments joined by a separator resource, or by a single space
    /// when `separator` is [`ResourceId::NULL`].
    Joined {
        #[serde(default)]
        separator: ResourceId,
        parts: Vec<String>,
    },

    /// A quantity-sensitive phrase.
    Plural {
        id: PluralResourceId,
        quantity: Quantity,
        #[serde(default)]
        args: Vec<Arg>,
    },
}

impl DeferredText {
    /// The empty value.
    pub const EMPTY: DeferredText = DeferredText::Empty;

    /// Plain text, used as-is without placeholder processing.
    pub fn text(text: impl Into<String>) -> Self {
        DeferredText::Literal {
            template: text.into(),
            args: Vec::new(),
        }
    }

    /// A literal template formatted with `args`.
    pub fn literal(template: impl Into<String>, args: Vec<Arg>) -> Self {
        DeferredText::Literal {
            template: template.into(),
            args,
        }
    }

    /// A string resource used without arguments.
    pub fn lookup(id: impl Into<ResourceId>) -> Self {
        Self::lookup_with(id, Vec::new())
    }

    /// A string resource formatted with `args`.
    pub fn lookup_with(id: impl Into<ResourceId>, args: Vec<Arg>) -> Self {
        DeferredText::Lookup {
            id: id.into(),
            args,
        }
    }

    /// Fragments joined by the separator resource `separator`.
    pub fn joined<S: Into<String>>(
        separator: impl Into<ResourceId>,
        parts: impl IntoIterator<Item = S>,
    ) -> Self {
        DeferredText::Joined {
            separator: separator.into(),
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// Fragments joined by a single space.
    pub fn fragments<S: Into<String>>(parts: impl IntoIterator<Item = S>) -> Self {
        Self::joined(ResourceId::NULL, parts)
    }

    /// A plural resource without explicit arguments.
    pub fn plural(id: impl Into<PluralResourceId>, quantity: Quantity) -> Self {
        Self::plural_with(id, quantity, Vec::new())
    }

    /// A plural resource formatted with `args`.
    pub fn plural_with(
        id: impl Into<PluralResourceId>,
        quantity: Quantity,
        args: Vec<Arg>,
    ) -> Self {
        DeferredText::Plural {
            id: id.into(),
            quantity,
            args,
        }
    }

    /// Returns true for [`DeferredText::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, DeferredText::Empty)
    }

    /// The snake_case name of this variant, for diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            DeferredText::Empty => "empty",
            DeferredText::Literal { .. } => "literal",
            DeferredText::Lookup { .. } => "lookup",
            DeferredText::Joined { .. } => "joined",
            DeferredText::Plural { .. } => "plural",
        }
    }

    /// The format arguments carried by this value, if its variant has any.
    pub fn args(&self) -> &[Arg] {
        match self {
            DeferredText::Literal { args, .. }
            | DeferredText::Lookup { args, .. }
            | DeferredText::Plural { args, .. } => args,
            DeferredText::Empty | DeferredText::Joined { .. } => &[],
        }
    }

    /// Resolve against `ctx` with the default [`resolver::Resolver`].
    pub fn resolve<C: TextContext + ?Sized>(&self, ctx: &C) -> Result<ResolvedText, ResolveError> {
        resolver::resolve(self, ctx)
    }

    /// Encode into the binary wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        codec::encode(self)
    }

    /// Decode from the binary wire format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        codec::decode(bytes)
    }
}

impl From<&str> for DeferredText {
    fn from(text: &str) -> Self {
        DeferredText::text(text)
    }
}

impl From<String> for DeferredText {
    fn from(text: String) -> Self {
        DeferredText::text(text)
    }
}
