//! The interface a platform implements to resolve deferred text.

use std::borrow::Cow;

use crate::format::{NumberStyle, NumberSymbols, format_number};
use crate::resolver::plural::{PluralCategory, plural_category};
use crate::types::{Number, PluralResourceId, ResourceId};

/// Supplies locale, resources and plural rules to the resolver.
///
/// Only the language and the two template lookups are required. Separator
/// lookup defaults to the string resources, number formatting to
/// [`NumberSymbols::for_language`], and plural selection to the CLDR rules
/// for [`TextContext::language`].
///
/// Lookups return `None` for unknown ids; the resolver turns that into
/// [`ResolveError::ResourceNotFound`](crate::ResolveError::ResourceNotFound).
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use dtext::{DeferredText, PluralCategory, PluralResourceId, ResourceId, TextContext};
///
/// struct Fixed;
///
/// impl TextContext for Fixed {
///     fn language(&self) -> &str {
///         "en"
///     }
///
///     fn lookup_template(&self, id: ResourceId) -> Option<Cow<'_, str>> {
///         (id == ResourceId::from_name("hello")).then_some(Cow::Borrowed("Hello, %s"))
///     }
///
///     fn lookup_plural_template(
///         &self,
///         _id: PluralResourceId,
///         _category: PluralCategory,
///     ) -> Option<Cow<'_, str>> {
///         None
///     }
/// }
///
/// let text = DeferredText::lookup_with("hello", dtext::args!["world"]);
/// assert_eq!(text.resolve(&Fixed).unwrap().content, "Hello, world");
/// ```
pub trait TextContext {
    /// The language code used for plural rules and number symbols.
    fn language(&self) -> &str;

    /// The raw template for a string resource.
    fn lookup_template(&self, id: ResourceId) -> Option<Cow<'_, str>>;

    /// The template for one plural category of a plural resource.
    fn lookup_plural_template(
        &self,
        id: PluralResourceId,
        category: PluralCategory,
    ) -> Option<Cow<'_, str>>;

    /// The separator placed between joined fragments.
    fn lookup_separator(&self, id: ResourceId) -> Option<Cow<'_, str>> {
        self.lookup_template(id)
    }

    /// Characters used when writing numbers.
    fn number_symbols(&self) -> NumberSymbols {
        NumberSymbols::for_language(self.language())
    }

    /// Format a numeric argument.
    fn format_number(&self, number: Number, style: &NumberStyle) -> String {
        format_number(number, style, &self.number_symbols())
    }

    /// The plural category for a quantity.
    fn plural_category(&self, quantity: i64) -> PluralCategory {
        plural_category(self.language(), quantity)
    }
}
