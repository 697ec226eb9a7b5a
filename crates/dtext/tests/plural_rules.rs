//! Integration tests for plural category selection.

use std::borrow::Cow;

use dtext::{
    DeferredText, PluralCategory, PluralResourceId, Quantity, ResourceId, TextContext,
    plural_category,
};

#[test]
fn english_one_and_other() {
    assert_eq!(plural_category("en", 1), PluralCategory::One);
    assert_eq!(plural_category("en", 0), PluralCategory::Other);
    assert_eq!(plural_category("en", 5), PluralCategory::Other);
}

#[test]
fn russian_few_and_many() {
    assert_eq!(plural_category("ru", 1), PluralCategory::One);
    assert_eq!(plural_category("ru", 3), PluralCategory::Few);
    assert_eq!(plural_category("ru", 5), PluralCategory::Many);
    assert_eq!(plural_category("ru", 11), PluralCategory::Many);
    assert_eq!(plural_category("ru", 22), PluralCategory::Few);
}

#[test]
fn arabic_uses_all_categories() {
    assert_eq!(plural_category("ar", 0), PluralCategory::Zero);
    assert_eq!(plural_category("ar", 1), PluralCategory::One);
    assert_eq!(plural_category("ar", 2), PluralCategory::Two);
    assert_eq!(plural_category("ar", 3), PluralCategory::Few);
    assert_eq!(plural_category("ar", 11), PluralCategory::Many);
    assert_eq!(plural_category("ar", 100), PluralCategory::Other);
}

#[test]
fn french_zero_is_one() {
    assert_eq!(plural_category("fr", 0), PluralCategory::One);
}

#[test]
fn region_and_case_are_ignored() {
    assert_eq!(plural_category("pt-BR", 1), PluralCategory::One);
    assert_eq!(plural_category("RU_ru", 3), PluralCategory::Few);
}

#[test]
fn unknown_language_uses_english_rules() {
    assert_eq!(plural_category("xx", 1), PluralCategory::One);
    assert_eq!(plural_category("", 2), PluralCategory::Other);
}

#[test]
fn category_names() {
    for category in PluralCategory::ALL {
        assert_eq!(PluralCategory::from_name(category.as_str()), Some(category));
        assert_eq!(category.to_string(), category.as_str());
    }
    assert_eq!(PluralCategory::from_name("several"), None);
}

/// A context that always selects `few` and echoes the category.
struct AlwaysFew;

impl TextContext for AlwaysFew {
    fn language(&self) -> &str {
        "en"
    }

    fn lookup_template(&self, _id: ResourceId) -> Option<Cow<'_, str>> {
        None
    }

    fn lookup_plural_template(
        &self,
        _id: PluralResourceId,
        category: PluralCategory,
    ) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(format!("%d ({category})")))
    }

    fn plural_category(&self, _quantity: i64) -> PluralCategory {
        PluralCategory::Few
    }
}

#[test]
fn context_can_override_plural_rules() {
    let text = DeferredText::plural("anything", Quantity::with_cardinal(1));
    assert_eq!(text.resolve(&AlwaysFew).unwrap().content, "1 (few)");
}

#[test]
fn cardinal_flag_controls_formatting() {
    let with = DeferredText::plural("anything", Quantity::with_cardinal(7));
    assert_eq!(with.resolve(&AlwaysFew).unwrap().content, "7 (few)");

    // Without the cardinal the template is not formatted at all.
    let without = DeferredText::plural("anything", Quantity::new(7));
    assert_eq!(without.resolve(&AlwaysFew).unwrap().content, "%d (few)");
}
