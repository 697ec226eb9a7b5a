//! CLDR plural category resolution.
//!
//! Different languages have different plural rules: English has "one" and
//! "other", Russian has "one", "few", "many" and "other", and Arabic uses
//! all six categories.
//!
//! Plural rules are cached per thread per language so `PluralRules` is not
//! rebuilt on every lookup.

use std::cell::RefCell;
use std::fmt::{Display, Formatter, Result as FmtResult};

use icu_locale_core::locale;
use icu_plurals::{PluralCategory as IcuCategory, PluralRuleType, PluralRules};

/// Supported language codes for plural rule resolution.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bn", "de", "el", "en", "es", "fa", "fr", "he", "hi", "id", "it", "ja", "ko", "nl", "pl",
    "pt", "ro", "ru", "th", "tr", "uk", "vi", "zh",
];

thread_local! {
    static PLURAL_RULES_CACHE: RefCell<Vec<(&'static str, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

/// A CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// All categories, in CLDR order.
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    /// The CLDR keyword for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    /// Parse a CLDR keyword.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == name)
    }
}

impl Display for PluralCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl From<IcuCategory> for PluralCategory {
    fn from(category: IcuCategory) -> Self {
        match category {
            IcuCategory::Zero => PluralCategory::Zero,
            IcuCategory::One => PluralCategory::One,
            IcuCategory::Two => PluralCategory::Two,
            IcuCategory::Few => PluralCategory::Few,
            IcuCategory::Many => PluralCategory::Many,
            IcuCategory::Other => PluralCategory::Other,
        }
    }
}

/// Normalize a language code to a supported static string reference.
///
/// Region and script subtags are dropped (`"pt-BR"` → `"pt"`); unrecognized
/// languages fall back to `"en"`.
fn normalize_lang(lang: &str) -> &'static str {
    let primary = lang.split(['-', '_']).next().unwrap_or_default();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code.eq_ignore_ascii_case(primary))
        .copied()
        .unwrap_or("en")
}

/// Build `PluralRules` for a normalized language code.
fn build_rules(lang: &'static str) -> PluralRules {
    let loc = match lang {
        "ar" => locale!("ar"),
        "bn" => locale!("bn"),
        "de" => locale!("de"),
        "el" => locale!("el"),
        "es" => locale!("es"),
        "fa" => locale!("fa"),
        "fr" => locale!("fr"),
        "he" => locale!("he"),
        "hi" => locale!("hi"),
        "id" => locale!("id"),
        "it" => locale!("it"),
        "ja" => locale!("ja"),
        "ko" => locale!("ko"),
        "nl" => locale!("nl"),
        "pl" => locale!("pl"),
        "pt" => locale!("pt"),
        "ro" => locale!("ro"),
        "ru" => locale!("ru"),
        "th" => locale!("th"),
        "tr" => locale!("tr"),
        "uk" => locale!("uk"),
        "vi" => locale!("vi"),
        "zh" => locale!("zh"),
        _ => locale!("en"),
    };
    PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into())
        .expect("compiled data covers every supported language")
}

/// Get the CLDR cardinal plural category for a number in a language.
///
/// # Examples
///
/// ```
/// use dtext::{PluralCategory, plural_category};
///
/// assert_eq!(plural_category("en", 1), PluralCategory::One);
/// assert_eq!(plural_category("en", 5), PluralCategory::Other);
///
/// assert_eq!(plural_category("ru", 2), PluralCategory::Few);
/// assert_eq!(plural_category("ru-RU", 5), PluralCategory::Many);
/// ```
pub fn plural_category(lang: &str, n: i64) -> PluralCategory {
    let lang = normalize_lang(lang);
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some((_, rules)) = cache.iter().find(|(code, _)| *code == lang) {
            return rules.category_for(n).into();
        }
        let rules = build_rules(lang);
        let category = rules.category_for(n).into();
        cache.push((lang, rules));
        category
    })
}
