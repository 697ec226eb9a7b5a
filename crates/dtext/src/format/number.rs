//! Locale-aware number formatting.

use crate::types::Number;

/// The characters a locale uses when writing numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    /// Separates the integer and fractional parts.
    pub decimal: char,
    /// Separates groups of three integer digits.
    pub grouping: char,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        Self {
            decimal: '.',
            grouping: ',',
        }
    }
}

impl NumberSymbols {
    /// Symbols for a language code such as `"de"` or `"fr-CA"`.
    ///
    /// Only the primary language subtag is considered. Unknown languages use
    /// `.` and `,`.
    ///
    /// # Example
    ///
    /// ```
    /// use dtext::NumberSymbols;
    ///
    /// assert_eq!(NumberSymbols::for_language("en").decimal, '.');
    /// assert_eq!(NumberSymbols::for_language("de-AT").decimal, ',');
    /// assert_eq!(NumberSymbols::for_language("ru").grouping, '\u{a0}');
    /// ```
    pub fn for_language(language: &str) -> Self {
        let primary = language.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "ro" | "el" | "da" | "vi" => Self {
                decimal: ',',
                grouping: '.',
            },
            "fr" => Self {
                decimal: ',',
                grouping: '\u{202f}',
            },
            "ru" | "uk" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "bg" => Self {
                decimal: ',',
                grouping: '\u{a0}',
            },
            _ => Self::default(),
        }
    }
}

/// How a single number should be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberStyle {
    /// Fixed number of fraction digits. Integers ignore it.
    pub precision: Option<usize>,
    /// Insert grouping separators into the integer part.
    pub grouping: bool,
    /// Prefix non-negative numbers with `+`.
    pub plus_sign: bool,
}

/// Format a number with the given style and symbols.
///
/// Integers are written without a fractional part. Doubles always carry
/// one: either `precision` digits, or the shortest digits that round-trip
/// with at least one fractional digit (`2.0`, `234.99`).
///
/// # Example
///
/// ```
/// use dtext::{Number, NumberStyle, NumberSymbols, format::format_number};
///
/// let de = NumberSymbols::for_language("de");
/// let grouped = NumberStyle { grouping: true, ..NumberStyle::default() };
/// assert_eq!(format_number(Number::Integer(1234567), &grouped, &de), "1.234.567");
///
/// let fixed = NumberStyle { precision: Some(4), ..NumberStyle::default() };
/// assert_eq!(format_number(Number::Double(0.345), &fixed, &NumberSymbols::default()), "0.3450");
/// ```
pub fn format_number(number: Number, style: &NumberStyle, symbols: &NumberSymbols) -> String {
    let (negative, digits) = match number {
        Number::Integer(n) => {
            let digits = n.unsigned_abs().to_string();
            (n < 0, group(&digits, style, symbols))
        }
        Number::Double(n) if n.is_nan() => return "NaN".to_string(),
        Number::Double(n) if n.is_infinite() => {
            let sign = if n < 0.0 { "-" } else { sign_prefix(false, style) };
            return format!("{sign}Infinity");
        }
        Number::Double(n) => {
            let text = match style.precision {
                Some(precision) => format!("{:.*}", precision, n.abs()),
                None => shortest_fractional(n.abs()),
            };
            let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
            let mut digits = group(integer, style, symbols);
            if !fraction.is_empty() {
                digits.push(symbols.decimal);
                digits.push_str(fraction);
            }
            (n.is_sign_negative(), digits)
        }
    };
    format!("{}{digits}", sign_prefix(negative, style))
}

fn sign_prefix(negative: bool, style: &NumberStyle) -> &'static str {
    if negative {
        "-"
    } else if style.plus_sign {
        "+"
    } else {
        ""
    }
}

/// Shortest round-trip digits, with `.0` appended for integral values.
fn shortest_fractional(n: f64) -> String {
    let text = n.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

fn group(digits: &str, style: &NumberStyle, symbols: &NumberSymbols) -> String {
    if !style.grouping {
        return digits.to_string();
    }
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(symbols.grouping);
        }
        grouped.push(c);
    }
    grouped
}
