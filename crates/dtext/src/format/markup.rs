//! Inline markup detection.
//!
//! A resolved string is rich when it contains at least one recognized
//! inline tag. Escaped markup (`&lt;b&gt;`), comparison operators and
//! unknown tags leave a string plain.

use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::take_while;

/// Tag names treated as markup, matched case-insensitively.
pub const RECOGNIZED_TAGS: &[&str] = &[
    "a",
    "b",
    "big",
    "blockquote",
    "br",
    "del",
    "div",
    "em",
    "font",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "i",
    "li",
    "ol",
    "p",
    "s",
    "small",
    "span",
    "strike",
    "strong",
    "sub",
    "sup",
    "tt",
    "u",
    "ul",
];

/// Returns true if `text` contains a recognized opening, closing or
/// self-closing tag.
///
/// # Example
///
/// ```
/// use dtext::format::contains_markup;
///
/// assert!(contains_markup("Tap <b>Save</b>"));
/// assert!(contains_markup("line<br/>break"));
/// assert!(!contains_markup("Tap &lt;b&gt;Save&lt;/b&gt;"));
/// assert!(!contains_markup("1 < 2 and <custom> tags"));
/// ```
pub fn contains_markup(text: &str) -> bool {
    // Every tag ends in '>', so nothing after the last one can start a tag.
    // Attribute scans then always find a closing '>' and stay linear.
    let Some(end) = text.rfind('>') else {
        return false;
    };
    let mut rest = &text[..=end];
    while let Some(pos) = rest.find('<') {
        rest = &rest[pos..];
        let mut input = rest;
        if tag(&mut input).is_ok() {
            return true;
        }
        rest = &rest[1..];
    }
    false
}

fn is_recognized(name: &str) -> bool {
    RECOGNIZED_TAGS
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(name))
}

/// Parse a tag: < /? name (> | /> | whitespace attributes >)
fn tag<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    '<'.parse_next(input)?;
    opt('/').parse_next(input)?;
    let name = take_while(1.., |c: char| c.is_ascii_alphanumeric())
        .verify(|name: &&str| is_recognized(name))
        .parse_next(input)?;
    alt((
        ">".void(),
        "/>".void(),
        (
            take_while(1.., |c: char| c.is_ascii_whitespace()),
            take_while(0.., |c: char| c != '>'),
            '>',
        )
            .void(),
    ))
    .parse_next(input)?;
    Ok(name)
}
