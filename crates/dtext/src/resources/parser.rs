//! Resource file parser.
//!
//! A resource file is a list of definitions, each terminated by `;`:
//!
//! ```text
//! // comment
//! simple_string = "Simple test string";
//! months = { one: "%d month", other: "%d months" };
//! ```

use std::collections::BTreeMap;

use winnow::combinator::{alt, cut_err, delimited, opt, preceded, repeat, terminated};
use winnow::error::{ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use super::error::ParseError;
use crate::resolver::PluralCategory;

/// One named definition from a resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDefinition {
    pub name: String,
    pub body: ResourceBody,
}

/// The value of a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceBody {
    /// A single template.
    String(String),
    /// One template per plural category.
    Plural(BTreeMap<PluralCategory, String>),
}

/// Parse resource file content into definitions, in file order.
///
/// # Example
///
/// ```
/// use dtext::resources::{ResourceBody, parse_resources};
///
/// let defs = parse_resources(r#"title = "Inbox \u{1F4EC}";"#).unwrap();
/// assert_eq!(defs[0].name, "title");
/// assert_eq!(defs[0].body, ResourceBody::String("Inbox 📬".to_string()));
/// ```
pub fn parse_resources(input: &str) -> Result<Vec<ResourceDefinition>, ParseError> {
    let mut remaining = input;
    match file(&mut remaining) {
        Ok(definitions) if remaining.is_empty() => Ok(definitions),
        Ok(_) => {
            let (line, column) = calculate_position(input, remaining);
            Err(ParseError::Syntax {
                line,
                column,
                message: format!(
                    "unexpected character: '{}'",
                    remaining.chars().next().unwrap_or('?')
                ),
            })
        }
        Err(error) => {
            let (line, column) = calculate_position(input, remaining);
            let message = match error {
                ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.to_string().replace('\n', "; "),
                ErrMode::Incomplete(_) => String::new(),
            };
            Err(ParseError::Syntax {
                line,
                column,
                message: if message.is_empty() {
                    "unexpected input".to_string()
                } else {
                    message
                },
            })
        }
    }
}

/// Line and column (both 1-based, column in characters) of `remaining`
/// within `original`.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = &original[..original.len() - remaining.len()];
    let line = consumed.matches('\n').count() + 1;
    let line_start = consumed.rfind('\n').map_or(0, |pos| pos + 1);
    (line, consumed[line_start..].chars().count() + 1)
}

fn file(input: &mut &str) -> ModalResult<Vec<ResourceDefinition>> {
    skip_ws_and_comments(input)?;
    repeat(0.., terminated(definition, skip_ws_and_comments)).parse_next(input)
}

fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_whitespace()).void(),
            preceded("//", take_while(0.., |c: char| c != '\n')).void(),
        )),
    )
    .parse_next(input)
}

/// `name = body ;`
///
/// Everything after the name is committed, so errors point at the first
/// offending character instead of the start of the definition.
fn definition(input: &mut &str) -> ModalResult<ResourceDefinition> {
    let name = identifier(input)?;
    skip_ws_and_comments(input)?;
    cut_err('=')
        .context(expected("`=` after resource name"))
        .parse_next(input)?;
    skip_ws_and_comments(input)?;
    let body = cut_err(alt((
        plural_block.map(ResourceBody::Plural),
        string_literal.map(ResourceBody::String),
    )))
    .context(StrContext::Label("resource value"))
    .context(expected("a quoted string or a `{ ... }` plural block"))
    .parse_next(input)?;
    skip_ws_and_comments(input)?;
    cut_err(';')
        .context(expected("`;` after resource value"))
        .parse_next(input)?;

    Ok(ResourceDefinition {
        name: name.to_string(),
        body,
    })
}

fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || c == '_' || c == '.'
    })
    .verify(|s: &&str| s.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_'))
    .parse_next(input)
}

/// `{ one: "...", other: "..." }` with an optional trailing comma.
fn plural_block(input: &mut &str) -> ModalResult<BTreeMap<PluralCategory, String>> {
    '{'.parse_next(input)?;
    let mut forms = BTreeMap::new();
    loop {
        skip_ws_and_comments(input)?;
        if !forms.is_empty() && opt('}').parse_next(input)?.is_some() {
            return Ok(forms);
        }

        let category = cut_err(
            identifier
                .verify_map(PluralCategory::from_name)
                .verify(|category: &PluralCategory| !forms.contains_key(category)),
        )
        .context(StrContext::Label("plural category"))
        .context(expected("a distinct one of zero, one, two, few, many, other"))
        .parse_next(input)?;
        skip_ws_and_comments(input)?;
        cut_err(':')
            .context(expected("`:` after plural category"))
            .parse_next(input)?;
        skip_ws_and_comments(input)?;
        let template = cut_err(string_literal)
            .context(expected("a quoted string"))
            .parse_next(input)?;
        forms.insert(category, template);

        skip_ws_and_comments(input)?;
        if opt(',').parse_next(input)?.is_none() {
            cut_err('}')
                .context(expected("`,` or `}`"))
                .parse_next(input)?;
            return Ok(forms);
        }
    }
}

enum Fragment<'i> {
    Run(&'i str),
    Char(char),
}

fn string_literal(input: &mut &str) -> ModalResult<String> {
    let fragments: Vec<Fragment<'_>> = preceded('"', repeat(0.., fragment)).parse_next(input)?;
    cut_err('"')
        .context(expected("closing `\"`"))
        .parse_next(input)?;

    let mut out = String::new();
    for fragment in fragments {
        match fragment {
            Fragment::Run(run) => out.push_str(run),
            Fragment::Char(c) => out.push(c),
        }
    }
    Ok(out)
}

fn fragment<'i>(input: &mut &'i str) -> ModalResult<Fragment<'i>> {
    alt((
        take_while(1.., |c: char| c != '"' && c != '\\').map(Fragment::Run),
        escape.map(Fragment::Char),
    ))
    .parse_next(input)
}

/// `\"`, `\\`, `\n`, `\t` or `\u{HEX}`.
fn escape(input: &mut &str) -> ModalResult<char> {
    preceded(
        '\\',
        cut_err(alt((
            '"'.value('"'),
            '\\'.value('\\'),
            'n'.value('\n'),
            't'.value('\t'),
            unicode_escape,
        )))
        .context(StrContext::Label("escape sequence"))
        .context(expected("one of \\\", \\\\, \\n, \\t, \\u{HEX}")),
    )
    .parse_next(input)
}

fn unicode_escape(input: &mut &str) -> ModalResult<char> {
    preceded(
        'u',
        delimited('{', take_while(1..=6, |c: char| c.is_ascii_hexdigit()), '}'),
    )
    .try_map(|hex: &str| u32::from_str_radix(hex, 16))
    .verify_map(char::from_u32)
    .parse_next(input)
}

fn expected(description: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(description))
}
