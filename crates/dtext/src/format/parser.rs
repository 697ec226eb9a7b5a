//! Format template parser using winnow.

use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use super::ast::{Conversion, Flags, FormatTemplate, Piece, Placeholder};
use super::error::FormatError;

/// Largest width or precision a placeholder may request.
pub const MAX_FIELD_WIDTH: usize = 1024;

/// Parse a format template.
///
/// # Example
///
/// ```
/// use dtext::format::{Conversion, Piece, parse_format};
///
/// let template = parse_format("%2$s of %1$,d%%").unwrap();
/// assert_eq!(template.placeholders().count(), 2);
/// assert_eq!(template.pieces.last(), Some(&Piece::Literal("%".to_string())));
///
/// let first = template.placeholders().next().unwrap();
/// assert_eq!(first.index, Some(2));
/// assert_eq!(first.conversion, Conversion::String);
/// ```
pub fn parse_format(input: &str) -> Result<FormatTemplate, FormatError> {
    let mut remaining = input;
    let pieces: Vec<Piece> = match repeat(0.., piece).parse_next(&mut remaining) {
        Ok(pieces) => pieces,
        Err(_) => return Err(invalid_at(input, remaining)),
    };
    if !remaining.is_empty() {
        return Err(invalid_at(input, remaining));
    }
    Ok(FormatTemplate {
        pieces: merge_literals(pieces),
    })
}

fn invalid_at(original: &str, remaining: &str) -> FormatError {
    FormatError::InvalidPlaceholder {
        offset: original.len() - remaining.len(),
        found: remaining
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Parse one piece: an escape, a placeholder, or a run of literal text.
fn piece(input: &mut &str) -> ModalResult<Piece> {
    alt((escape_sequence, placeholder, literal_run)).parse_next(input)
}

/// Parse escape sequences: %% -> %, %n -> newline
fn escape_sequence(input: &mut &str) -> ModalResult<Piece> {
    alt((
        "%%".value(Piece::Literal("%".to_string())),
        "%n".value(Piece::Literal("\n".to_string())),
    ))
    .parse_next(input)
}

/// Parse literal text up to the next `%`.
fn literal_run(input: &mut &str) -> ModalResult<Piece> {
    take_while(1.., |c: char| c != '%')
        .map(|s: &str| Piece::Literal(s.to_string()))
        .parse_next(input)
}

/// Parse a placeholder: % index$? flags width? .precision? conversion
fn placeholder(input: &mut &str) -> ModalResult<Piece> {
    '%'.parse_next(input)?;
    let index = opt(terminated(number.verify(|n: &usize| *n > 0), '$')).parse_next(input)?;
    let flags: String = repeat(0.., one_of(['-', '0', ',', '+'])).parse_next(input)?;
    let width = opt(field_width).parse_next(input)?;
    let precision = opt(preceded('.', field_width)).parse_next(input)?;
    let conversion = conversion(input)?;

    Ok(Piece::Placeholder(Placeholder {
        index,
        flags: Flags::from_chars(&flags),
        width,
        precision,
        conversion,
    }))
}

/// Parse an unsigned decimal number.
fn number(input: &mut &str) -> ModalResult<usize> {
    digit1.try_map(str::parse::<usize>).parse_next(input)
}

/// Parse a width or precision, rejecting values above [`MAX_FIELD_WIDTH`].
fn field_width(input: &mut &str) -> ModalResult<usize> {
    number
        .verify(|n: &usize| *n <= MAX_FIELD_WIDTH)
        .parse_next(input)
}

/// Parse a conversion character.
fn conversion(input: &mut &str) -> ModalResult<Conversion> {
    alt((
        's'.value(Conversion::String),
        'S'.value(Conversion::UpperString),
        'd'.value(Conversion::Decimal),
        'f'.value(Conversion::Float),
        'x'.value(Conversion::Hex),
        'X'.value(Conversion::UpperHex),
    ))
    .parse_next(input)
}

/// Merge adjacent literal pieces.
fn merge_literals(pieces: Vec<Piece>) -> Vec<Piece> {
    let mut result = Vec::with_capacity(pieces.len());

    for piece in pieces {
        match piece {
            Piece::Literal(text) => {
                if let Some(Piece::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Piece::Literal(text));
                }
            }
            other @ Piece::Placeholder(_) => result.push(other),
        }
    }

    result
}
