//! Positional substitution of resolved arguments into a parsed template.

use std::borrow::Cow;

use icu_casemap::CaseMapper;
use icu_locale_core::LanguageIdentifier;
use unicode_segmentation::UnicodeSegmentation;

use crate::format::{Conversion, FormatError, FormatTemplate, NumberStyle, Piece, Placeholder};
use crate::resolver::TextContext;
use crate::types::Number;

/// Fraction digits for `%f` without an explicit precision.
const DEFAULT_FLOAT_PRECISION: usize = 6;

/// An argument ready for substitution. Nested values are already resolved.
#[derive(Debug)]
pub(crate) enum FormatArg<'a> {
    Text(Cow<'a, str>),
    Number(Number),
}

impl FormatArg<'_> {
    fn kind(&self) -> &'static str {
        match self {
            FormatArg::Text(_) => "text",
            FormatArg::Number(Number::Integer(_)) => "integer",
            FormatArg::Number(Number::Double(_)) => "double",
        }
    }
}

/// Substitute `args` into `template`.
///
/// The first `implicit` arguments were not supplied by the caller and may go
/// unreferenced; every other argument must be used at least once.
pub(crate) fn substitute<C: TextContext + ?Sized>(
    template: &FormatTemplate,
    args: &[FormatArg<'_>],
    implicit: usize,
    ctx: &C,
) -> Result<String, FormatError> {
    let mut output = String::new();
    let mut used = vec![false; args.len()];
    let mut next = 0;

    for piece in &template.pieces {
        match piece {
            Piece::Literal(text) => output.push_str(text),
            Piece::Placeholder(placeholder) => {
                let index = match placeholder.index {
                    Some(position) => position - 1,
                    None => {
                        next += 1;
                        next - 1
                    }
                };
                let arg = args.get(index).ok_or(FormatError::MissingArgument {
                    position: index + 1,
                    available: args.len(),
                })?;
                used[index] = true;
                let rendered = render(arg, placeholder, index + 1, ctx)?;
                pad_into(&mut output, &rendered, placeholder);
            }
        }
    }

    let unused = used
        .iter()
        .enumerate()
        .skip(implicit)
        .find(|(_, used)| !**used);
    if let Some((index, _)) = unused {
        return Err(FormatError::UnusedArgument {
            position: index + 1,
        });
    }

    Ok(output)
}

fn render<C: TextContext + ?Sized>(
    arg: &FormatArg<'_>,
    placeholder: &Placeholder,
    position: usize,
    ctx: &C,
) -> Result<String, FormatError> {
    let style = NumberStyle {
        precision: None,
        grouping: placeholder.flags.grouping,
        plus_sign: placeholder.flags.plus_sign,
    };

    match (placeholder.conversion, arg) {
        (Conversion::String, FormatArg::Text(text)) => Ok(truncate(text, placeholder.precision)),
        (Conversion::String, FormatArg::Number(n)) => Ok(ctx.format_number(*n, &style)),
        (Conversion::UpperString, FormatArg::Text(text)) => Ok(uppercase(
            &truncate(text, placeholder.precision),
            ctx.language(),
        )),
        (Conversion::UpperString, FormatArg::Number(n)) => {
            Ok(uppercase(&ctx.format_number(*n, &style), ctx.language()))
        }
        (Conversion::Decimal, FormatArg::Number(n @ Number::Integer(_))) => {
            Ok(ctx.format_number(*n, &style))
        }
        (Conversion::Float, FormatArg::Number(n)) => {
            let style = NumberStyle {
                precision: Some(placeholder.precision.unwrap_or(DEFAULT_FLOAT_PRECISION)),
                ..style
            };
            Ok(ctx.format_number(Number::Double(n.as_f64()), &style))
        }
        (Conversion::Hex, FormatArg::Number(Number::Integer(n))) => Ok(format!("{n:x}")),
        (Conversion::UpperHex, FormatArg::Number(Number::Integer(n))) => Ok(format!("{n:X}")),
        (Conversion::Decimal | Conversion::Float | Conversion::Hex | Conversion::UpperHex, _) => {
            Err(FormatError::ArgumentType {
                position,
                conversion: placeholder.conversion.as_char(),
                found: arg.kind(),
            })
        }
    }
}

/// Keep at most `precision` grapheme clusters.
fn truncate(text: &str, precision: Option<usize>) -> String {
    match precision {
        Some(max) => text.graphemes(true).take(max).collect(),
        None => text.to_string(),
    }
}

fn uppercase(text: &str, language: &str) -> String {
    let langid = language
        .parse::<LanguageIdentifier>()
        .unwrap_or(LanguageIdentifier::UNKNOWN);
    CaseMapper::new()
        .uppercase_to_string(text, &langid)
        .to_string()
}

/// Append `rendered`, padded to the placeholder width.
fn pad_into(output: &mut String, rendered: &str, placeholder: &Placeholder) {
    let len = rendered.graphemes(true).count();
    let fill = placeholder
        .width
        .and_then(|width| width.checked_sub(len))
        .unwrap_or(0);

    if fill == 0 {
        output.push_str(rendered);
    } else if placeholder.flags.left_justify {
        output.push_str(rendered);
        output.push_str(&" ".repeat(fill));
    } else if placeholder.flags.zero_pad && placeholder.conversion.is_numeric() {
        let sign_len = rendered.len() - rendered.trim_start_matches(['-', '+']).len();
        let (sign, digits) = rendered.split_at(sign_len);
        output.push_str(sign);
        output.push_str(&"0".repeat(fill));
        output.push_str(digits);
    } else {
        output.push_str(&" ".repeat(fill));
        output.push_str(rendered);
    }
}
