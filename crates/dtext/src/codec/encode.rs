use super::tag;
use crate::types::{Arg, DeferredText, Number};

/// Encode a value into the binary wire format.
///
/// # Panics
///
/// Panics if a string or sequence is longer than `u32::MAX`, which the wire
/// format cannot represent.
///
/// # Example
///
/// ```
/// use dtext::{DeferredText, encode};
///
/// assert_eq!(encode(&DeferredText::EMPTY), vec![0]);
/// assert_eq!(encode(&DeferredText::text("hi")), vec![1, 2, 0, 0, 0, b'h', b'i', 0, 0, 0, 0]);
/// ```
pub fn encode(text: &DeferredText) -> Vec<u8> {
    let mut out = Vec::new();
    write_text(&mut out, text);
    out
}

fn write_text(out: &mut Vec<u8>, text: &DeferredText) {
    match text {
        DeferredText::Empty => out.push(tag::EMPTY),
        DeferredText::Literal { template, args } => {
            out.push(tag::LITERAL);
            write_str(out, template);
            write_args(out, args);
        }
        DeferredText::Lookup { id, args } => {
            out.push(tag::LOOKUP);
            out.extend_from_slice(&id.as_u64().to_le_bytes());
            write_args(out, args);
        }
        DeferredText::Joined { separator, parts } => {
            out.push(tag::JOINED);
            out.extend_from_slice(&separator.as_u64().to_le_bytes());
            write_len(out, parts.len());
            for part in parts {
                write_str(out, part);
            }
        }
        DeferredText::Plural { id, quantity, args } => {
            out.push(tag::PLURAL);
            out.extend_from_slice(&id.as_u64().to_le_bytes());
            out.extend_from_slice(&quantity.value.to_le_bytes());
            out.push(u8::from(quantity.use_formatted_cardinal));
            write_args(out, args);
        }
    }
}

fn write_args(out: &mut Vec<u8>, args: &[Arg]) {
    write_len(out, args.len());
    for arg in args {
        match arg {
            Arg::Text(text) => {
                out.push(tag::ARG_TEXT);
                write_str(out, text);
            }
            Arg::Number(Number::Integer(n)) => {
                out.push(tag::ARG_INTEGER);
                out.extend_from_slice(&n.to_le_bytes());
            }
            Arg::Number(Number::Double(n)) => {
                out.push(tag::ARG_DOUBLE);
                out.extend_from_slice(&n.to_bits().to_le_bytes());
            }
            Arg::Nested(text) => {
                out.push(tag::ARG_NESTED);
                write_text(out, text);
            }
        }
    }
}

fn write_str(out: &mut Vec<u8>, s: &str) {
    write_len(out, s.len());
    out.extend_from_slice(s.as_bytes());
}

fn write_len(out: &mut Vec<u8>, len: usize) {
    let len = u32::try_from(len).expect("length exceeds the u32 wire limit");
    out.extend_from_slice(&len.to_le_bytes());
}
