use tracing::{debug, debug_span};

use super::DecodeError;
use super::tag;
use crate::DEFAULT_MAX_DEPTH;
use crate::types::{Arg, DeferredText, Number, PluralResourceId, Quantity, ResourceId};

/// Decode a value from the binary wire format.
///
/// The whole input must be consumed by exactly one value.
///
/// # Example
///
/// ```
/// use dtext::{DecodeError, DeferredText, decode, encode};
///
/// let text = DeferredText::lookup_with("greeting", dtext::args!["Ada", 3]);
/// assert_eq!(decode(&encode(&text)).unwrap(), text);
///
/// let err = decode(&[9]).unwrap_err();
/// assert!(matches!(err, DecodeError::InvalidTag { tag: 9, .. }));
/// ```
pub fn decode(bytes: &[u8]) -> Result<DeferredText, DecodeError> {
    decode_with_max_depth(bytes, DEFAULT_MAX_DEPTH)
}

/// Decode a value, allowing at most `max_depth` levels of nested arguments.
pub fn decode_with_max_depth(bytes: &[u8], max_depth: usize) -> Result<DeferredText, DecodeError> {
    let _span = debug_span!("decode", len = bytes.len()).entered();
    let mut reader = Reader {
        bytes,
        offset: 0,
        max_depth,
    };
    reader
        .finish()
        .inspect_err(|error| debug!(%error, "decoding failed"))
}

/// Cursor over the encoded bytes.
struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
    max_depth: usize,
}

impl<'a> Reader<'a> {
    fn finish(&mut self) -> Result<DeferredText, DecodeError> {
        let text = self.text(0)?;
        let count = self.remaining();
        if count > 0 {
            return Err(DecodeError::TrailingBytes { count });
        }
        Ok(text)
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], DecodeError> {
        if needed > self.remaining() {
            return Err(DecodeError::UnexpectedEof {
                offset: self.offset,
                needed: needed - self.remaining(),
            });
        }
        let start = self.offset;
        self.offset += needed;
        Ok(&self.bytes[start..self.offset])
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    fn u8(&mut self) -> Result<u8, DecodeError> {
        let [byte] = self.array::<1>()?;
        Ok(byte)
    }

    fn u64(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.array()?))
    }

    fn i64(&mut self) -> Result<i64, DecodeError> {
        Ok(i64::from_le_bytes(self.array()?))
    }

    fn bool(&mut self) -> Result<bool, DecodeError> {
        let offset = self.offset;
        match self.u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(DecodeError::InvalidBool { value, offset }),
        }
    }

    /// Read a u32 length prefix and check that at least `len * min_size`
    /// bytes remain, so corrupt lengths fail before allocating.
    fn len(&mut self, min_size: usize) -> Result<usize, DecodeError> {
        let len = u32::from_le_bytes(self.array()?) as usize;
        let needed = len.saturating_mul(min_size);
        if needed > self.remaining() {
            return Err(DecodeError::UnexpectedEof {
                offset: self.offset,
                needed: needed - self.remaining(),
            });
        }
        Ok(len)
    }

    fn string(&mut self) -> Result<String, DecodeError> {
        let len = self.len(1)?;
        let offset = self.offset;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidUtf8 { offset })
    }

    fn text(&mut self, depth: usize) -> Result<DeferredText, DecodeError> {
        if depth > self.max_depth {
            return Err(DecodeError::TooDeep {
                max_depth: self.max_depth,
            });
        }

        let offset = self.offset;
        match self.u8()? {
            tag::EMPTY => Ok(DeferredText::Empty),
            tag::LITERAL => Ok(DeferredText::Literal {
                template: self.string()?,
                args: self.args(depth)?,
            }),
            tag::LOOKUP => Ok(DeferredText::Lookup {
                id: ResourceId::from_raw(self.u64()?),
                args: self.args(depth)?,
            }),
            tag::JOINED => {
                let separator = ResourceId::from_raw(self.u64()?);
                let count = self.len(4)?;
                let parts = (0..count)
                    .map(|_| self.string())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(DeferredText::Joined { separator, parts })
            }
            tag::PLURAL => Ok(DeferredText::Plural {
                id: PluralResourceId::from_raw(self.u64()?),
                quantity: Quantity {
                    value: self.i64()?,
                    use_formatted_cardinal: self.bool()?,
                },
                args: self.args(depth)?,
            }),
            tag => Err(DecodeError::InvalidTag {
                what: "text",
                tag,
                offset,
            }),
        }
    }

    fn args(&mut self, depth: usize) -> Result<Vec<Arg>, DecodeError> {
        let count = self.len(1)?;
        (0..count).map(|_| self.arg(depth)).collect()
    }

    fn arg(&mut self, depth: usize) -> Result<Arg, DecodeError> {
        let offset = self.offset;
        match self.u8()? {
            tag::ARG_TEXT => Ok(Arg::Text(self.string()?)),
            tag::ARG_INTEGER => Ok(Arg::Number(Number::Integer(self.i64()?))),
            tag::ARG_DOUBLE => Ok(Arg::Number(Number::Double(f64::from_bits(self.u64()?)))),
            tag::ARG_NESTED => Ok(Arg::Nested(self.text(depth + 1)?)),
            tag => Err(DecodeError::InvalidTag {
                what: "argument",
                tag,
                offset,
            }),
        }
    }
}
