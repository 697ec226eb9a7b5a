//! Parsed representation of a format template.

/// A parsed template: literal text interleaved with placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    pub pieces: Vec<Piece>,
}

impl FormatTemplate {
    /// Iterate over the placeholders in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.pieces.iter().filter_map(|piece| match piece {
            Piece::Placeholder(placeholder) => Some(placeholder),
            Piece::Literal(_) => None,
        })
    }
}

/// A piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Literal text, with `%%` and `%n` already unescaped.
    Literal(String),
    /// A substitution point.
    Placeholder(Placeholder),
}

/// A single `%[index$][flags][width][.precision]conversion` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Explicit 1-based argument index (`%2$s`). Sequential when absent.
    pub index: Option<usize>,
    pub flags: Flags,
    /// Minimum width in grapheme clusters.
    pub width: Option<usize>,
    /// Fraction digits for `%f`, maximum length for `%s`.
    pub precision: Option<usize>,
    pub conversion: Conversion,
}

/// Placeholder flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// `-`: pad on the right.
    pub left_justify: bool,
    /// `0`: pad numbers with zeros after the sign.
    pub zero_pad: bool,
    /// `,`: insert locale grouping separators.
    pub grouping: bool,
    /// `+`: always print a sign.
    pub plus_sign: bool,
}

impl Flags {
    /// Build flags from the characters between the index and the width.
    pub fn from_chars(chars: &str) -> Self {
        let mut flags = Flags::default();
        for c in chars.chars() {
            match c {
                '-' => flags.left_justify = true,
                '0' => flags.zero_pad = true,
                ',' => flags.grouping = true,
                '+' => flags.plus_sign = true,
                _ => {}
            }
        }
        flags
    }
}

/// The conversion character of a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `%s`: any argument, as text.
    String,
    /// `%S`: any argument, uppercased for the context language.
    UpperString,
    /// `%d`: integers.
    Decimal,
    /// `%f`: integers or doubles, with fixed fraction digits.
    Float,
    /// `%x`: integers in lowercase hexadecimal.
    Hex,
    /// `%X`: integers in uppercase hexadecimal.
    UpperHex,
}

impl Conversion {
    /// The conversion character as written in a template.
    pub fn as_char(self) -> char {
        match self {
            Conversion::String => 's',
            Conversion::UpperString => 'S',
            Conversion::Decimal => 'd',
            Conversion::Float => 'f',
            Conversion::Hex => 'x',
            Conversion::UpperHex => 'X',
        }
    }

    /// Whether the rendered value is numeric and may be zero padded.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Conversion::Decimal | Conversion::Float | Conversion::Hex | Conversion::UpperHex
        )
    }
}
