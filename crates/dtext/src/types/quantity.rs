use serde::{Deserialize, Serialize};

/// The quantity that selects a plural form.
///
/// `value` picks the plural category under the context's locale rules. When
/// `use_formatted_cardinal` is set, the value itself is also offered to the
/// selected template as an implicit first argument, so `"%d months"` renders
/// the count. Otherwise only the explicit arguments are substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quantity {
    pub value: i64,
    #[serde(default)]
    pub use_formatted_cardinal: bool,
}

impl Quantity {
    /// A quantity used only for category selection.
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            use_formatted_cardinal: false,
        }
    }

    /// A quantity that is also substituted into the selected template.
    pub const fn with_cardinal(value: i64) -> Self {
        Self {
            value,
            use_formatted_cardinal: true,
        }
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Quantity::new(value)
    }
}
