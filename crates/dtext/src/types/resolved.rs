use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::format::contains_markup;

/// The result of resolving a [`DeferredText`](super::DeferredText).
///
/// `is_rich` reports whether `content` contains recognized inline markup,
/// in which case a binding layer should hand it to a rich-text renderer
/// instead of displaying it as plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedText {
    pub content: String,
    pub is_rich: bool,
}

impl ResolvedText {
    /// Plain text, regardless of content.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_rich: false,
        }
    }

    /// Classify `content` by scanning it for markup.
    pub fn detect(content: impl Into<String>) -> Self {
        let content = content.into();
        let is_rich = contains_markup(&content);
        Self { content, is_rich }
    }

    /// Get the resolved content.
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl Display for ResolvedText {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.content)
    }
}

impl From<ResolvedText> for String {
    fn from(text: ResolvedText) -> Self {
        text.content
    }
}
