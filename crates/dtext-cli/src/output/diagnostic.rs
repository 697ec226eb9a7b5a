//! Miette diagnostic wrapper for resource file errors.

use std::path::Path;

use dtext::resources::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into a resource file.
///
/// Fields are read by the miette derive, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(dtext::syntax))]
pub struct DtextDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl DtextDiagnostic {
    /// Create a diagnostic from a [`ParseError`] with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let ParseError::Syntax {
            line,
            column,
            message,
        } = err;
        Self::at(path, content, *line, *column, message.clone())
    }

    /// Create a diagnostic at a 1-based line and character column.
    pub fn at(path: &Path, content: &str, line: usize, column: usize, message: String) -> Self {
        let line_start = content
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum::<usize>();
        let offset = content[line_start.min(content.len())..]
            .char_indices()
            .nth(column.saturating_sub(1))
            .map_or(content.len(), |(index, _)| line_start + index);

        DtextDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help: None,
        }
    }

    /// Attach a help message.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
