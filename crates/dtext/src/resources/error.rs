//! Errors raised while loading resource files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A syntax error in resource file content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}

impl ParseError {
    /// The 1-based line and column of the error.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. } => (*line, *column),
        }
    }
}

/// Errors that occur while loading resources into a
/// [`ResourceTable`](super::ResourceTable).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The content is not valid resource syntax.
    #[error("{}:{line}:{column}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The same name is defined twice for one language.
    #[error("duplicate resource '{name}' for language '{language}'")]
    DuplicateName { language: String, name: String },

    /// A plural resource was given no forms.
    #[error("plural resource '{name}' for language '{language}' has no forms")]
    EmptyPlural { language: String, name: String },

    /// Two distinct names hash to the same id.
    #[error("hash collision: '{existing}' and '{name}' produce the same id")]
    HashCollision { existing: String, name: String },

    /// The language was loaded from a string and has no file to re-read.
    #[error("cannot reload '{language}': was loaded from string, not file")]
    NoPathForReload { language: String },
}
