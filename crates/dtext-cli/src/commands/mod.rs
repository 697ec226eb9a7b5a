//! CLI command implementations.

mod check;
mod codec;
mod lookup;
mod resolve;

use std::fs::read_to_string;
use std::path::Path;

use dtext::{DeferredText, LoadError, ResourceTable};
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::output::DtextDiagnostic;

pub use check::{CheckArgs, run_check};
pub use codec::{DecodeArgs, EncodeArgs, run_decode, run_encode};
pub use lookup::{LookupArgs, run_lookup};
pub use resolve::{ResolveArgs, run_resolve};

const SYNTAX_HELP: &str =
    r#"definitions look like `name = "text";` or `name = { one: "...", other: "..." };`"#;

/// Build a table for `language`, loading `path` when given.
fn load_table(path: Option<&Path>, language: &str) -> Result<ResourceTable> {
    let mut table = ResourceTable::with_language(language);
    let Some(path) = path else {
        return Ok(table);
    };

    match table.load_file(language, path) {
        Ok(_) => Ok(table),
        Err(LoadError::Parse {
            line,
            column,
            message,
            ..
        }) => {
            let content = read_to_string(path).into_diagnostic()?;
            Err(DtextDiagnostic::at(path, &content, line, column, message)
                .with_help(SYNTAX_HELP)
                .into())
        }
        Err(error) => Err(error).into_diagnostic(),
    }
}

/// Read a JSON-encoded value from a file.
fn read_value(path: &Path) -> Result<DeferredText> {
    let content = read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read value file {}", path.display()))?;
    serde_json::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("{} is not a valid value", path.display()))
}
