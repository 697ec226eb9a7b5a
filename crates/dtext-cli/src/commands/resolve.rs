//! Implementation of the `dtext resolve` command.

use std::path::PathBuf;

use dtext::{DeferredText, ResolvedText, TextContext, decode};
use miette::{IntoDiagnostic, Result};

use super::{load_table, read_value};

/// Arguments for the resolve command.
#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    /// Resource file providing templates
    #[arg(long)]
    pub resources: Option<PathBuf>,

    /// Language code for resolution (e.g., en, de, ru)
    #[arg(long, env = "DTEXT_LANG", default_value = "en")]
    pub lang: String,

    /// JSON file containing the value
    #[arg(long, conflicts_with = "hex", required_unless_present = "hex")]
    pub value: Option<PathBuf>,

    /// Hex-encoded value in the binary wire format
    #[arg(long)]
    pub hex: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> Result<i32> {
    let table = load_table(args.resources.as_deref(), &args.lang)?;

    let text = match (&args.value, &args.hex) {
        (Some(path), _) => read_value(path)?,
        (None, Some(hex)) => match decode_hex(hex) {
            Ok(text) => text,
            Err(message) => {
                eprintln!("Decoding error: {message}");
                return Ok(exitcode::DATAERR);
            }
        },
        (None, None) => return Ok(exitcode::USAGE),
    };

    print_resolved(&text, &table, args.json)
}

/// Decode a hex string into a value, describing any failure.
pub(super) fn decode_hex(hex: &str) -> Result<DeferredText, String> {
    let bytes = hex::decode(hex.trim()).map_err(|e| format!("invalid hex: {e}"))?;
    decode(&bytes).map_err(|e| e.to_string())
}

/// Resolve `text` and print the result, returning the exit code.
pub(super) fn print_resolved<C: TextContext>(text: &DeferredText, ctx: &C, json: bool) -> Result<i32> {
    match text.resolve(ctx) {
        Ok(resolved) => {
            print_output(&resolved, json)?;
            Ok(exitcode::OK)
        }
        Err(e) => {
            if json {
                let output = serde_json::json!({ "error": e.to_string() });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Resolution error: {e}");
            }
            Ok(exitcode::DATAERR)
        }
    }
}

fn print_output(resolved: &ResolvedText, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(resolved).into_diagnostic()?);
    } else {
        println!("{resolved}");
    }
    Ok(())
}
