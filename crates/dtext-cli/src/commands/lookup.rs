//! Implementation of the `dtext lookup` command.

use std::path::PathBuf;

use dtext::{Arg, DeferredText, ResourceKind, ResourceTable};
use miette::Result;

use super::load_table;
use super::resolve::print_resolved;

/// Arguments for the lookup command.
#[derive(Debug, clap::Args)]
pub struct LookupArgs {
    /// Name of the string resource
    pub name: String,

    /// Resource file defining the name
    #[arg(long, required = true)]
    pub resources: PathBuf,

    /// Language code for resolution (e.g., en, de, ru)
    #[arg(long, env = "DTEXT_LANG", default_value = "en")]
    pub lang: String,

    /// Format arguments in order (repeatable); integers and decimals are
    /// passed as numbers, anything else as text
    #[arg(short = 'a', long = "arg")]
    pub args: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Interpret a command-line argument as a number when it looks like one.
fn parse_arg(raw: &str) -> Arg {
    if let Ok(n) = raw.parse::<i64>() {
        Arg::from(n)
    } else if let Ok(n) = raw.parse::<f64>() {
        Arg::from(n)
    } else {
        Arg::from(raw)
    }
}

/// Explain why `name` cannot be looked up as a string resource.
fn check_name(table: &ResourceTable, name: &str) -> Option<String> {
    match table.kind(name) {
        Some(ResourceKind::String) => None,
        Some(kind) => Some(format!(
            "'{name}' is a {kind} resource; lookup resolves string resources only"
        )),
        None => {
            let mut message = format!("Resource not found: '{name}'");
            let suggestions = table.suggestions(name);
            if !suggestions.is_empty() {
                message.push_str(&format!("\nDid you mean: {}?", suggestions.join(", ")));
            }
            Some(message)
        }
    }
}

/// Run the lookup command.
pub fn run_lookup(args: LookupArgs) -> Result<i32> {
    let table = load_table(Some(&args.resources), &args.lang)?;

    if let Some(problem) = check_name(&table, &args.name) {
        eprintln!("{problem}");
        return Ok(exitcode::DATAERR);
    }

    let values = args.args.iter().map(|raw| parse_arg(raw)).collect();
    let text = DeferredText::lookup_with(args.name.as_str(), values);
    print_resolved(&text, &table, args.json)
}
