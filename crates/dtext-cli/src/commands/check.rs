//! Implementation of the `dtext check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use dtext::ResourceTable;
use dtext::resources::{ResourceBody, parse_resources};
use miette::{IntoDiagnostic, Report, Result};
use owo_colors::{OwoColorize, Stream};
use tracing::debug;

use super::SYNTAX_HELP;
use crate::output::DtextDiagnostic;
use crate::output::table::{FileSummary, format_check_table};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Resource files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    debug!(files = args.files.len(), "checking resource files");
    let mut summaries = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let mut summary = FileSummary {
            path: path.display().to_string(),
            strings: 0,
            plurals: 0,
            error: None,
        };

        let content = match read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                summary.error = Some(e.to_string());
                summaries.push(summary);
                continue;
            }
        };

        match parse_resources(&content) {
            Ok(definitions) => {
                for definition in &definitions {
                    match definition.body {
                        ResourceBody::String(_) => summary.strings += 1,
                        ResourceBody::Plural(_) => summary.plurals += 1,
                    }
                }
                // Loading catches duplicate names and id collisions.
                if let Err(e) = ResourceTable::new().load_definitions("check", definitions) {
                    summary.error = Some(e.to_string());
                }
            }
            Err(e) => {
                if !args.json {
                    let diagnostic =
                        DtextDiagnostic::from_parse_error(path, &content, &e).with_help(SYNTAX_HELP);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                summary.error = Some(e.to_string());
            }
        }
        summaries.push(summary);
    }

    let failed = summaries.iter().filter(|s| s.error.is_some()).count();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries).into_diagnostic()?);
    } else {
        println!("{}", format_check_table(&summaries));
        if failed == 0 {
            println!(
                "{}",
                "All files passed".if_supports_color(Stream::Stdout, |text| text.green())
            );
        } else {
            println!(
                "{}",
                format!("{failed} of {} files failed", summaries.len())
                    .if_supports_color(Stream::Stdout, |text| text.red())
            );
        }
    }

    if failed == 0 {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
