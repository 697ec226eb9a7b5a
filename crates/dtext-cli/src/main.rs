//! dtext CLI entry point.
//!
//! Provides command-line tools for deferred text values and resource files:
//! - `dtext check` - Validate resource file syntax
//! - `dtext resolve` - Resolve an encoded or JSON value
//! - `dtext lookup` - Resolve a named string resource
//! - `dtext encode` / `dtext decode` - Convert between JSON and the wire format

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    CheckArgs, DecodeArgs, EncodeArgs, LookupArgs, ResolveArgs, run_check, run_decode, run_encode,
    run_lookup, run_resolve,
};
use output::DtextDiagnostic;
use tracing_subscriber::EnvFilter;

/// Deferred text tools.
#[derive(Debug, Parser)]
#[command(name = "dtext")]
#[command(about = "Deferred text and resource file tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check resource file syntax
    Check(CheckArgs),
    /// Resolve a value against a resource file
    Resolve(ResolveArgs),
    /// Resolve a named string resource
    Lookup(LookupArgs),
    /// Encode a JSON value as hex
    Encode(EncodeArgs),
    /// Decode hex into a JSON value
    Decode(DecodeArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR itself
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr, filtered by `DTEXT_LOG`.
fn setup_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("DTEXT_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Resolve(args) => run_resolve(args),
        Commands::Lookup(args) => run_lookup(args),
        Commands::Encode(args) => run_encode(args),
        Commands::Decode(args) => run_decode(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(report) => {
            eprintln!("{report:?}");
            if report.downcast_ref::<DtextDiagnostic>().is_some() {
                exit(exitcode::DATAERR);
            }
            exit(exitcode::SOFTWARE);
        }
    }
}
