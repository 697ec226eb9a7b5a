//! Implementation of the `dtext encode` and `dtext decode` commands.

use std::path::PathBuf;

use dtext::encode;
use miette::{IntoDiagnostic, Result};

use super::read_value;
use super::resolve::decode_hex;

/// Arguments for the encode command.
#[derive(Debug, clap::Args)]
pub struct EncodeArgs {
    /// JSON file containing the value
    #[arg(long, required = true)]
    pub value: PathBuf,
}

/// Arguments for the decode command.
#[derive(Debug, clap::Args)]
pub struct DecodeArgs {
    /// Hex-encoded value in the binary wire format
    pub hex: String,
}

/// Run the encode command.
pub fn run_encode(args: EncodeArgs) -> Result<i32> {
    let text = read_value(&args.value)?;
    println!("{}", hex::encode(encode(&text)));
    Ok(exitcode::OK)
}

/// Run the decode command.
pub fn run_decode(args: DecodeArgs) -> Result<i32> {
    match decode_hex(&args.hex) {
        Ok(text) => {
            println!("{}", serde_json::to_string_pretty(&text).into_diagnostic()?);
            Ok(exitcode::OK)
        }
        Err(message) => {
            eprintln!("Decoding error: {message}");
            Ok(exitcode::DATAERR)
        }
    }
}
