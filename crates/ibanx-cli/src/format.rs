//! # Format CLI: Canonical text forms.
//!
//! Validates one IBAN and prints it grouped in fours (default) or compact.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::OutputFormat;

/// Arguments for `ibanx format`.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// The IBAN to format.
    pub iban: String,

    /// Print the compact form without spaces.
    #[arg(long)]
    pub compact: bool,
}

/// Both text forms of a valid IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Forms {
    pub compact: String,
    pub pretty: String,
}

/// Execute the format subcommand.
pub fn run_format(args: &FormatArgs, format: OutputFormat) -> Result<u8> {
    let iban = ibanx_core::parse(&args.iban)
        .with_context(|| format!("{:?} is not a valid IBAN", args.iban))?;
    let forms = Forms {
        compact: iban.compact(),
        pretty: iban.pretty(),
    };

    match format {
        OutputFormat::Text if args.compact => println!("{}", forms.compact),
        OutputFormat::Text => println!("{}", forms.pretty),
        OutputFormat::Json => println!("{}", crate::to_json(&forms)?),
    }
    Ok(0)
}
