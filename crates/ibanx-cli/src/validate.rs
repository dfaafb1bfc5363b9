//! # Validate CLI: Batch IBAN validation.
//!
//! Validates each positional argument, or each non-empty line of stdin
//! when no arguments are given. Exit code 0 means every input was valid.
//!
//! ```bash
//! ibanx validate DE89370400440532013000 "GB29 NWBK 6016 1331 9268 19"
//! cat ibans.txt | ibanx validate
//! ```

use std::io::BufRead;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use ibanx_core::{ErrorKind, Validator};

use crate::OutputFormat;

/// Arguments for `ibanx validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// IBANs to validate. Reads stdin, one per line, if none are given.
    pub ibans: Vec<String>,

    /// Print only failures.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Result of validating one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Outcome {
    /// Text form: `OK <pretty>` or `ERR <input>: <error>`.
    pub fn to_line(&self) -> String {
        match (&self.iban, &self.error) {
            (Some(pretty), _) => format!("OK {pretty}"),
            (None, Some(error)) => format!("ERR {}: {error}", self.input),
            (None, None) => format!("ERR {}", self.input),
        }
    }
}

/// Validate every input in order.
pub fn check_all<S: AsRef<str>>(inputs: &[S]) -> Vec<Outcome> {
    let validator = Validator::new();
    inputs
        .iter()
        .map(|input| {
            let input = input.as_ref();
            tracing::debug!(input, "validating");
            match validator.validate(input) {
                Ok(iban) => {
                    tracing::info!(iban = %iban.compact(), "valid");
                    Outcome {
                        input: input.to_string(),
                        valid: true,
                        iban: Some(iban.pretty()),
                        kind: None,
                        error: None,
                    }
                }
                Err(e) => {
                    tracing::warn!(input, kind = %e.kind(), "invalid: {e}");
                    Outcome {
                        input: input.to_string(),
                        valid: false,
                        iban: None,
                        kind: Some(e.kind()),
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect()
}

/// Non-empty, trimmed lines of `reader`.
pub fn read_inputs(reader: impl BufRead) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read IBANs from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, format: OutputFormat) -> Result<u8> {
    let inputs = if args.ibans.is_empty() {
        read_inputs(std::io::stdin().lock())?
    } else {
        args.ibans.clone()
    };
    if inputs.is_empty() {
        anyhow::bail!("no IBANs given on the command line or stdin");
    }

    let outcomes = check_all(&inputs);
    let invalid = outcomes.iter().filter(|o| !o.valid).count();
    tracing::debug!(total = outcomes.len(), invalid, "validation finished");

    match format {
        OutputFormat::Text => {
            for outcome in outcomes.iter().filter(|o| !(args.quiet && o.valid)) {
                println!("{}", outcome.to_line());
            }
        }
        OutputFormat::Json => println!("{}", crate::to_json(&outcomes)?),
    }

    Ok(if invalid == 0 { 0 } else { 1 })
}
