//! # ibanx-cli: Command-Line Front End
//!
//! Provides the `ibanx` binary over `ibanx-core`.
//!
//! ## Subcommands
//!
//! - `ibanx validate`: Validate IBANs given as arguments or on stdin.
//! - `ibanx inspect`: Show the decomposition of one IBAN.
//! - `ibanx format`: Print one IBAN in pretty or compact form.
//! - `ibanx countries`: List countries with a documented BBAN structure.
//!
//! ```bash
//! ibanx validate "DE89 3704 0044 0532 0130 00" GB29NWBK60161331926819
//! ibanx --format json inspect BE68539007547034
//! ```
//!
//! Every handler returns `anyhow::Result<u8>`; the `u8` is the process
//! exit code.

pub mod countries;
pub mod format;
pub mod inspect;
pub mod validate;

use serde::Serialize;

/// Output rendering selected with the global `--format` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON on stdout.
    Json,
}

/// Render `value` as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
