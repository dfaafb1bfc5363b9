//! # Countries CLI: Supported IBAN countries.
//!
//! Lists every country with a documented BBAN structure, its IBAN length,
//! structure notation, and whether a national check digit is verified.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use ibanx_core::{national, pattern, CountryRegistry, Iso3166};

use crate::OutputFormat;

/// Arguments for `ibanx countries`.
#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// Only list countries whose national check digits are verified.
    #[arg(long)]
    pub national_only: bool,
}

/// One row of the country listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRow {
    pub code: &'static str,
    pub name: &'static str,
    pub iban_length: usize,
    pub structure: String,
    pub national_check: bool,
}

impl CountryRow {
    pub fn to_line(&self) -> String {
        format!(
            "{}  {:>2}  {:<3}  {:<24}  {}",
            self.code,
            self.iban_length,
            if self.national_check { "yes" } else { "no" },
            self.structure,
            self.name
        )
    }
}

/// Rows for all patterned countries, sorted by code.
pub fn rows(national_only: bool) -> Vec<CountryRow> {
    pattern::patterns()
        .iter()
        .map(|p| CountryRow {
            code: p.country(),
            name: Iso3166.resolve(p.country()).map(|c| c.name).unwrap_or(""),
            iban_length: p.iban_len(),
            structure: p.notation(),
            national_check: national::rule(p.country()).is_some(),
        })
        .filter(|row| !national_only || row.national_check)
        .collect()
}

/// Execute the countries subcommand.
pub fn run_countries(args: &CountriesArgs, format: OutputFormat) -> Result<u8> {
    let rows = rows(args.national_only);
    tracing::debug!(count = rows.len(), "listing countries");

    match format {
        OutputFormat::Text => {
            for row in &rows {
                println!("{}", row.to_line());
            }
            println!();
            println!("Total: {} countries", rows.len());
        }
        OutputFormat::Json => println!("{}", crate::to_json(&rows)?),
    }
    Ok(0)
}
