//! # Inspect CLI: Decomposition of a single IBAN.
//!
//! Prints the country, check digits, BBAN, structure notation, and every
//! decomposed field of one IBAN. Invalid input is an error (exit code 1).

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use ibanx_core::{national, Country, FieldKind, Iban};

use crate::OutputFormat;

/// Arguments for `ibanx inspect`.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// The IBAN to inspect. Spaces are allowed if quoted.
    pub iban: String,
}

/// One decomposed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValue {
    pub field: FieldKind,
    pub value: String,
}

/// Everything `inspect` reports about a valid IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub iban: String,
    pub pretty: String,
    pub country: Country,
    pub checksum: u8,
    pub bban: String,
    pub structure: Option<String>,
    pub national_check: bool,
    pub fields: Vec<FieldValue>,
}

impl Inspection {
    pub fn new(iban: &Iban) -> Self {
        Self {
            iban: iban.compact(),
            pretty: iban.pretty(),
            country: iban.country(),
            checksum: iban.checksum(),
            bban: iban.bban().to_string(),
            structure: iban.pattern().map(|p| p.notation()),
            national_check: national::rule(iban.country_code()).is_some(),
            fields: iban
                .fields()
                .iter()
                .map(|(field, value)| FieldValue {
                    field,
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    /// Aligned `label: value` lines.
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("{:<28}{}", "iban:", self.pretty),
            format!("{:<28}{} ({})", "country:", self.country.code, self.country.name),
            format!("{:<28}{:02}", "check digits:", self.checksum),
            format!("{:<28}{}", "bban:", self.bban),
            format!(
                "{:<28}{}",
                "structure:",
                self.structure.as_deref().unwrap_or("unstructured")
            ),
            format!(
                "{:<28}{}",
                "national check:",
                if self.national_check { "verified" } else { "none" }
            ),
        ];
        for FieldValue { field, value } in &self.fields {
            lines.push(format!("{:<28}{value}", format!("{field}:")));
        }
        lines.join("\n")
    }
}

/// Execute the inspect subcommand.
pub fn run_inspect(args: &InspectArgs, format: OutputFormat) -> Result<u8> {
    let iban = ibanx_core::parse(&args.iban)
        .with_context(|| format!("{:?} is not a valid IBAN", args.iban))?;
    tracing::debug!(iban = %iban.compact(), "inspecting");

    let inspection = Inspection::new(&iban);
    match format {
        OutputFormat::Text => println!("{}", inspection.to_text()),
        OutputFormat::Json => println!("{}", crate::to_json(&inspection)?),
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspection_of_hungarian_iban() {
        let iban = ibanx_core::parse("HU42117730161111101800000000").unwrap();
        let inspection = Inspection::new(&iban);
        assert_eq!(inspection.structure.as_deref(), Some("3!n4!n1!n15!n1!n"));
        assert!(inspection.national_check);
        assert_eq!(
            inspection.fields,
            vec![
                FieldValue {
                    field: FieldKind::BankCode,
                    value: "117".to_string()
                },
                FieldValue {
                    field: FieldKind::BranchCode,
                    value: "7301".to_string()
                },
                FieldValue {
                    field: FieldKind::AccountNumber,
                    value: "111110180000000".to_string()
                },
                FieldValue {
                    field: FieldKind::NationalChecksum,
                    value: "60".to_string()
                },
            ]
        );
    }

    #[test]
    fn text_lists_fields() {
        let iban = ibanx_core::parse("GB29NWBK60161331926819").unwrap();
        let text = Inspection::new(&iban).to_text();
        assert!(text.contains("country:                    GB (United Kingdom"), "{text}");
        assert!(text.contains("national check:             none"), "{text}");
        assert!(text.lines().any(|l| l.starts_with("bank code:") && l.ends_with("NWBK")));
        assert!(text.lines().any(|l| l.starts_with("branch code:") && l.ends_with("601613")));
    }

    #[test]
    fn json_uses_snake_case_field_names() {
        let iban = ibanx_core::parse("BE68539007547034").unwrap();
        let json = serde_json::to_value(Inspection::new(&iban)).unwrap();
        assert_eq!(json["iban"], "BE68539007547034");
        assert_eq!(json["country"]["code"], "BE");
        assert_eq!(json["country"]["status"], "officially_assigned");
        assert_eq!(json["fields"][2]["field"], "national_checksum");
        assert_eq!(json["fields"][2]["value"], "34");
    }
}
