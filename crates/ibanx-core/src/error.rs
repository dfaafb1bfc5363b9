//! # Error Types: IBAN Validation Failures
//!
//! One variant per pipeline stage. Every failure is terminal: no partial
//! or degraded [`Iban`](crate::Iban) is ever returned, and each variant
//! carries the offending value so callers can report it.
//!
//! Offsets in [`IbanError::Charset`] and [`Mismatch::Charset`] are
//! zero-based positions within the BBAN.

use serde::Serialize;
use thiserror::Error;

use crate::charset::Charset;
use crate::pattern::FieldKind;
use crate::Status;

/// Reason a BBAN does not match its country's structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// The BBAN length differs from the sum of the field widths.
    Length {
        /// Length required by the country's structure.
        expected: usize,
        /// Length of the BBAN.
        actual: usize,
    },
    /// A character does not belong to its field's character class.
    Charset {
        /// Class the field requires.
        expected: Charset,
        /// Position of the offending character within the BBAN.
        position: usize,
    },
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Length { expected, actual } => {
                write!(f, "expected {expected} characters, got {actual}")
            }
            Self::Charset { expected, position } => {
                write!(f, "expected {expected} at position {position}")
            }
        }
    }
}

/// Error returned when an input is not a valid IBAN.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IbanError {
    /// Total length outside `[5, 34]`.
    #[error("iban: must be between 5 and 34 characters long, got {length}")]
    Length {
        /// Length of the normalized input.
        length: usize,
    },

    /// The country code does not resolve in the registry.
    #[error("iban: invalid country code {code:?}")]
    CountryCodeSyntax {
        /// The first two characters of the normalized input.
        code: String,
    },

    /// The country code resolves but is not officially or user assigned.
    #[error("iban: country code {code} is {status}, not officially or user assigned")]
    CountryCodeInappropriate {
        /// The resolved country code.
        code: &'static str,
        /// Its registry status.
        status: Status,
    },

    /// The check digits are not two ASCII digits.
    #[error("iban: check digits {checksum:?} are not two digits")]
    ChecksumSyntax {
        /// Characters three and four of the normalized input.
        checksum: String,
    },

    /// The ISO 13616 mod-97 verification failed.
    #[error("iban: check digits {checksum:02} do not match")]
    Checksum {
        /// The check digits as given.
        checksum: u8,
    },

    /// The BBAN does not match the country's field structure.
    #[error("iban: bban does not match the {country} structure{}: {mismatch}", field_suffix(.field))]
    StructuralMismatch {
        /// Country whose structure was applied.
        country: &'static str,
        /// Field in which the mismatch occurred, if it is local to one.
        field: Option<FieldKind>,
        /// What did not match.
        mismatch: Mismatch,
    },

    /// The BBAN contains a character that is neither a letter nor a digit.
    #[error("iban: bban must consist of letters and digits, found {character:?} at position {position}")]
    Charset {
        /// The offending character.
        character: char,
        /// Its position within the BBAN.
        position: usize,
    },

    /// A country-specific check digit does not match.
    #[error("iban: national check digits in {field} do not match the {country} rule")]
    NationalChecksum {
        /// Country whose rule failed.
        country: &'static str,
        /// Field holding the check digit that failed.
        field: FieldKind,
    },
}

fn field_suffix(field: &Option<FieldKind>) -> String {
    match field {
        Some(kind) => format!(" in {kind}"),
        None => String::new(),
    }
}

/// Fieldless discriminant of [`IbanError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Length,
    CountryCodeSyntax,
    CountryCodeInappropriate,
    ChecksumSyntax,
    Checksum,
    StructuralMismatch,
    Charset,
    NationalChecksum,
}

impl ErrorKind {
    /// Stable snake_case identifier, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::CountryCodeSyntax => "country_code_syntax",
            Self::CountryCodeInappropriate => "country_code_inappropriate",
            Self::ChecksumSyntax => "checksum_syntax",
            Self::Checksum => "checksum",
            Self::StructuralMismatch => "structural_mismatch",
            Self::Charset => "charset",
            Self::NationalChecksum => "national_checksum",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IbanError {
    /// The kind of failure, without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Length { .. } => ErrorKind::Length,
            Self::CountryCodeSyntax { .. } => ErrorKind::CountryCodeSyntax,
            Self::CountryCodeInappropriate { .. } => ErrorKind::CountryCodeInappropriate,
            Self::ChecksumSyntax { .. } => ErrorKind::ChecksumSyntax,
            Self::Checksum { .. } => ErrorKind::Checksum,
            Self::StructuralMismatch { .. } => ErrorKind::StructuralMismatch,
            Self::Charset { .. } => ErrorKind::Charset,
            Self::NationalChecksum { .. } => ErrorKind::NationalChecksum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_message() {
        let e = IbanError::Length { length: 4 };
        assert_eq!(
            e.to_string(),
            "iban: must be between 5 and 34 characters long, got 4"
        );
        assert_eq!(e.kind(), ErrorKind::Length);
    }

    #[test]
    fn test_inappropriate_message_names_status() {
        let e = IbanError::CountryCodeInappropriate {
            code: "UK",
            status: Status::ExceptionallyReserved,
        };
        assert_eq!(
            e.to_string(),
            "iban: country code UK is exceptionally reserved, not officially or user assigned"
        );
    }

    #[test]
    fn test_checksum_message_pads() {
        let e = IbanError::Checksum { checksum: 7 };
        assert_eq!(e.to_string(), "iban: check digits 07 do not match");
    }

    #[test]
    fn test_structural_message_with_and_without_field() {
        let with_field = IbanError::StructuralMismatch {
            country: "NL",
            field: Some(FieldKind::BankCode),
            mismatch: Mismatch::Charset {
                expected: Charset::Alphabetic,
                position: 0,
            },
        };
        assert_eq!(
            with_field.to_string(),
            "iban: bban does not match the NL structure in bank code: expected letters at position 0"
        );

        let without_field = IbanError::StructuralMismatch {
            country: "DE",
            field: None,
            mismatch: Mismatch::Length {
                expected: 18,
                actual: 17,
            },
        };
        assert_eq!(
            without_field.to_string(),
            "iban: bban does not match the DE structure: expected 18 characters, got 17"
        );
    }

    #[test]
    fn test_national_message() {
        let e = IbanError::NationalChecksum {
            country: "BE",
            field: FieldKind::NationalChecksum,
        };
        assert_eq!(
            e.to_string(),
            "iban: national check digits in national checksum do not match the BE rule"
        );
        assert_eq!(e.kind(), ErrorKind::NationalChecksum);
    }

    #[test]
    fn test_kind_serializes_as_its_identifier() {
        for kind in [
            ErrorKind::Length,
            ErrorKind::CountryCodeSyntax,
            ErrorKind::CountryCodeInappropriate,
            ErrorKind::ChecksumSyntax,
            ErrorKind::Checksum,
            ErrorKind::StructuralMismatch,
            ErrorKind::Charset,
            ErrorKind::NationalChecksum,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }
}
