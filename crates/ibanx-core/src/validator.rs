//! # IBAN Validator
//!
//! Runs the validation pipeline over one input string and produces an
//! [`Iban`] or the [`IbanError`] of the first stage that failed.
//!
//! ## Stage Order
//!
//! The charset of the BBAN is checked before the generic checksum: the
//! mod-97 computation is only defined over letters and digits, so a
//! stray character is reported as [`IbanError::Charset`] with its
//! position rather than as a checksum failure.

use crate::checksum::generic_mod97;
use crate::error::IbanError;
use crate::iban::Iban;
use crate::pattern::{self, Fields};
use crate::{national, CountryRegistry, Iso3166, MAX_LEN, MIN_LEN};

/// IBAN validator over a country registry.
///
/// Stateless apart from the registry; one instance can validate any
/// number of inputs, from any number of threads if `R` allows it.
#[derive(Debug, Clone, Default)]
pub struct Validator<R = Iso3166> {
    registry: R,
}

impl Validator {
    /// Validator over the built-in ISO 3166 registry.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: CountryRegistry> Validator<R> {
    /// Validator over a caller-supplied registry.
    pub fn with_registry(registry: R) -> Self {
        Self { registry }
    }

    /// Validate `input` and decompose it.
    ///
    /// Whitespace anywhere in the input is ignored and letters may be in
    /// either case.
    ///
    /// # Errors
    ///
    /// Returns the [`IbanError`] of the first failing stage.
    pub fn validate(&self, input: &str) -> Result<Iban, IbanError> {
        let iban = normalize(input);

        let length = iban.chars().count();
        if !(MIN_LEN..=MAX_LEN).contains(&length) {
            return Err(IbanError::Length { length });
        }

        let code = iban.get(0..2).ok_or_else(|| IbanError::CountryCodeSyntax {
            code: iban.chars().take(2).collect(),
        })?;
        let country = self
            .registry
            .resolve(code)
            .map_err(|_| IbanError::CountryCodeSyntax {
                code: code.to_string(),
            })?;
        if !country.is_assigned() {
            return Err(IbanError::CountryCodeInappropriate {
                code: country.code,
                status: country.status,
            });
        }

        let checksum = match iban.get(2..4) {
            Some(digits) if digits.bytes().all(|b| b.is_ascii_digit()) => {
                digits.parse::<u8>().map_err(|_| IbanError::ChecksumSyntax {
                    checksum: digits.to_string(),
                })?
            }
            _ => {
                return Err(IbanError::ChecksumSyntax {
                    checksum: iban.chars().skip(2).take(2).collect(),
                })
            }
        };

        let bban = iban.get(4..).unwrap_or_default();
        if let Some((position, character)) = bban
            .chars()
            .enumerate()
            .find(|&(_, c)| !c.is_ascii_alphanumeric())
        {
            return Err(IbanError::Charset {
                character,
                position,
            });
        }

        if !generic_mod97(&iban) {
            return Err(IbanError::Checksum { checksum });
        }

        let fields = match pattern::pattern(country.code) {
            Some(p) => p.decompose(bban)?,
            None => Fields::default(),
        };

        if let Some(rule) = national::rule(country.code) {
            rule.verify(&fields)
                .map_err(|field| IbanError::NationalChecksum {
                    country: country.code,
                    field,
                })?;
        }

        Ok(Iban::new(country, checksum, bban.to_string(), fields))
    }

    /// Returns true if `input` is a valid IBAN.
    pub fn is_valid(&self, input: &str) -> bool {
        self.validate(input).is_ok()
    }
}

/// Strip all whitespace and uppercase ASCII letters.
fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Validate `input` with the built-in registry.
///
/// # Errors
///
/// See [`Validator::validate()`].
pub fn parse(input: &str) -> Result<Iban, IbanError> {
    Validator::new().validate(input)
}

/// Returns true if `input` is a valid IBAN under the built-in registry.
pub fn is_valid(input: &str) -> bool {
    parse(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::Charset;
    use crate::error::{ErrorKind, Mismatch};
    use crate::pattern::FieldKind;
    use crate::Status;
    use ibanx_iso3166::{Country, RegistryError};

    fn kind(input: &str) -> ErrorKind {
        parse(input).unwrap_err().kind()
    }

    #[test]
    fn test_accepts_spaced_lowercase() {
        let iban = parse("de02 1203 0000 0000 2020 51").unwrap();
        assert_eq!(iban.to_string(), "DE02 1203 0000 0000 2020 51");
        assert_eq!(iban.bank_code(), Some("12030000"));
        assert_eq!(iban.account_number(), Some("0000202051"));
    }

    #[test]
    fn test_accepts_tabs_and_newlines() {
        assert!(is_valid("\tGB29 NWBK\n6016 1331 9268 19 "));
    }

    #[test]
    fn test_national_examples() {
        assert!(is_valid("AL47 2121 1009 0000 0002 3569 8741"));
        assert!(is_valid("BE68 5390 0754 7034"));
        assert!(is_valid("HR12 1001 0051 8630 0016 0"));
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(parse("DE89"), Err(IbanError::Length { length: 4 }));
        assert_eq!(parse(""), Err(IbanError::Length { length: 0 }));
        assert_eq!(parse("   "), Err(IbanError::Length { length: 0 }));
        let long = format!("DE89{}", "0".repeat(31));
        assert_eq!(parse(&long), Err(IbanError::Length { length: 35 }));
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(kind("ÄÄ89370400440532013000"), ErrorKind::CountryCodeSyntax);
        assert_eq!(
            parse(&"Ä".repeat(20)),
            Err(IbanError::CountryCodeSyntax {
                code: "Ä".to_string()
            })
        );
        assert_eq!(parse(&"Ä".repeat(35)), Err(IbanError::Length { length: 35 }));
    }

    #[test]
    fn test_unknown_country() {
        assert_eq!(
            parse("ZZ0212345678"),
            Err(IbanError::CountryCodeSyntax {
                code: "ZZ".to_string()
            })
        );
        assert_eq!(kind("1289370400440532013000"), ErrorKind::CountryCodeSyntax);
    }

    #[test]
    fn test_unassigned_country() {
        assert_eq!(
            parse("UK29NWBK60161331926819"),
            Err(IbanError::CountryCodeInappropriate {
                code: "UK",
                status: Status::ExceptionallyReserved,
            })
        );
    }

    #[test]
    fn test_checksum_syntax() {
        assert_eq!(
            parse("DEXX370400440532013000"),
            Err(IbanError::ChecksumSyntax {
                checksum: "XX".to_string()
            })
        );
        assert_eq!(kind("DE8-370400440532013000"), ErrorKind::ChecksumSyntax);
    }

    #[test]
    fn test_generic_checksum() {
        assert_eq!(
            parse("DE89370400440532013001"),
            Err(IbanError::Checksum { checksum: 89 })
        );
        assert_eq!(kind("DE00370400440532013000"), ErrorKind::Checksum);
    }

    #[test]
    fn test_charset_reported_before_checksum() {
        assert_eq!(
            parse("DE89370400440532-13000"),
            Err(IbanError::Charset {
                character: '-',
                position: 12
            })
        );
        assert_eq!(
            parse("FO12ÄBC"),
            Err(IbanError::Charset {
                character: 'Ä',
                position: 0
            })
        );
    }

    #[test]
    fn test_structural_mismatch_after_checksum() {
        // Valid mod-97, but an alphabetic bank code where Germany wants digits.
        let check = crate::checksum::generic_check_digits("DE", "A70400440532013000").unwrap();
        let input = format!("DE{check:02}A70400440532013000");
        assert_eq!(
            parse(&input),
            Err(IbanError::StructuralMismatch {
                country: "DE",
                field: Some(FieldKind::BankCode),
                mismatch: Mismatch::Charset {
                    expected: Charset::Numeric,
                    position: 0
                },
            })
        );

        let check = crate::checksum::generic_check_digits("DE", "3704004405320130").unwrap();
        let input = format!("DE{check:02}3704004405320130");
        assert!(matches!(
            parse(&input),
            Err(IbanError::StructuralMismatch {
                field: None,
                mismatch: Mismatch::Length {
                    expected: 18,
                    actual: 16
                },
                ..
            })
        ));
    }

    #[test]
    fn test_country_without_pattern_accepts_alphanumeric() {
        let check = crate::checksum::generic_check_digits("FK", "SC123456789012").unwrap();
        let iban = parse(&format!("FK{check:02}SC123456789012")).unwrap();
        assert_eq!(iban.bban(), "SC123456789012");
        assert!(iban.fields().is_empty());
        assert!(iban.pattern().is_none());
        assert_eq!(iban.segments().count(), 0);
    }

    #[test]
    fn test_national_checksum_failure() {
        assert_eq!(
            parse("BE30639007547034"),
            Err(IbanError::NationalChecksum {
                country: "BE",
                field: FieldKind::NationalChecksum,
            })
        );
        assert_eq!(kind("HR8420010051863000160"), ErrorKind::NationalChecksum);
    }

    #[test]
    fn test_custom_registry() {
        struct OnlyGermany;
        impl CountryRegistry for OnlyGermany {
            fn resolve(&self, code: &str) -> Result<Country, RegistryError> {
                match code {
                    "DE" => Ok(Country::new("DE", Status::OfficiallyAssigned, "Germany")),
                    "GB" => Ok(Country::new("GB", Status::FormerlyAssigned, "United Kingdom")),
                    _ => Err(RegistryError::NotFound {
                        code: code.to_string(),
                    }),
                }
            }
        }

        let validator = Validator::with_registry(OnlyGermany);
        assert!(validator.is_valid("DE89370400440532013000"));
        assert_eq!(
            validator.validate("BE68539007547034").unwrap_err().kind(),
            ErrorKind::CountryCodeSyntax
        );
        assert_eq!(
            validator.validate("GB29NWBK60161331926819").unwrap_err().kind(),
            ErrorKind::CountryCodeInappropriate
        );
    }

    #[test]
    fn test_reparse_both_forms() {
        let iban = parse("MT84MALT011000012345MTLCAST001S").unwrap();
        assert_eq!(parse(&iban.compact()).unwrap(), iban);
        assert_eq!(parse(&iban.pretty()).unwrap(), iban);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::checksum::generic_check_digits;
    use crate::error::ErrorKind;
    use crate::pattern::FieldKind;
    use proptest::prelude::*;

    const EXAMPLES: &[&str] = &[
        "AL47212110090000000235698741",
        "BE68539007547034",
        "DE89370400440532013000",
        "FR1420041010050500013M02606",
        "GB29NWBK60161331926819",
        "IE29AIBK93115212345678",
        "IT60X0542811101000000123456",
        "MT84MALT011000012345MTLCAST001S",
        "NO9386011117947",
        "SC18SSCB11010000000000001497USD",
    ];

    /// Countries whose national rule detects every single-digit substitution
    /// within the fields it reads.
    const SUBSTITUTION_DETECTING: &[&str] = &[
        "AL47212110090000000235698741",
        "BA391290079401028494",
        "BE68539007547034",
        "CZ6508000000192000145399",
        "EE382200221020145685",
        "FI2112345600000785",
        "FR1420041010050500013M02606",
        "HR1210010051863000160",
        "HU42117730161111101800000000",
        "IT60X0542811101000000123456",
        "MC5811222000010123456789030",
        "ME25505000012345678951",
        "MK07250120000058984",
        "PL61109010140000071219812874",
        "PT50000201231234567890154",
        "RS35260005601001611379",
        "SI56263300012039086",
        "SK3112000000198742637541",
        "SM86U0322509800000000270100",
        "TL380080012345678910157",
    ];

    fn respace(compact: &str, gaps: &[usize], lower: &[bool]) -> String {
        let mut out = String::new();
        for (i, c) in compact.chars().enumerate() {
            if gaps.contains(&i) {
                out.push(' ');
            }
            if lower.get(i).copied().unwrap_or(false) {
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c);
            }
        }
        out
    }

    /// BBAN offsets of the digits a country's national rule reads.
    fn checked_digit_positions(iban: &Iban) -> Vec<usize> {
        let Some(rule) = national::rule(iban.country_code()) else {
            return Vec::new();
        };
        let read: Vec<FieldKind> = rule
            .checks(iban.fields())
            .iter()
            .flat_map(|check| match check.input {
                national::Input::Fields(kinds) => kinds.to_vec(),
                national::Input::Slice(kind, _, _) => vec![kind],
            })
            .collect();
        let mut positions = Vec::new();
        let mut offset = 0;
        for (kind, segment) in iban.segments() {
            for (i, b) in segment.bytes().enumerate() {
                if read.contains(&kind) && b.is_ascii_digit() {
                    positions.push(offset + i);
                }
            }
            offset += segment.len();
        }
        positions
    }

    proptest! {
        /// Whitespace placement and letter case never change the result.
        #[test]
        fn whitespace_and_case_invariant(
            idx in 0..EXAMPLES.len(),
            gaps in prop::collection::vec(0usize..34, 0..8),
            lower in prop::collection::vec(any::<bool>(), 34),
        ) {
            let compact = EXAMPLES[idx];
            let expected = parse(compact).unwrap();
            let messy = respace(compact, &gaps, &lower);
            prop_assert_eq!(parse(&messy), Ok(expected));
        }

        /// Re-parsing the compact and pretty forms yields an equal value.
        #[test]
        fn text_forms_roundtrip(idx in 0..EXAMPLES.len()) {
            let iban = parse(EXAMPLES[idx]).unwrap();
            prop_assert_eq!(parse(&iban.compact()), Ok(iban.clone()));
            prop_assert_eq!(parse(&iban.pretty()), Ok(iban));
        }

        /// Any single-digit substitution in the BBAN fails validation.
        #[test]
        fn generic_checksum_detects_substitution(
            idx in 0..EXAMPLES.len(),
            pos in any::<prop::sample::Index>(),
            digit in 0u8..10,
        ) {
            let original = EXAMPLES[idx];
            let digits: Vec<usize> = original
                .bytes()
                .enumerate()
                .skip(4)
                .filter(|(_, b)| b.is_ascii_digit())
                .map(|(i, _)| i)
                .collect();
            let at = digits[pos.index(digits.len())];
            let replacement = b'0' + digit;
            prop_assume!(original.as_bytes()[at] != replacement);
            let mut bytes = original.as_bytes().to_vec();
            bytes[at] = replacement;
            let changed = String::from_utf8(bytes).unwrap();
            prop_assert!(parse(&changed).is_err());
        }

        /// With the generic check digits recomputed, a single-digit
        /// substitution inside the fields a national rule reads is caught
        /// by that rule.
        #[test]
        fn national_rule_detects_substitution(
            idx in 0..SUBSTITUTION_DETECTING.len(),
            pos in any::<prop::sample::Index>(),
            digit in 0u8..10,
        ) {
            let iban = parse(SUBSTITUTION_DETECTING[idx]).unwrap();
            let positions = checked_digit_positions(&iban);
            prop_assert!(!positions.is_empty());
            let at = positions[pos.index(positions.len())];
            let replacement = b'0' + digit;
            prop_assume!(iban.bban().as_bytes()[at] != replacement);

            let mut bban = iban.bban().as_bytes().to_vec();
            bban[at] = replacement;
            let bban = String::from_utf8(bban).unwrap();
            let country = iban.country_code();
            let check = generic_check_digits(country, &bban).unwrap();
            let changed = format!("{country}{check:02}{bban}");

            prop_assert_eq!(
                parse(&changed).map_err(|e| e.kind()),
                Err(ErrorKind::NationalChecksum),
                "{} -> {}", iban.compact(), changed
            );
        }

        /// Arbitrary input never panics.
        #[test]
        fn never_panics(input in "\\PC{0,40}") {
            let _ = parse(&input);
        }
    }
}
