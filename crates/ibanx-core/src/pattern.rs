//! # Structural Pattern Table
//!
//! Per-country layout of the BBAN as an ordered list of fixed-width
//! fields, each constrained to a [`Charset`]. Every national format in the
//! IBAN registry is a fixed-width concatenation, so matching is a single
//! left-to-right pass with no backtracking.
//!
//! A [`FieldKind`] may appear more than once in a pattern. Ireland's BIC
//! bank code and sort code both form the bank code, and Hungary's two
//! check digits both form the national checksum. The field value is the
//! concatenation of its segments in BBAN order.
//!
//! Countries without a pattern accept any uppercase alphanumeric BBAN.

use serde::{Deserialize, Serialize};

use crate::charset::Charset;
use crate::error::{IbanError, Mismatch};

use FieldKind as F;

/// Named component of a BBAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// National bank identifier (including Ireland's BIC bank code).
    BankCode,
    /// Branch, sort, or agency code.
    BranchCode,
    /// Account number proper.
    AccountNumber,
    /// Account type indicator.
    AccountType,
    /// National check digit(s).
    NationalChecksum,
    /// ISO 4217 currency code (Mauritius, Seychelles) or currency indicator.
    CurrencyCode,
    /// Owner account number (Brazil).
    OwnerAccountNumber,
    /// Owner identification number, e.g. the Icelandic kennitala.
    OwnerIdentificationNumber,
    /// Balance account number (Belarus).
    BalanceAccountNumber,
    /// Account-number prefix (Czechia, Slovakia).
    AccountNumberPrefix,
    /// Positions the national format fixes without assigning a meaning.
    Reserved,
}

impl FieldKind {
    /// Number of field kinds.
    pub const COUNT: usize = 11;

    /// All field kinds in declaration order.
    pub const ALL: [FieldKind; Self::COUNT] = [
        Self::BankCode,
        Self::BranchCode,
        Self::AccountNumber,
        Self::AccountType,
        Self::NationalChecksum,
        Self::CurrencyCode,
        Self::OwnerAccountNumber,
        Self::OwnerIdentificationNumber,
        Self::BalanceAccountNumber,
        Self::AccountNumberPrefix,
        Self::Reserved,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Lowercase human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankCode => "bank code",
            Self::BranchCode => "branch code",
            Self::AccountNumber => "account number",
            Self::AccountType => "account type",
            Self::NationalChecksum => "national checksum",
            Self::CurrencyCode => "currency code",
            Self::OwnerAccountNumber => "owner account number",
            Self::OwnerIdentificationNumber => "owner identification number",
            Self::BalanceAccountNumber => "balance account number",
            Self::AccountNumberPrefix => "account number prefix",
            Self::Reserved => "reserved",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fixed-width segment of a BBAN pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Field the segment belongs to.
    pub kind: FieldKind,
    /// Width in characters.
    pub width: usize,
    /// Character class of the segment.
    pub charset: Charset,
}

const fn n(kind: FieldKind, width: usize) -> FieldSpec {
    FieldSpec {
        kind,
        width,
        charset: Charset::Numeric,
    }
}

const fn a(kind: FieldKind, width: usize) -> FieldSpec {
    FieldSpec {
        kind,
        width,
        charset: Charset::Alphabetic,
    }
}

const fn c(kind: FieldKind, width: usize) -> FieldSpec {
    FieldSpec {
        kind,
        width,
        charset: Charset::Alphanumeric,
    }
}

/// Decomposed BBAN fields, keyed by [`FieldKind`].
///
/// Kinds a country does not define are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fields {
    values: [Option<String>; FieldKind::COUNT],
}

impl Fields {
    /// Value of `kind`, if the country defines it.
    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        self.values[kind.index()].as_deref()
    }

    /// Defined fields in [`FieldKind`] declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKind, &str)> {
        FieldKind::ALL
            .iter()
            .filter_map(|&kind| self.get(kind).map(|v| (kind, v)))
    }

    /// Returns true if no field is defined.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    fn push(&mut self, kind: FieldKind, segment: &str) {
        self.values[kind.index()]
            .get_or_insert_with(String::new)
            .push_str(segment);
    }
}

/// Structure of one country's BBAN.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct BbanPattern {
    country: &'static str,
    fields: &'static [FieldSpec],
}

impl BbanPattern {
    const fn new(country: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { country, fields }
    }

    /// Country code the pattern belongs to.
    pub fn country(&self) -> &'static str {
        self.country
    }

    /// Segments in BBAN order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// BBAN length: the sum of all segment widths.
    pub fn bban_len(&self) -> usize {
        self.fields.iter().map(|f| f.width).sum()
    }

    /// Total IBAN length for this country.
    pub fn iban_len(&self) -> usize {
        self.bban_len() + 4
    }

    /// Returns true if the pattern defines `kind`.
    pub fn defines(&self, kind: FieldKind) -> bool {
        self.fields.iter().any(|f| f.kind == kind)
    }

    /// Registry-style notation, e.g. `8!n10!n` for Germany.
    pub fn notation(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("{}!{}", f.width, f.charset.as_str()))
            .collect()
    }

    /// Walk the pattern over `bban`, yielding each segment with its kind.
    ///
    /// Stops early if `bban` is shorter than the pattern; callers that need
    /// an exact match use [`BbanPattern::decompose()`].
    pub fn segments<'a>(
        &'a self,
        bban: &'a str,
    ) -> impl Iterator<Item = (FieldKind, &'a str)> + 'a {
        self.fields.iter().scan(0usize, move |offset, spec| {
            let start = *offset;
            *offset += spec.width;
            bban.get(start..*offset).map(|segment| (spec.kind, segment))
        })
    }

    /// Match `bban` exactly against the pattern.
    ///
    /// # Errors
    ///
    /// Returns [`IbanError::StructuralMismatch`] if the length differs from
    /// [`BbanPattern::bban_len()`] or a segment violates its charset.
    pub fn decompose(&self, bban: &str) -> Result<Fields, IbanError> {
        let expected = self.bban_len();
        if bban.len() != expected {
            return Err(IbanError::StructuralMismatch {
                country: self.country,
                field: None,
                mismatch: Mismatch::Length {
                    expected,
                    actual: bban.len(),
                },
            });
        }

        let mut fields = Fields::default();
        let mut offset = 0;
        for spec in self.fields {
            let segment = bban.get(offset..offset + spec.width).ok_or_else(|| {
                IbanError::StructuralMismatch {
                    country: self.country,
                    field: Some(spec.kind),
                    mismatch: Mismatch::Charset {
                        expected: spec.charset,
                        position: offset,
                    },
                }
            })?;
            if let Some(i) = spec.charset.first_mismatch(segment) {
                return Err(IbanError::StructuralMismatch {
                    country: self.country,
                    field: Some(spec.kind),
                    mismatch: Mismatch::Charset {
                        expected: spec.charset,
                        position: offset + i,
                    },
                });
            }
            fields.push(spec.kind, segment);
            offset += spec.width;
        }
        Ok(fields)
    }
}

/// Structural pattern for `country`, if one is documented.
pub fn pattern(country: &str) -> Option<&'static BbanPattern> {
    PATTERNS
        .binary_search_by(|p| p.country.cmp(country))
        .ok()
        .map(|i| &PATTERNS[i])
}

/// All patterns, sorted by country code.
pub fn patterns() -> &'static [BbanPattern] {
    PATTERNS
}

/// Sorted by country code. Widths follow the SWIFT IBAN registry; the
/// Czech and Slovak prefix is the six-digit account-number prefix.
static PATTERNS: &[BbanPattern] = &[
    BbanPattern::new("AD", &[n(F::BankCode, 4), n(F::BranchCode, 4), c(F::AccountNumber, 12)]),
    BbanPattern::new("AE", &[n(F::BankCode, 3), n(F::AccountNumber, 16)]),
    BbanPattern::new(
        "AL",
        &[
            n(F::BankCode, 3),
            n(F::BranchCode, 4),
            n(F::NationalChecksum, 1),
            c(F::AccountNumber, 16),
        ],
    ),
    BbanPattern::new("AT", &[n(F::BankCode, 5), n(F::AccountNumber, 11)]),
    BbanPattern::new("AZ", &[a(F::BankCode, 4), c(F::AccountNumber, 20)]),
    BbanPattern::new(
        "BA",
        &[
            n(F::BankCode, 3),
            n(F::BranchCode, 3),
            n(F::AccountNumber, 8),
            n(F::NationalChecksum, 2),
        ],
    ),
    BbanPattern::new("BE", &[n(F::BankCode, 3), n(F::AccountNumber, 7), n(F::NationalChecksum, 2)]),
    BbanPattern::new(
        "BG",
        &[
            a(F::BankCode, 4),
            n(F::BranchCode, 4),
            n(F::AccountType, 2),
            c(F::AccountNumber, 8),
        ],
    ),
    BbanPattern::new("BH", &[a(F::BankCode, 4), c(F::AccountNumber, 14)]),
    BbanPattern::new(
        "BR",
        &[
            n(F::BankCode, 8),
            n(F::BranchCode, 5),
            n(F::AccountNumber, 10),
            a(F::AccountType, 1),
            c(F::OwnerAccountNumber, 1),
        ],
    ),
    BbanPattern::new(
        "BY",
        &[
            c(F::BankCode, 4),
            n(F::BalanceAccountNumber, 4),
            c(F::AccountNumber, 16),
        ],
    ),
    BbanPattern::new("CH", &[n(F::BankCode, 5), c(F::AccountNumber, 12)]),
    BbanPattern::new("CR", &[n(F::Reserved, 1), n(F::BankCode, 3), n(F::AccountNumber, 14)]),
    BbanPattern::new("CY", &[n(F::BankCode, 3), n(F::BranchCode, 5), c(F::AccountNumber, 16)]),
    BbanPattern::new(
        "CZ",
        &[
            n(F::BankCode, 4),
            n(F::AccountNumberPrefix, 6),
            n(F::AccountNumber, 10),
        ],
    ),
    BbanPattern::new("DE", &[n(F::BankCode, 8), n(F::AccountNumber, 10)]),
    BbanPattern::new("DK", &[n(F::BankCode, 4), n(F::AccountNumber, 9), n(F::NationalChecksum, 1)]),
    BbanPattern::new("DO", &[a(F::BankCode, 4), n(F::AccountNumber, 20)]),
    BbanPattern::new(
        "EE",
        &[
            n(F::BankCode, 2),
            n(F::BranchCode, 2),
            n(F::AccountNumber, 11),
            n(F::NationalChecksum, 1),
        ],
    ),
    BbanPattern::new("EG", &[n(F::BankCode, 4), n(F::BranchCode, 4), n(F::AccountNumber, 17)]),
    BbanPattern::new(
        "ES",
        &[
            n(F::BankCode, 4),
            n(F::BranchCode, 4),
            n(F::NationalChecksum, 2),
            n(F::AccountNumber, 10),
        ],
    ),
    BbanPattern::new("FI", &[n(F::BankCode, 6), n(F::AccountNumber, 7), n(F::NationalChecksum, 1)]),
    BbanPattern::new("FO", &[n(F::BankCode, 4), n(F::AccountNumber, 9), n(F::NationalChecksum, 1)]),
    BbanPattern::new(
        "FR",
        &[
            n(F::BankCode, 5),
            n(F::BranchCode, 5),
            c(F::AccountNumber, 11),
            n(F::NationalChecksum, 2),
        ],
    ),
    BbanPattern::new("GB", &[a(F::BankCode, 4), n(F::BranchCode, 6), n(F::AccountNumber, 8)]),
    BbanPattern::new("GE", &[c(F::BankCode, 2), n(F::AccountNumber, 16)]),
    BbanPattern::new("GI", &[a(F::BankCode, 4), c(F::AccountNumber, 15)]),
    BbanPattern::new("GL", &[n(F::BankCode, 4), n(F::AccountNumber, 9), n(F::NationalChecksum, 1)]),
    BbanPattern::new("GR", &[n(F::BankCode, 3), n(F::BranchCode, 4), c(F::AccountNumber, 16)]),
    BbanPattern::new(
        "GT",
        &[
            c(F::BankCode, 4),
            c(F::CurrencyCode, 2),
            c(F::AccountType, 2),
            c(F::AccountNumber, 16),
        ],
    ),
    BbanPattern::new("HR", &[n(F::BankCode, 7), n(F::AccountNumber, 10)]),
    BbanPattern::new(
        "HU",
        &[
            n(F::BankCode, 3),
            n(F::BranchCode, 4),
            n(F::NationalChecksum, 1),
            n(F::AccountNumber, 15),
            n(F::NationalChecksum, 1),
        ],
    ),
    BbanPattern::new("IE", &[c(F::BankCode, 4), n(F::BankCode, 6), n(F::AccountNumber, 8)]),
    BbanPattern::new("IL", &[n(F::BankCode, 3), n(F::BranchCode, 3), n(F::AccountNumber, 13)]),
    BbanPattern::new("IQ", &[a(F::BankCode, 4), n(F::BranchCode, 3), n(F::AccountNumber, 12)]),
    BbanPattern::new(
        "IS",
        &[
            n(F::BankCode, 2),
            n(F::BranchCode, 2),
            n(F::AccountType, 2),
            n(F::AccountNumber, 6),
            n(F::OwnerIdentificationNumber, 10),
        ],
    ),
    BbanPattern::new(
        "IT",
        &[
            a(F::NationalChecksum, 1),
            n(F::BankCode, 5),
            n(F::BranchCode, 5),
            c(F::AccountNumber, 12),
        ],
    ),
    BbanPattern::new("JO", &[a(F::BankCode, 4), n(F::BranchCode, 4), n(F::AccountNumber, 18)]),
    BbanPattern::new("KW", &[a(F::BankCode, 4), c(F::AccountNumber, 22)]),
    BbanPattern::new("KZ", &[n(F::BankCode, 3), c(F::AccountNumber, 13)]),
    BbanPattern::new("LB", &[n(F::BankCode, 4), c(F::AccountNumber, 20)]),
    BbanPattern::new("LC", &[a(F::BankCode, 4), c(F::AccountNumber, 24)]),
    BbanPattern::new("LI", &[n(F::BankCode, 5), c(F::AccountNumber, 12)]),
    BbanPattern::new("LT", &[n(F::BankCode, 5), n(F::AccountNumber, 11)]),
    BbanPattern::new("LU", &[n(F::BankCode, 3), c(F::AccountNumber, 13)]),
    BbanPattern::new("LV", &[a(F::BankCode, 4), c(F::AccountNumber, 13)]),
    BbanPattern::new("LY", &[n(F::BankCode, 3), n(F::BranchCode, 3), n(F::AccountNumber, 15)]),
    BbanPattern::new(
        "MC",
        &[
            n(F::BankCode, 5),
            n(F::BranchCode, 5),
            c(F::AccountNumber, 11),
            n(F::NationalChecksum, 2),
        ],
    ),
    BbanPattern::new("MD", &[c(F::BankCode, 2), c(F::AccountNumber, 18)]),
    BbanPattern::new(
        "ME",
        &[
            n(F::BankCode, 3),
            n(F::AccountNumber, 13),
            n(F::NationalChecksum, 2),
        ],
    ),
    BbanPattern::new(
        "MK",
        &[
            n(F::BankCode, 3),
            c(F::AccountNumber, 10),
            n(F::NationalChecksum, 2),
        ],
    ),
    BbanPattern::new(
        "MR",
        &[
            n(F::BankCode, 5),
            n(F::BranchCode, 5),
            n(F::AccountNumber, 11),
            n(F::NationalChecksum, 2),
        ],
    ),
    BbanPattern::new("MT", &[a(F::BankCode, 4), n(F::BranchCode, 5), c(F::AccountNumber, 18)]),
    BbanPattern::new(
        "MU",
        &[
            a(F::BankCode, 4),
            n(F::BankCode, 2),
            n(F::BranchCode, 2),
            n(F::AccountNumber, 12),
            n(F::Reserved, 3),
            a(F::CurrencyCode, 3),
        ],
    ),
    BbanPattern::new("NL", &[a(F::BankCode, 4), n(F::AccountNumber, 10)]),
    BbanPattern::new("NO", &[n(F::BankCode, 4), n(F::AccountNumber, 6), n(F::NationalChecksum, 1)]),
    BbanPattern::new("PK", &[c(F::BankCode, 4), n(F::AccountNumber, 16)]),
    BbanPattern::new(
        "PL",
        &[
            n(F::BankCode, 3),
            n(F::BranchCode, 4),
            n(F::NationalChecksum, 1),
            n(F::AccountNumber, 16),
        ],
    ),
    BbanPattern::new("PS", &[c(F::BankCode, 4), n(F::AccountNumber, 21)]),
    BbanPattern::new(
        "PT",
        &[
            n(F::BankCode, 4),
            n(F::BranchCode, 4),
            n(F::AccountNumber, 11),
            n(F::NationalChecksum, 2),
        ],
    ),
    BbanPattern::new("QA", &[a(F::BankCode, 4), c(F::AccountNumber, 21)]),
    BbanPattern::new("RO", &[a(F::BankCode, 4), c(F::AccountNumber, 16)]),
    BbanPattern::new(
        "RS",
        &[
            n(F::BankCode, 3),
            n(F::AccountNumber, 13),
            n(F::NationalChecksum, 2),
        ],
    ),
    BbanPattern::new("RU", &[n(F::BankCode, 9), n(F::BranchCode, 5), c(F::AccountNumber, 15)]),
    BbanPattern::new("SA", &[n(F::BankCode, 2), c(F::AccountNumber, 18)]),
    BbanPattern::new(
        "SC",
        &[
            a(F::BankCode, 4),
            n(F::BankCode, 2),
            n(F::BranchCode, 2),
            n(F::AccountNumber, 16),
            a(F::CurrencyCode, 3),
        ],
    ),
    BbanPattern::new("SD", &[n(F::BankCode, 2), n(F::AccountNumber, 12)]),
    BbanPattern::new(
        "SE",
        &[
            n(F::BankCode, 3),
            n(F::AccountNumber, 16),
            n(F::NationalChecksum, 1),
        ],
    ),
    BbanPattern::new(
        "SI",
        &[
            n(F::BankCode, 2),
            n(F::BranchCode, 3),
            n(F::AccountNumber, 8),
            n(F::NationalChecksum, 2),
        ],
    ),
    BbanPattern::new(
        "SK",
        &[
            n(F::BankCode, 4),
            n(F::AccountNumberPrefix, 6),
            n(F::AccountNumber, 10),
        ],
    ),
    BbanPattern::new(
        "SM",
        &[
            a(F::NationalChecksum, 1),
            n(F::BankCode, 5),
            n(F::BranchCode, 5),
            c(F::AccountNumber, 12),
        ],
    ),
    BbanPattern::new("ST", &[n(F::BankCode, 4), n(F::BranchCode, 4), n(F::AccountNumber, 13)]),
    BbanPattern::new("SV", &[a(F::BankCode, 4), n(F::AccountNumber, 20)]),
    BbanPattern::new(
        "TL",
        &[
            n(F::BankCode, 3),
            n(F::AccountNumber, 14),
            n(F::NationalChecksum, 2),
        ],
    ),
    BbanPattern::new(
        "TN",
        &[
            n(F::BankCode, 2),
            n(F::BranchCode, 3),
            n(F::AccountNumber, 13),
            n(F::NationalChecksum, 2),
        ],
    ),
    BbanPattern::new("TR", &[n(F::BankCode, 5), c(F::Reserved, 1), c(F::AccountNumber, 16)]),
    BbanPattern::new("UA", &[n(F::BankCode, 6), c(F::AccountNumber, 19)]),
    BbanPattern::new("VA", &[n(F::BankCode, 3), n(F::AccountNumber, 15)]),
    BbanPattern::new("VG", &[c(F::BankCode, 4), n(F::AccountNumber, 16)]),
    BbanPattern::new("XK", &[n(F::BankCode, 4), n(F::AccountNumber, 12)]),
];

#[cfg(test)]
mod tests {
    use super::*;

    /// IBAN lengths published in the SWIFT IBAN registry.
    const REGISTRY_LENGTHS: &[(&str, usize)] = &[
        ("AD", 24),
        ("AE", 23),
        ("AL", 28),
        ("AT", 20),
        ("AZ", 28),
        ("BA", 20),
        ("BE", 16),
        ("BG", 22),
        ("BH", 22),
        ("BR", 29),
        ("BY", 28),
        ("CH", 21),
        ("CR", 22),
        ("CY", 28),
        ("CZ", 24),
        ("DE", 22),
        ("DK", 18),
        ("DO", 28),
        ("EE", 20),
        ("EG", 29),
        ("ES", 24),
        ("FI", 18),
        ("FO", 18),
        ("FR", 27),
        ("GB", 22),
        ("GE", 22),
        ("GI", 23),
        ("GL", 18),
        ("GR", 27),
        ("GT", 28),
        ("HR", 21),
        ("HU", 28),
        ("IE", 22),
        ("IL", 23),
        ("IQ", 23),
        ("IS", 26),
        ("IT", 27),
        ("JO", 30),
        ("KW", 30),
        ("KZ", 20),
        ("LB", 28),
        ("LC", 32),
        ("LI", 21),
        ("LT", 20),
        ("LU", 20),
        ("LV", 21),
        ("LY", 25),
        ("MC", 27),
        ("MD", 24),
        ("ME", 22),
        ("MK", 19),
        ("MR", 27),
        ("MT", 31),
        ("MU", 30),
        ("NL", 18),
        ("NO", 15),
        ("PK", 24),
        ("PL", 28),
        ("PS", 29),
        ("PT", 25),
        ("QA", 29),
        ("RO", 24),
        ("RS", 22),
        ("RU", 33),
        ("SA", 24),
        ("SC", 31),
        ("SD", 18),
        ("SE", 24),
        ("SI", 19),
        ("SK", 24),
        ("SM", 27),
        ("ST", 25),
        ("SV", 28),
        ("TL", 23),
        ("TN", 24),
        ("TR", 26),
        ("UA", 29),
        ("VA", 22),
        ("VG", 24),
        ("XK", 20),
    ];

    #[test]
    fn test_patterns_sorted_and_unique() {
        for pair in PATTERNS.windows(2) {
            assert!(pair[0].country < pair[1].country, "{} / {}", pair[0].country, pair[1].country);
        }
    }

    #[test]
    fn test_pattern_lengths_match_registry() {
        assert_eq!(PATTERNS.len(), REGISTRY_LENGTHS.len());
        for &(country, len) in REGISTRY_LENGTHS {
            let p = pattern(country).unwrap_or_else(|| panic!("no pattern for {country}"));
            assert_eq!(p.iban_len(), len, "{country}");
        }
    }

    #[test]
    fn test_every_pattern_has_bank_code_and_no_empty_segment() {
        for p in patterns() {
            assert!(p.defines(FieldKind::BankCode), "{}", p.country());
            assert!(p.fields().iter().all(|f| f.width > 0), "{}", p.country());
            assert!(p.iban_len() <= crate::MAX_LEN, "{}", p.country());
        }
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(pattern("US").is_none());
        assert!(pattern("ZZ").is_none());
        assert!(pattern("").is_none());
        assert!(pattern("de").is_none());
    }

    #[test]
    fn test_decompose_germany() {
        let p = pattern("DE").unwrap();
        assert_eq!(p.notation(), "8!n10!n");
        let fields = p.decompose("120300000000202051").unwrap();
        assert_eq!(fields.get(FieldKind::BankCode), Some("12030000"));
        assert_eq!(fields.get(FieldKind::AccountNumber), Some("0000202051"));
        assert_eq!(fields.get(FieldKind::BranchCode), None);
        assert_eq!(fields.iter().count(), 2);
    }

    #[test]
    fn test_decompose_ireland_joins_bank_code_segments() {
        let fields = pattern("IE").unwrap().decompose("AIBK93115212345678").unwrap();
        assert_eq!(fields.get(FieldKind::BankCode), Some("AIBK931152"));
        assert_eq!(fields.get(FieldKind::AccountNumber), Some("12345678"));
    }

    #[test]
    fn test_decompose_hungary_joins_check_digits() {
        let fields = pattern("HU").unwrap().decompose("117730161111101800000000").unwrap();
        assert_eq!(fields.get(FieldKind::BankCode), Some("117"));
        assert_eq!(fields.get(FieldKind::BranchCode), Some("7301"));
        assert_eq!(fields.get(FieldKind::AccountNumber), Some("111110180000000"));
        assert_eq!(fields.get(FieldKind::NationalChecksum), Some("60"));
    }

    #[test]
    fn test_decompose_costa_rica_reserved_digit() {
        let fields = pattern("CR").unwrap().decompose("015202001026284066").unwrap();
        assert_eq!(fields.get(FieldKind::Reserved), Some("0"));
        assert_eq!(fields.get(FieldKind::BankCode), Some("152"));
    }

    #[test]
    fn test_decompose_length_mismatch() {
        let err = pattern("DE").unwrap().decompose("12030000000020205").unwrap_err();
        assert_eq!(
            err,
            IbanError::StructuralMismatch {
                country: "DE",
                field: None,
                mismatch: Mismatch::Length {
                    expected: 18,
                    actual: 17
                },
            }
        );
    }

    #[test]
    fn test_decompose_charset_mismatch_names_field() {
        let err = pattern("NL").unwrap().decompose("AB1A0417164300").unwrap_err();
        assert_eq!(
            err,
            IbanError::StructuralMismatch {
                country: "NL",
                field: Some(FieldKind::BankCode),
                mismatch: Mismatch::Charset {
                    expected: Charset::Alphabetic,
                    position: 2
                },
            }
        );

        let err = pattern("DE").unwrap().decompose("12030000000020205X").unwrap_err();
        assert!(matches!(
            err,
            IbanError::StructuralMismatch {
                field: Some(FieldKind::AccountNumber),
                mismatch: Mismatch::Charset { position: 17, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_segments_reconstruct_bban() {
        let bban = "MALT011000012345MTLCAST001S";
        let p = pattern("MT").unwrap();
        let joined: String = p.segments(bban).map(|(_, s)| s).collect();
        assert_eq!(joined, bban);
        let kinds: Vec<FieldKind> = p.segments(bban).map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![FieldKind::BankCode, FieldKind::BranchCode, FieldKind::AccountNumber]
        );
    }

    #[test]
    fn test_segments_stop_on_short_input() {
        let p = pattern("DE").unwrap();
        assert_eq!(p.segments("1203").count(), 0);
        assert_eq!(p.segments("1203000000").count(), 1);
    }

    #[test]
    fn test_locally_built_pattern_walks_and_decomposes() {
        const FIELDS: &[FieldSpec] = &[n(F::BankCode, 2), a(F::AccountNumber, 3)];
        let local = BbanPattern::new("XX", FIELDS);
        let segments: Vec<(FieldKind, &str)> = local.segments("12ABC").collect();
        assert_eq!(segments, vec![(F::BankCode, "12"), (F::AccountNumber, "ABC")]);
        let fields = local.decompose("12ABC").unwrap();
        assert_eq!(fields.get(F::AccountNumber), Some("ABC"));
        assert!(local.decompose("12AB1").is_err());
    }
}
