//! # National Checksum Dispatcher
//!
//! Country-specific check-digit rules, evaluated after a BBAN has been
//! decomposed into its [`Fields`]. A rule is plain data: one or more
//! [`Check`]s, each naming its input fields, the [`Algorithm`] applied to
//! them, and the [`Expected`] value the result must equal.
//!
//! ## Coverage
//!
//! Albania, Belgium, Bosnia and Herzegovina, Croatia, Czechia, Estonia,
//! Finland, France, Hungary, Iceland, Italy, Monaco, Montenegro, North
//! Macedonia, Norway, Poland, Portugal, San Marino, Serbia, Slovakia,
//! Slovenia, Spain, and Timor-Leste. Countries with national check digits
//! that are not listed (Denmark, Sweden, ...) are only verified
//! structurally.
//!
//! ## Input Discipline
//!
//! Digit algorithms only accept ASCII-digit input. A check whose input
//! holds a letter (possible where the structure allows alphanumeric
//! accounts) fails instead of producing a meaningless remainder.

use crate::checksum::{
    iso7064_mod11_10_check, iso7064_mod97_10, luhn, transliterate_french, weighted_sum,
    Complement, Direction,
};
use crate::pattern::{FieldKind, Fields};

use crate::pattern::FieldKind as F;

/// Country-specific check-digit rule.
#[derive(Debug, PartialEq, Eq)]
pub enum NationalRule {
    /// Every check must pass.
    All(&'static [Check]),
    /// Selects one set of checks depending on the field values.
    Guarded {
        /// Condition selecting `then` over `otherwise`.
        guard: Guard,
        /// Checks applied when the guard holds.
        then: &'static [Check],
        /// Checks applied when it does not.
        otherwise: &'static [Check],
    },
}

/// Condition over decomposed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// The field value starts with the given prefix.
    FieldStartsWith(FieldKind, &'static str),
}

/// One check digit (or group of digits) and how to verify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    /// Field reported when the check fails.
    pub target: FieldKind,
    /// Characters the algorithm runs over.
    pub input: Input,
    /// Algorithm producing the computed value.
    pub algorithm: Algorithm,
    /// Value the computed one must equal.
    pub expected: Expected,
}

/// Source string of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Concatenation of whole fields, in the given order.
    Fields(&'static [FieldKind]),
    /// Characters `start..end` of one field.
    Slice(FieldKind, usize, usize),
}

/// Algorithm turning the input into a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// ISO 7064 MOD 97-10 check value: `98 - r` over the input with `"00"`
    /// appended.
    Mod97Complement,
    /// Plain remainder modulo 97, with 0 mapped to 97.
    Mod97Remainder,
    /// French RIB letter transliteration, then the raw MOD 97-10
    /// remainder.
    Mod97Transliterated,
    /// ISO 7064 MOD 11-10 check value of the input.
    Mod11_10,
    /// Weighted digit sum.
    Weighted {
        modulus: u32,
        weights: &'static [u32],
        direction: Direction,
        complement: Complement,
    },
    /// Luhn check digit.
    Luhn,
    /// Italian CIN: characters at even positions go through the odd table,
    /// the rest count at face value; the sum modulo 26 is a letter index.
    OddEvenLetter,
}

/// Value a check's result is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The whole national checksum field: digits read as a number, a
    /// single letter as its alphabet index.
    NationalChecksum,
    /// The character at the index within the national checksum field.
    NationalChecksumDigit(usize),
    /// The character at the index within another field.
    FieldChar(FieldKind, usize),
    /// A constant.
    Value(u32),
}

/// Italian CIN table for characters at odd (1-based) positions.
const ODD_TABLE: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

/// Numeric value of a single character: digit value or letter index.
fn char_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(u32::from(c - b'0')),
        b'A'..=b'Z' => Some(u32::from(c - b'A')),
        _ => None,
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl Input {
    fn resolve(&self, fields: &Fields) -> Option<String> {
        match *self {
            Self::Fields(kinds) => Some(
                kinds
                    .iter()
                    .filter_map(|&kind| fields.get(kind))
                    .collect(),
            ),
            Self::Slice(kind, start, end) => {
                fields.get(kind)?.get(start..end).map(str::to_string)
            }
        }
    }
}

impl Algorithm {
    /// Run the algorithm over `s`. `None` if `s` holds characters the
    /// algorithm does not accept.
    pub fn compute(&self, s: &str) -> Option<u32> {
        match *self {
            Self::Mod97Complement => {
                all_digits(s).then(|| 98 - iso7064_mod97_10(&format!("{s}00")))
            }
            Self::Mod97Remainder => all_digits(s).then(|| match iso7064_mod97_10(s) {
                0 => 97,
                r => r,
            }),
            Self::Mod97Transliterated => {
                let digits = transliterate_french(s);
                all_digits(&digits).then(|| iso7064_mod97_10(&digits))
            }
            Self::Mod11_10 => all_digits(s).then(|| iso7064_mod11_10_check(s)),
            Self::Weighted {
                modulus,
                weights,
                direction,
                complement,
            } => all_digits(s).then(|| {
                complement.apply(weighted_sum(s, modulus, weights, direction), modulus)
            }),
            Self::Luhn => all_digits(s).then(|| luhn(s)),
            Self::OddEvenLetter => {
                let mut sum = 0;
                for (i, b) in s.bytes().enumerate() {
                    let v = char_value(b)?;
                    sum += if i % 2 == 0 { ODD_TABLE[v as usize] } else { v };
                }
                Some(sum % 26)
            }
        }
    }
}

impl Expected {
    fn resolve(&self, fields: &Fields) -> Option<u32> {
        match *self {
            Self::NationalChecksum => {
                let value = fields.get(F::NationalChecksum)?;
                match value.as_bytes() {
                    [b] if b.is_ascii_uppercase() => char_value(*b),
                    _ if !value.is_empty() && all_digits(value) => value.parse().ok(),
                    _ => None,
                }
            }
            Self::NationalChecksumDigit(i) => {
                Self::FieldChar(F::NationalChecksum, i).resolve(fields)
            }
            Self::FieldChar(kind, i) => {
                fields.get(kind)?.as_bytes().get(i).copied().and_then(char_value)
            }
            Self::Value(v) => Some(v),
        }
    }
}

impl Check {
    /// Returns true if the check holds over `fields`. Missing fields and
    /// unexpected characters fail.
    pub fn passes(&self, fields: &Fields) -> bool {
        let computed = self
            .input
            .resolve(fields)
            .and_then(|s| self.algorithm.compute(&s));
        match (computed, self.expected.resolve(fields)) {
            (Some(computed), Some(expected)) => computed == expected,
            _ => false,
        }
    }
}

impl Guard {
    fn holds(&self, fields: &Fields) -> bool {
        match *self {
            Self::FieldStartsWith(kind, prefix) => {
                fields.get(kind).is_some_and(|v| v.starts_with(prefix))
            }
        }
    }
}

impl NationalRule {
    /// Checks that apply to `fields`.
    pub fn checks(&self, fields: &Fields) -> &'static [Check] {
        match *self {
            Self::All(checks) => checks,
            Self::Guarded {
                guard,
                then,
                otherwise,
            } => {
                if guard.holds(fields) {
                    then
                } else {
                    otherwise
                }
            }
        }
    }

    /// Verify every applicable check, in order.
    ///
    /// # Errors
    ///
    /// Returns the target field of the first failing check.
    pub fn verify(&self, fields: &Fields) -> Result<(), FieldKind> {
        match self.checks(fields).iter().find(|check| !check.passes(fields)) {
            Some(check) => Err(check.target),
            None => Ok(()),
        }
    }
}

/// National rule for `country`, if one is known.
pub fn rule(country: &str) -> Option<&'static NationalRule> {
    RULES
        .binary_search_by(|(code, _)| (*code).cmp(country))
        .ok()
        .map(|i| &RULES[i].1)
}

/// Country codes with a national rule, sorted.
pub fn countries() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|(code, _)| *code)
}

const fn weighted(modulus: u32, weights: &'static [u32], complement: Complement) -> Algorithm {
    Algorithm::Weighted {
        modulus,
        weights,
        direction: Direction::LeftToRight,
        complement,
    }
}

const fn checksum_of(input: Input, algorithm: Algorithm) -> Check {
    Check {
        target: F::NationalChecksum,
        input,
        algorithm,
        expected: Expected::NationalChecksum,
    }
}

const WEIGHTS_9731: &[u32] = &[9, 7, 3, 1];
const WEIGHTS_SPAIN: &[u32] = &[1, 2, 4, 8, 5, 10, 9, 7, 3, 6];

/// Bank, branch, and account number, complemented MOD 97-10.
const MOD97_BBAN: &[Check] = &[checksum_of(
    Input::Fields(&[F::BankCode, F::BranchCode, F::AccountNumber]),
    Algorithm::Mod97Complement,
)];

const CZECH: &[Check] = &[
    Check {
        target: F::AccountNumberPrefix,
        input: Input::Fields(&[F::AccountNumberPrefix]),
        algorithm: weighted(11, &[10, 5, 8, 4, 2, 1], Complement::None),
        expected: Expected::Value(0),
    },
    Check {
        target: F::AccountNumber,
        input: Input::Fields(&[F::AccountNumber]),
        algorithm: weighted(11, &[6, 3, 7, 9, 10, 5, 8, 4, 2, 1], Complement::None),
        expected: Expected::Value(0),
    },
];

const FRENCH: &[Check] = &[Check {
    target: F::NationalChecksum,
    input: Input::Fields(&[F::BankCode, F::BranchCode, F::AccountNumber, F::NationalChecksum]),
    algorithm: Algorithm::Mod97Transliterated,
    expected: Expected::Value(0),
}];

const ITALIAN: &[Check] = &[checksum_of(
    Input::Fields(&[F::BankCode, F::BranchCode, F::AccountNumber]),
    Algorithm::OddEvenLetter,
)];

/// Sorted by country code.
static RULES: &[(&str, NationalRule)] = &[
    (
        "AL",
        NationalRule::All(&[checksum_of(
            Input::Fields(&[F::BankCode, F::BranchCode]),
            weighted(10, WEIGHTS_9731, Complement::UnlessZero),
        )]),
    ),
    ("BA", NationalRule::All(MOD97_BBAN)),
    (
        "BE",
        NationalRule::All(&[checksum_of(
            Input::Fields(&[F::BankCode, F::AccountNumber]),
            Algorithm::Mod97Remainder,
        )]),
    ),
    ("CZ", NationalRule::All(CZECH)),
    (
        "EE",
        NationalRule::All(&[checksum_of(
            Input::Fields(&[F::BranchCode, F::AccountNumber]),
            Algorithm::Weighted {
                modulus: 10,
                weights: &[7, 3, 1],
                direction: Direction::RightToLeft,
                complement: Complement::UnlessZero,
            },
        )]),
    ),
    (
        "ES",
        NationalRule::All(&[
            // The bank and branch digits take weights 3..10; the two
            // leading weights apply to an implicit "00".
            Check {
                target: F::NationalChecksum,
                input: Input::Fields(&[F::BankCode, F::BranchCode]),
                algorithm: weighted(11, &[4, 8, 5, 10, 9, 7, 3, 6], Complement::FoldTen),
                expected: Expected::NationalChecksumDigit(0),
            },
            Check {
                target: F::NationalChecksum,
                input: Input::Fields(&[F::AccountNumber]),
                algorithm: weighted(11, WEIGHTS_SPAIN, Complement::FoldTen),
                expected: Expected::NationalChecksumDigit(1),
            },
        ]),
    ),
    (
        "FI",
        NationalRule::All(&[checksum_of(
            Input::Fields(&[F::BankCode, F::AccountNumber]),
            Algorithm::Luhn,
        )]),
    ),
    ("FR", NationalRule::All(FRENCH)),
    (
        "HR",
        NationalRule::All(&[
            Check {
                target: F::BankCode,
                input: Input::Slice(F::BankCode, 0, 6),
                algorithm: Algorithm::Mod11_10,
                expected: Expected::FieldChar(F::BankCode, 6),
            },
            Check {
                target: F::AccountNumber,
                input: Input::Slice(F::AccountNumber, 0, 9),
                algorithm: Algorithm::Mod11_10,
                expected: Expected::FieldChar(F::AccountNumber, 9),
            },
        ]),
    ),
    (
        "HU",
        NationalRule::All(&[
            Check {
                target: F::NationalChecksum,
                input: Input::Fields(&[F::BankCode, F::BranchCode]),
                algorithm: weighted(10, WEIGHTS_9731, Complement::UnlessZero),
                expected: Expected::NationalChecksumDigit(0),
            },
            Check {
                target: F::NationalChecksum,
                input: Input::Fields(&[F::AccountNumber]),
                algorithm: weighted(10, WEIGHTS_9731, Complement::UnlessZero),
                expected: Expected::NationalChecksumDigit(1),
            },
        ]),
    ),
    (
        "IS",
        NationalRule::All(&[Check {
            target: F::OwnerIdentificationNumber,
            input: Input::Slice(F::OwnerIdentificationNumber, 0, 8),
            algorithm: weighted(11, &[3, 2, 7, 6, 5, 4, 3, 2], Complement::UnlessZero),
            expected: Expected::FieldChar(F::OwnerIdentificationNumber, 8),
        }]),
    ),
    ("IT", NationalRule::All(ITALIAN)),
    ("MC", NationalRule::All(FRENCH)),
    ("ME", NationalRule::All(MOD97_BBAN)),
    ("MK", NationalRule::All(MOD97_BBAN)),
    (
        "NO",
        NationalRule::Guarded {
            guard: Guard::FieldStartsWith(F::AccountNumber, "00"),
            then: &[checksum_of(
                Input::Slice(F::AccountNumber, 2, 6),
                weighted(11, &[5, 4, 3, 2], Complement::UnlessZero),
            )],
            otherwise: &[checksum_of(
                Input::Fields(&[F::BankCode, F::AccountNumber]),
                weighted(11, &[5, 4, 3, 2, 7, 6, 5, 4, 3, 2], Complement::UnlessZero),
            )],
        },
    ),
    (
        "PL",
        NationalRule::All(&[checksum_of(
            Input::Fields(&[F::BankCode, F::BranchCode]),
            weighted(10, &[3, 9, 7, 1], Complement::UnlessZero),
        )]),
    ),
    ("PT", NationalRule::All(MOD97_BBAN)),
    ("RS", NationalRule::All(MOD97_BBAN)),
    ("SI", NationalRule::All(MOD97_BBAN)),
    ("SK", NationalRule::All(CZECH)),
    ("SM", NationalRule::All(ITALIAN)),
    ("TL", NationalRule::All(MOD97_BBAN)),
];
