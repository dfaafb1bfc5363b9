//! # Checksum Algorithm Library
//!
//! Pure, country-agnostic check-digit primitives. Every function is total:
//! none panics, whatever the input. Apart from [`generic_mod97()`] and
//! [`generic_check_digits()`], which reject foreign characters, the
//! functions assume ASCII-digit input and produce meaningless (but
//! harmless) values otherwise. Callers validate the charset first.
//!
//! The primitives return raw remainders. Which convention turns a
//! remainder into a check value (complement, zero mapping, folding) is a
//! per-country decision expressed with [`Complement`] in
//! [`crate::national`].

/// Direction in which weights are applied to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// First weight applies to the leftmost digit.
    LeftToRight,
    /// First weight applies to the rightmost digit.
    RightToLeft,
}

/// Convention turning a remainder `r` modulo `m` into a check value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complement {
    /// The remainder itself.
    None,
    /// `m - r`, with `r = 0` staying 0. Modulo 11 this yields 10 for
    /// `r = 1`, which no single digit matches.
    UnlessZero,
    /// `m - r`, with `r = 0` staying 0 and 10 folded to 1.
    FoldTen,
}

impl Complement {
    /// Apply the convention to `remainder` modulo `modulus`.
    pub fn apply(&self, remainder: u32, modulus: u32) -> u32 {
        match self {
            Self::None => remainder,
            Self::UnlessZero => {
                if remainder == 0 {
                    0
                } else {
                    modulus - remainder
                }
            }
            Self::FoldTen => match Self::UnlessZero.apply(remainder, modulus) {
                10 => 1,
                v => v,
            },
        }
    }
}

#[inline]
fn digit(b: u8) -> u32 {
    u32::from(b.wrapping_sub(b'0'))
}

/// Mod-97 remainder of an alphanumeric sequence with letters expanded to
/// two digits (`A = 10` … `Z = 35`). `None` on any other character.
fn expanded_mod97(bytes: impl Iterator<Item = u8>) -> Option<u32> {
    let mut remainder = 0u32;
    for b in bytes {
        remainder = match b {
            b'0'..=b'9' => (remainder * 10 + digit(b)) % 97,
            b'A'..=b'Z' => (remainder * 100 + u32::from(b - b'A') + 10) % 97,
            _ => return None,
        };
    }
    Some(remainder)
}

/// ISO 13616 verification of a complete, normalized IBAN.
///
/// Moves the first four characters to the end, expands letters to two
/// digits, and checks that the resulting number is congruent to 1 modulo
/// 97. Returns false for strings shorter than four bytes and for any
/// character other than `0`–`9` and `A`–`Z`.
pub fn generic_mod97(iban: &str) -> bool {
    let bytes = iban.as_bytes();
    if bytes.len() < 4 {
        return false;
    }
    let rotated = bytes[4..].iter().chain(&bytes[..4]).copied();
    expanded_mod97(rotated) == Some(1)
}

/// Check digits that make `country + digits + bban` pass
/// [`generic_mod97()`].
///
/// Returns `None` if `country` or `bban` contains characters other than
/// `0`–`9` and `A`–`Z`. The result is always in `2..=98`.
pub fn generic_check_digits(country: &str, bban: &str) -> Option<u8> {
    let bytes = bban
        .bytes()
        .chain(country.bytes())
        .chain(*b"00");
    let remainder = expanded_mod97(bytes)?;
    u8::try_from(98 - remainder).ok()
}

/// Raw ISO 7064 MOD 97-10 remainder of a digit string.
///
/// Left to right, `r = (r * 10 + digit) % 97`. For the complement form
/// used by most national rules, append `"00"` to the input and take
/// `98 - r`.
pub fn iso7064_mod97_10(s: &str) -> u32 {
    s.bytes().fold(0, |r, b| (r * 10 + digit(b)) % 97)
}

/// Raw ISO 7064 MOD 11-10 (hybrid system) accumulator of a digit string.
///
/// The accumulator starts at 10; per digit, `sum = (digit + acc) % 10`
/// with 0 treated as 10, then `acc = (sum * 2) % 11`.
pub fn iso7064_mod11_10(s: &str) -> u32 {
    s.bytes().fold(10, |acc, b| {
        let sum = match (digit(b) + acc) % 10 {
            0 => 10,
            v => v,
        };
        (sum * 2) % 11
    })
}

/// ISO 7064 MOD 11-10 check value: `11 - acc`, with `acc = 1` mapped
/// to 0.
pub fn iso7064_mod11_10_check(s: &str) -> u32 {
    match iso7064_mod11_10(s) {
        1 => 0,
        acc => 11 - acc,
    }
}

/// Weighted digit sum modulo `modulus`.
///
/// Weights are drawn cyclically from `weights`, starting at the end
/// selected by `direction`. Returns 0 for an empty weight vector or a zero
/// modulus.
pub fn weighted_sum(s: &str, modulus: u32, weights: &[u32], direction: Direction) -> u32 {
    if weights.is_empty() || modulus == 0 {
        return 0;
    }
    let term = |(i, b): (usize, u8)| digit(b) * weights[i % weights.len()];
    let sum: u32 = match direction {
        Direction::LeftToRight => s.bytes().enumerate().map(term).sum(),
        Direction::RightToLeft => s.bytes().rev().enumerate().map(term).sum(),
    };
    sum % modulus
}

/// Luhn check digit of a digit string (payload without the check digit).
///
/// Doubles every second digit starting from the rightmost, subtracts 9
/// from doubles above 9, and returns `(10 - sum % 10) % 10`.
pub fn luhn(s: &str) -> u32 {
    let sum: u32 = s
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = digit(b);
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    (10 - sum % 10) % 10
}

/// French RIB letter transliteration: `A`–`I` → 1–9, `J`–`R` → 1–9,
/// `S`–`Z` → 2–9. Other characters pass through.
pub fn transliterate_french(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'A'..='I' => char::from(b'1' + (c as u8 - b'A')),
            'J'..='R' => char::from(b'1' + (c as u8 - b'J')),
            'S'..='Z' => char::from(b'2' + (c as u8 - b'S')),
            other => other,
        })
        .collect()
}
