//! # Character Classes
//!
//! Character-class constraints of BBAN fields. Input is already uppercased
//! by the validator, so alphabetic classes only accept `A`–`Z`.

use serde::{Deserialize, Serialize};

/// Character class a BBAN field must consist of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Charset {
    /// ASCII digits `0`–`9`.
    Numeric,
    /// Uppercase ASCII letters `A`–`Z`.
    Alphabetic,
    /// Uppercase ASCII letters and digits.
    Alphanumeric,
}

impl Charset {
    /// Returns true if `b` belongs to this class.
    pub fn contains(&self, b: u8) -> bool {
        match self {
            Self::Numeric => b.is_ascii_digit(),
            Self::Alphabetic => b.is_ascii_uppercase(),
            Self::Alphanumeric => b.is_ascii_digit() || b.is_ascii_uppercase(),
        }
    }

    /// Position of the first byte of `s` outside this class.
    pub fn first_mismatch(&self, s: &str) -> Option<usize> {
        s.bytes().position(|b| !self.contains(b))
    }

    /// Returns true if every byte of `s` belongs to this class.
    pub fn matches(&self, s: &str) -> bool {
        self.first_mismatch(s).is_none()
    }

    /// Registry notation: `n`, `a`, or `c`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "n",
            Self::Alphabetic => "a",
            Self::Alphanumeric => "c",
        }
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Numeric => "digits",
            Self::Alphabetic => "letters",
            Self::Alphanumeric => "letters and digits",
        })
    }
}
