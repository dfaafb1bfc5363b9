//! # Iban: Validated Account Number
//!
//! The only way to obtain an [`Iban`] is through the
//! [`Validator`](crate::Validator), so every value upholds the invariants
//! of a valid IBAN: assigned country, matching generic checksum, matching
//! structure, and matching national check digits.
//!
//! ## Text Forms
//!
//! - **Compact**: `GB29NWBK60161331926819`, used for serialization.
//! - **Pretty**: `GB29 NWBK 6016 1331 9268 19`, used by `Display`.
//!
//! Parsing either form yields an equal value.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IbanError;
use crate::pattern::{self, BbanPattern, FieldKind, Fields};
use crate::Country;

/// A validated International Bank Account Number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iban {
    country: Country,
    checksum: u8,
    bban: String,
    fields: Fields,
}

impl Iban {
    pub(crate) fn new(country: Country, checksum: u8, bban: String, fields: Fields) -> Self {
        Self {
            country,
            checksum,
            bban,
            fields,
        }
    }

    /// The resolved country.
    pub fn country(&self) -> Country {
        self.country
    }

    /// Uppercase two-letter country code.
    pub fn country_code(&self) -> &'static str {
        self.country.code
    }

    /// The generic check digits as a number in `0..=99`.
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// The national part after country code and check digits.
    pub fn bban(&self) -> &str {
        &self.bban
    }

    /// Country code, two-digit checksum and BBAN without separators.
    pub fn compact(&self) -> String {
        format!("{}{:02}{}", self.country.code, self.checksum, self.bban)
    }

    /// The compact form in groups of four separated by single spaces.
    pub fn pretty(&self) -> String {
        let compact = self.compact();
        let mut out = String::with_capacity(compact.len() + compact.len() / 4);
        for (i, c) in compact.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }

    /// Structural pattern of the country, if one is documented.
    pub fn pattern(&self) -> Option<&'static BbanPattern> {
        pattern::pattern(self.country.code)
    }

    /// All decomposed fields. Empty when the country has no pattern.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Value of one decomposed field.
    pub fn field(&self, kind: FieldKind) -> Option<&str> {
        self.fields.get(kind)
    }

    /// BBAN segments with their field kinds, in BBAN order.
    ///
    /// Unlike [`Iban::fields()`], a field split across several segments
    /// appears once per segment.
    pub fn segments(&self) -> impl Iterator<Item = (FieldKind, &str)> + '_ {
        self.pattern()
            .into_iter()
            .flat_map(move |p| p.segments(&self.bban))
    }

    /// Bank identifier.
    pub fn bank_code(&self) -> Option<&str> {
        self.field(FieldKind::BankCode)
    }

    /// Branch identifier.
    pub fn branch_code(&self) -> Option<&str> {
        self.field(FieldKind::BranchCode)
    }

    /// Account number.
    pub fn account_number(&self) -> Option<&str> {
        self.field(FieldKind::AccountNumber)
    }

    /// Account type, where the country encodes one.
    pub fn account_type(&self) -> Option<&str> {
        self.field(FieldKind::AccountType)
    }

    /// National check digits.
    pub fn national_checksum(&self) -> Option<&str> {
        self.field(FieldKind::NationalChecksum)
    }

    /// ISO 4217 currency code embedded in the BBAN.
    pub fn currency_code(&self) -> Option<&str> {
        self.field(FieldKind::CurrencyCode)
    }

    /// Owner account number.
    pub fn owner_account_number(&self) -> Option<&str> {
        self.field(FieldKind::OwnerAccountNumber)
    }

    /// Identification number of the account owner.
    pub fn owner_identification_number(&self) -> Option<&str> {
        self.field(FieldKind::OwnerIdentificationNumber)
    }

    /// Balance account number.
    pub fn balance_account_number(&self) -> Option<&str> {
        self.field(FieldKind::BalanceAccountNumber)
    }

    /// Prefix preceding the account number.
    pub fn account_number_prefix(&self) -> Option<&str> {
        self.field(FieldKind::AccountNumberPrefix)
    }
}

impl std::fmt::Display for Iban {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pretty())
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    /// Validate `s` with the built-in country registry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::validator::parse(s)
    }
}

impl TryFrom<&str> for Iban {
    type Error = IbanError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Iban {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.compact())
    }
}

impl<'de> Deserialize<'de> for Iban {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
