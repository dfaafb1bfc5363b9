//! # ibanx-core: IBAN Validation and Decomposition
//!
//! Validates International Bank Account Numbers against three independent
//! layers of correctness and decomposes the national part (BBAN) into its
//! named fields.
//!
//! ## Pipeline
//!
//! 1. **Normalize**: strip whitespace, uppercase.
//! 2. **Length**: 5 to 34 characters.
//! 3. **Country**: resolved via a [`CountryRegistry`], must be assigned.
//! 4. **Checksum syntax**: two ASCII digits.
//! 5. **Generic checksum**: BBAN of letters and digits only, then ISO
//!    13616 mod-97 remainder of 1.
//! 6. **Structure**: BBAN matched against the country's [`BbanPattern`].
//! 7. **National checksum**: country-specific [`NationalRule`], if any.
//!
//! Each stage short-circuits with its own [`IbanError`] variant. The
//! pipeline is a pure function of the input and the static tables.
//!
//! ```
//! let iban = ibanx_core::parse("de02 1203 0000 0000 2020 51").unwrap();
//! assert_eq!(iban.to_string(), "DE02 1203 0000 0000 2020 51");
//! assert_eq!(iban.bank_code(), Some("12030000"));
//! assert_eq!(iban.account_number(), Some("0000202051"));
//! ```
//!
//! ## Crate Policy
//!
//! - No logging and no recovery; errors surface to the caller.
//! - No `unsafe` code, no `.unwrap()` outside tests.
//! - Country tables are `static` data. Adding a country is a data change,
//!   not a code change.

pub mod charset;
pub mod checksum;
pub mod error;
pub mod iban;
pub mod national;
pub mod pattern;
pub mod validator;

pub use charset::Charset;
pub use error::{ErrorKind, IbanError, Mismatch};
pub use iban::Iban;
pub use national::NationalRule;
pub use pattern::{BbanPattern, FieldKind, FieldSpec, Fields};
pub use validator::{is_valid, parse, Validator};

pub use ibanx_iso3166::{Country, CountryRegistry, Iso3166, Status};

/// Maximum length of an IBAN in characters.
pub const MAX_LEN: usize = 34;

/// Minimum length of an IBAN in characters: country code, check digits,
/// and at least one BBAN character.
pub const MIN_LEN: usize = 5;
