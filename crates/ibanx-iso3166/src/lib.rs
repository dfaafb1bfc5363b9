//! # ibanx-iso3166: ISO 3166-1 Alpha-2 Country Registry
//!
//! Resolves two-letter country codes to their assignment status and
//! country name. This crate is the leaf of the workspace DAG: the IBAN
//! validator in `ibanx-core` consumes it only through the
//! [`CountryRegistry`] trait, so callers can substitute their own registry.
//!
//! ## Contents
//!
//! - [`Status`]: assignment status of a code, with [`Status::is_assigned()`]
//!   as the predicate the IBAN validator accepts.
//! - [`Country`]: resolved code, status and name.
//! - [`Iso3166`]: the built-in registry over a static, sorted table.
//! - [`parse_alpha2()`]: case-insensitive lookup in the built-in registry.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ibanx-*` crates.
//! - No `unsafe` code, no `.unwrap()` outside tests.
//! - The table is immutable `static` data, safe for concurrent reads.

pub mod country;
pub mod error;
pub mod registry;
mod table;

pub use country::{Country, Status};
pub use error::RegistryError;
pub use registry::{is_valid_alpha2, parse_alpha2, CountryRegistry, Iso3166};
