//! # Country Registry
//!
//! The [`CountryRegistry`] trait is the seam between the IBAN validator and
//! country metadata. [`Iso3166`] implements it over the built-in table.

use crate::country::Country;
use crate::error::RegistryError;
use crate::table::COUNTRIES;

/// Resolves two-letter codes to country metadata.
///
/// Implementations must be `Send + Sync`-friendly read-only lookups; the
/// validator holds one for its whole lifetime and never mutates it.
pub trait CountryRegistry {
    /// Resolve `code` to its registry entry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the registry has no entry
    /// for `code`.
    fn resolve(&self, code: &str) -> Result<Country, RegistryError>;
}

impl<R: CountryRegistry + ?Sized> CountryRegistry for &R {
    fn resolve(&self, code: &str) -> Result<Country, RegistryError> {
        (**self).resolve(code)
    }
}

/// The built-in ISO 3166-1 alpha-2 registry.
///
/// Lookup is case-insensitive. The table holds every officially assigned
/// code, `XK`, the reserved codes, and formerly assigned codes that were
/// not reused. Generic user-assigned codes such as `AA` or `ZZ` do not
/// resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iso3166;

impl Iso3166 {
    /// All registry entries, sorted by code.
    pub fn countries() -> impl Iterator<Item = &'static Country> {
        COUNTRIES.iter()
    }
}

impl CountryRegistry for Iso3166 {
    fn resolve(&self, code: &str) -> Result<Country, RegistryError> {
        let not_found = || RegistryError::NotFound {
            code: code.to_string(),
        };

        let bytes = code.as_bytes();
        if bytes.len() != 2 {
            return Err(not_found());
        }
        let key = [bytes[0].to_ascii_uppercase(), bytes[1].to_ascii_uppercase()];

        COUNTRIES
            .binary_search_by(|c| c.code.as_bytes().cmp(&key[..]))
            .map(|i| COUNTRIES[i])
            .map_err(|_| not_found())
    }
}

/// Parse an ISO 3166-1 alpha-2 code using the built-in registry.
///
/// The code is compared case-insensitively. A successful parse means the
/// code is known; check [`Country::status`] to see whether it is in use.
///
/// # Errors
///
/// Returns [`RegistryError::NotFound`] for unknown codes.
pub fn parse_alpha2(code: &str) -> Result<Country, RegistryError> {
    Iso3166.resolve(code)
}

/// Returns true if `code` is known to the built-in registry.
pub fn is_valid_alpha2(code: &str) -> bool {
    parse_alpha2(code).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::Status;

    #[test]
    fn test_table_sorted_and_unique() {
        for pair in COUNTRIES.windows(2) {
            assert!(
                pair[0].code < pair[1].code,
                "table out of order at {} / {}",
                pair[0].code,
                pair[1].code
            );
        }
    }

    #[test]
    fn test_table_codes_are_two_uppercase_letters() {
        for c in Iso3166::countries() {
            assert_eq!(c.code.len(), 2);
            assert!(c.code.bytes().all(|b| b.is_ascii_uppercase()), "{}", c.code);
            assert!(!c.name.is_empty());
        }
    }

    #[test]
    fn test_officially_assigned_count() {
        let official = Iso3166::countries()
            .filter(|c| c.status == Status::OfficiallyAssigned)
            .count();
        assert_eq!(official, 249);
    }

    #[test]
    fn test_resolve_official() {
        let de = parse_alpha2("DE").unwrap();
        assert_eq!(de.code, "DE");
        assert_eq!(de.name, "Germany");
        assert_eq!(de.status, Status::OfficiallyAssigned);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(parse_alpha2("gb").unwrap().code, "GB");
        assert_eq!(parse_alpha2("Ch").unwrap().code, "CH");
    }

    #[test]
    fn test_kosovo_is_user_assigned() {
        let xk = parse_alpha2("XK").unwrap();
        assert_eq!(xk.status, Status::UserAssigned);
        assert!(xk.is_assigned());
    }

    #[test]
    fn test_reserved_and_former_codes_resolve_unassigned() {
        let uk = parse_alpha2("UK").unwrap();
        assert_eq!(uk.status, Status::ExceptionallyReserved);
        assert!(!uk.is_assigned());

        let yu = parse_alpha2("YU").unwrap();
        assert_eq!(yu.status, Status::TransitionallyReserved);

        let dd = parse_alpha2("DD").unwrap();
        assert_eq!(dd.status, Status::FormerlyAssigned);
    }

    #[test]
    fn test_unknown_codes_not_found() {
        for code in ["ZZ", "AA", "QX", "", "D", "DEU", "1A"] {
            assert_eq!(
                parse_alpha2(code),
                Err(RegistryError::NotFound {
                    code: code.to_string()
                }),
                "{code:?} should not resolve"
            );
            assert!(!is_valid_alpha2(code));
        }
    }

    #[test]
    fn test_non_ascii_does_not_panic() {
        assert!(parse_alpha2("Ä").is_err());
        assert!(parse_alpha2("ÄÖ").is_err());
    }

    #[test]
    fn test_registry_by_reference() {
        fn lookup<R: CountryRegistry>(r: R) -> Country {
            r.resolve("FR").unwrap()
        }
        let registry = Iso3166;
        assert_eq!(lookup(&registry).name, "France");
    }
}
