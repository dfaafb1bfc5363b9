//! # Registry Errors

use thiserror::Error;

/// Error returned by a [`CountryRegistry`](crate::CountryRegistry) lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The code is not a known ISO 3166-1 alpha-2 code.
    #[error("invalid alpha-2 code: {code:?}")]
    NotFound {
        /// The code as passed to the registry.
        code: String,
    },
}
