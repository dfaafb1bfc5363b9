//! # Country Codes and Assignment Status
//!
//! ISO 3166/MA distinguishes officially assigned codes from user-assigned,
//! reserved, and formerly assigned ones. Only the first two denote a
//! country that may issue identifiers such as IBANs.

use serde::{Deserialize, Serialize};

/// Assignment status of an ISO 3166-1 alpha-2 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Assigned by ISO 3166/MA to a country or territory.
    OfficiallyAssigned,
    /// Free for user assignment; `XK` (Kosovo) is the one in general use.
    UserAssigned,
    /// Reserved on request of a national body or organization (`EU`, `UK`).
    ExceptionallyReserved,
    /// Deleted code kept reserved during a transition period (`YU`, `AN`).
    TransitionallyReserved,
    /// Used in other coding systems, e.g. vehicle registration (`RA`, `WG`).
    IndeterminatelyReserved,
    /// Deleted code that has not been reused (`DD`, `ZR`).
    FormerlyAssigned,
    /// Not assigned. The built-in table has no such entries; external
    /// registries may report it.
    Unassigned,
}

impl Status {
    /// Returns true for officially and user-assigned codes.
    pub fn is_assigned(&self) -> bool {
        matches!(self, Self::OfficiallyAssigned | Self::UserAssigned)
    }

    /// Returns true for any of the three reserved kinds.
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            Self::ExceptionallyReserved
                | Self::TransitionallyReserved
                | Self::IndeterminatelyReserved
        )
    }

    /// Human-readable status name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OfficiallyAssigned => "officially assigned",
            Self::UserAssigned => "user assigned",
            Self::ExceptionallyReserved => "exceptionally reserved",
            Self::TransitionallyReserved => "transitionally reserved",
            Self::IndeterminatelyReserved => "indeterminately reserved",
            Self::FormerlyAssigned => "formerly assigned",
            Self::Unassigned => "unassigned",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved ISO 3166-1 alpha-2 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
    /// Uppercase two-letter code.
    pub code: &'static str,
    /// Assignment status of the code.
    pub status: Status,
    /// English short name of the country or, for reserved codes, of what
    /// the code is reserved for.
    pub name: &'static str,
}

impl Country {
    /// Construct a registry entry.
    pub const fn new(code: &'static str, status: Status, name: &'static str) -> Self {
        Self { code, status, name }
    }

    /// Shorthand for `self.status.is_assigned()`.
    pub fn is_assigned(&self) -> bool {
        self.status.is_assigned()
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}
