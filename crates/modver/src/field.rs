//! Version components that a bump can increment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;

/// Component of a version to increment.
///
/// The discriminants are tags, not positions: they are what
/// [`Field::try_from`] accepts for numeric tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Field {
    /// Patch release (x.y.Z).
    Patch = 1,
    /// Minor release (x.Y.0).
    Minor = 2,
    /// Major release (X.0.0).
    Major = 3,
}

impl Field {
    /// All fields, least significant first.
    pub const ALL: &[Self] = &[Self::Patch, Self::Minor, Self::Major];

    /// Numeric tag of this field.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Lowercase name, as used by `Display` and serde.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Field {
    type Error = VersionError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.tag() == tag)
            .ok_or(VersionError::InvalidField)
    }
}

impl FromStr for Field {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or(VersionError::InvalidField)
    }
}
