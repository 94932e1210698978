//! Error types for modver

use std::num::ParseIntError;

use thiserror::Error;

use crate::field::Field;

/// Errors from constructing, parsing, or bumping a version.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The string (or the rendering of a candidate) does not match the
    /// version grammar.
    #[error("invalid version")]
    InvalidVersion,

    /// A field tag outside patch, minor, and major.
    #[error("invalid field")]
    InvalidField,

    /// A numeric component matched the grammar but did not fit in a `u64`.
    #[error("parsing {field} number: {source}")]
    ParseNumber {
        /// Component that failed to parse.
        field: Field,
        /// Underlying integer conversion failure.
        #[source]
        source: ParseIntError,
    },

    /// Incrementing the component would exceed `u64::MAX`.
    #[error("{field} number overflows")]
    Overflow {
        /// Component being incremented.
        field: Field,
    },

    /// The constructor rejected the candidate built by a parse or bump.
    #[error("constructing version: {0}")]
    Construct(#[source] Box<VersionError>),
}

impl VersionError {
    /// Innermost error, looking through [`Construct`](Self::Construct).
    pub fn root(&self) -> &Self {
        match self {
            Self::Construct(inner) => inner.root(),
            other => other,
        }
    }

    /// Whether this is, or wraps, [`InvalidVersion`](Self::InvalidVersion).
    pub fn is_invalid_version(&self) -> bool {
        matches!(self.root(), Self::InvalidVersion)
    }

    /// Whether this is, or wraps, [`InvalidField`](Self::InvalidField).
    pub fn is_invalid_field(&self) -> bool {
        matches!(self.root(), Self::InvalidField)
    }

    pub(crate) fn construct(err: Self) -> Self {
        Self::Construct(Box::new(err))
    }
}

/// Result type alias using [`VersionError`].
pub type VersionResult<T> = Result<T, VersionError>;
