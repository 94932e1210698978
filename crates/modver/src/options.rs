//! Optional attributes applied while constructing a version.
//!
//! Options are applied in the order given, before the candidate is
//! validated. When several options set the same attribute, the last one
//! wins.

use crate::version::Version;

/// A modification applied to a candidate version during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionOption {
    /// Set the pre-release; an empty string clears it.
    PreRelease(String),
}

impl VersionOption {
    /// Apply this option to a candidate that has not been validated yet.
    pub(crate) fn apply(&self, candidate: &mut Version) {
        match self {
            Self::PreRelease(s) => candidate.pre_release.clone_from(s),
        }
    }
}

/// Option that sets the pre-release.
pub fn pre_release(s: impl Into<String>) -> VersionOption {
    VersionOption::PreRelease(s.into())
}
