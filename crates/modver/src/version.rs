//! The [`Version`] value type.
//!
//! Versions are immutable once built: [`Version::parse`] and
//! [`Version::bump`] return new values, and every public constructor
//! validates the canonical rendering before handing a value out.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::error::{VersionError, VersionResult};
use crate::field::Field;
use crate::grammar::is_valid;
use crate::options::{VersionOption, pre_release};

/// A semantic version as defined by module systems.
///
/// Renders as `v<major>.<minor>.<patch>[-<pre-release>]`. The default value
/// is `v0.0.0`.
///
/// Ordering compares major, minor and patch numerically, then the
/// pre-release as a plain string. This is not full semver precedence: a
/// release sorts before its pre-releases, and `alpha.10` sorts before
/// `alpha.9`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    pub(crate) pre_release: String,
}

impl Version {
    /// Build a release version with no pre-release.
    ///
    /// Every `u64` is representable, so this only fails if the rendering
    /// does not match the grammar.
    pub fn new(major: u64, minor: u64, patch: u64) -> VersionResult<Self> {
        Self::with_options(major, minor, patch, &[])
    }

    /// Build a version, applying `opts` in order before validating.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::InvalidVersion`] if the options leave the
    /// candidate with a rendering outside the grammar (for example a
    /// pre-release containing `_`).
    pub fn with_options(
        major: u64,
        minor: u64,
        patch: u64,
        opts: &[VersionOption],
    ) -> VersionResult<Self> {
        let mut candidate = Self {
            major,
            minor,
            patch,
            pre_release: String::new(),
        };
        for opt in opts {
            opt.apply(&mut candidate);
        }

        if !is_valid(&candidate.to_string()) {
            return Err(VersionError::InvalidVersion);
        }

        trace!(version = %candidate, "constructed version");
        Ok(candidate)
    }

    /// Parse a version string such as `v0.3.1`, `v1.0.0-alpha.1` or `v2.4.0`.
    ///
    /// # Errors
    ///
    /// - [`VersionError::InvalidVersion`] if `s` does not match the grammar.
    /// - [`VersionError::ParseNumber`] if a component does not fit in a `u64`.
    /// - [`VersionError::Construct`] if the parsed parts fail re-validation.
    #[instrument(level = "trace")]
    pub fn parse(s: &str) -> VersionResult<Self> {
        if !is_valid(s) {
            return Err(VersionError::InvalidVersion);
        }

        let body = s.strip_prefix('v').ok_or(VersionError::InvalidVersion)?;
        let (numbers, pre) = body.split_once('-').unwrap_or((body, ""));

        let mut parts = numbers.splitn(3, '.');
        let major = parse_number(parts.next(), Field::Major)?;
        let minor = parse_number(parts.next(), Field::Minor)?;
        let patch = parse_number(parts.next(), Field::Patch)?;

        Self::with_options(major, minor, patch, &[pre_release(pre)])
            .map_err(VersionError::construct)
    }

    /// Next version for `field`, with no pre-release.
    pub fn bump(&self, field: Field) -> VersionResult<Self> {
        self.bump_with(field, &[])
    }

    /// Next version for `field`, applying `opts` to the result.
    ///
    /// Lower-order components reset to zero. The pre-release is dropped
    /// unless `opts` sets one.
    ///
    /// # Errors
    ///
    /// - [`VersionError::Overflow`] if the component is already `u64::MAX`.
    /// - [`VersionError::Construct`] if `opts` produce an invalid version.
    #[instrument(level = "trace", skip(self, opts), fields(version = %self))]
    pub fn bump_with(&self, field: Field, opts: &[VersionOption]) -> VersionResult<Self> {
        let next = match field {
            Field::Major => Self::with_options(increment(self.major, field)?, 0, 0, opts),
            Field::Minor => Self::with_options(self.major, increment(self.minor, field)?, 0, opts),
            Field::Patch => {
                Self::with_options(self.major, self.minor, increment(self.patch, field)?, opts)
            }
        }
        .map_err(VersionError::construct)?;

        trace!(%field, %next, "bumped version");
        Ok(next)
    }

    /// Bump by numeric field tag (1 = patch, 2 = minor, 3 = major).
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::InvalidField`] for any other tag, otherwise
    /// whatever [`bump_with`](Self::bump_with) returns.
    pub fn bump_tag(&self, tag: u8, opts: &[VersionOption]) -> VersionResult<Self> {
        let field = Field::try_from(tag)?;
        self.bump_with(field, opts)
    }

    /// Compare two versions, returning -1, 0 or 1.
    ///
    /// Same order as [`Ord`].
    pub fn compare(&self, other: &Self) -> i8 {
        self.cmp(other) as i8
    }

    /// Whether the canonical rendering parses back to an equal version.
    pub fn is_valid(&self) -> bool {
        Self::parse(&self.to_string()).is_ok_and(|reparsed| reparsed.compare(self) == 0)
    }

    /// Major version number.
    pub const fn major(&self) -> u64 {
        self.major
    }

    /// Minor version number.
    pub const fn minor(&self) -> u64 {
        self.minor
    }

    /// Patch version number.
    pub const fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release, empty if there is none.
    pub fn pre_release(&self) -> &str {
        &self.pre_release
    }
}

fn parse_number(part: Option<&str>, field: Field) -> VersionResult<u64> {
    let part = part.ok_or(VersionError::InvalidVersion)?;
    part.parse().map_err(|source| {
        debug!(%field, input = part, "version number out of range");
        VersionError::ParseNumber { field, source }
    })
}

fn increment(n: u64, field: Field) -> VersionResult<u64> {
    n.checked_add(1).ok_or(VersionError::Overflow { field })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            major,
            minor,
            patch,
            pre_release,
        } = self;
        write!(f, "v{major}.{minor}.{patch}")?;
        if !pre_release.is_empty() {
            write!(f, "-{pre_release}")?;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| self.pre_release.cmp(&other.pre_release))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}
