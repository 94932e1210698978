//! The version string grammar.
//!
//! Based on Semantic Versioning, with the module-system deviations: a
//! mandatory `v` prefix and no build metadata. See
//! <https://go.dev/doc/modules/version-numbers> and <https://semver.org/>.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Regular expression matching a complete version string.
///
/// Numeric components are `0` or have no leading zero. The pre-release is
/// one or more dot-separated runs of ASCII alphanumerics.
pub const VERSION_PATTERN: &str =
    r"^v(0|[1-9][0-9]*)(\.(0|[1-9][0-9]*)){2}(-([a-zA-Z0-9]+)(\.[a-zA-Z0-9]+)*)?$";

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN).expect("version pattern compiles"));

/// Whether `s` is a valid representation of a version.
pub fn is_valid(s: &str) -> bool {
    let valid = VERSION_REGEX.is_match(s);
    if !valid {
        debug!(input = s, "string does not match version grammar");
    }
    valid
}
