//! Semantic versions as used by module systems.
//!
//! A version looks like `v<major>.<minor>.<patch>[-<pre-release>]`: a literal
//! `v` prefix, three numeric components without leading zeros, and an
//! optional dot-separated alphanumeric pre-release. Build metadata is not
//! supported.
//!
//! # Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`field`] - Which component a bump increments
//! - [`grammar`] - The version string grammar
//! - [`options`] - Optional attributes applied during construction
//! - [`version`] - The [`Version`] value type
//!
//! # Quick Start
//!
//! ```
//! use modver::{Field, Version, pre_release};
//!
//! let current: Version = "v1.2.3".parse()?;
//! let next = current.bump_with(Field::Minor, &[pre_release("rc.1")])?;
//!
//! assert_eq!(next.to_string(), "v1.3.0-rc.1");
//! assert!(next > current);
//! assert!(modver::is_valid("v1.3.0-rc.1"));
//! # Ok::<(), modver::VersionError>(())
//! ```
#![deny(unsafe_code)]

pub mod error;

pub mod field;

pub mod grammar;

pub mod options;

pub mod version;

pub use error::{VersionError, VersionResult};

pub use field::Field;

pub use grammar::{VERSION_PATTERN, is_valid};

pub use options::{VersionOption, pre_release};

pub use version::Version;
