//! A library for semantic version numbers, implementing
//! [Semantic Versioning 2.0.0](https://semver.org/spec/v2.0.0.html).
//!
//! ```rust
//! use std::str::FromStr;
//! use semvername_semver::Version;
//!
//! let version = Version::from_str("1.3.0").unwrap();
//! let base = Version::from_str("1.2.0").unwrap();
//! assert!(version > base);
//! assert!(version.is_compatibly_greater_than(&base));
//! ```
//!
//! Points worth knowing:
//!
//! * `major.minor.patch` are mandatory and must not have leading zeros (`01.2.3` is rejected)
//! * prerelease identifiers are dot-separated; numeric ones compare numerically and always below
//!   alphanumeric ones, and numeric ones must not have leading zeros either
//! * build metadata (`+...`) is kept and rendered, but never affects precedence
//! * a release sorts above all of its prereleases: `1.0.0-rc.1 < 1.0.0`

pub use {
    identifier::{Identifier, IdentifierError},
    prerelease::{BuildMetadata, Prerelease},
    version::{Field, InvalidVersionError, Version, VersionParseError, VersionParseErrorKind},
};

mod identifier;
mod prerelease;
mod version;
