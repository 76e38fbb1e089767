use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use memchr::{memchr, memrchr};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;
use tracing::trace;

use semvername_name::{InvalidNameError, ProductName};
use semvername_semver::{Version, VersionParseError};

/// A semantic version prefixed with a product name, such as `hello-1.2.3` or
/// `apple_jack-0.1.2-pre1`.
///
/// Named versions order by name first and then by version, so `apple-9.0.0 < banana-1.0.0`.
/// As with [`Version`], there are two orderings:
///
/// * [`NamedVersion::cmp_precedence`] compares names, then version precedence, ignoring build
///   metadata: `hello-1.0.0+a` and `hello-1.0.0+b` have equal precedence.
/// * The [`Ord`] implementation compares names, then versions by [`Version`]'s `Ord`, so build
///   metadata breaks ties and the order agrees with [`Eq`].
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamedVersion {
    name: ProductName,
    version: Version,
}

impl NamedVersion {
    pub fn new(name: ProductName, version: Version) -> Self {
        Self { name, version }
    }

    /// Create a named version from an unvalidated name.
    pub fn from_parts(name: &str, version: Version) -> Result<Self, InvalidNameError> {
        Ok(Self::new(ProductName::from_str(name)?, version))
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    #[must_use]
    pub fn with_name(self, name: ProductName) -> Self {
        Self { name, ..self }
    }

    /// Like [`NamedVersion::with_name`], but validates the name first.
    pub fn try_with_name(self, name: &str) -> Result<Self, InvalidNameError> {
        Ok(self.with_name(ProductName::from_str(name)?))
    }

    #[must_use]
    pub fn with_version(self, version: Version) -> Self {
        Self { version, ..self }
    }

    /// Compare by name, then by version precedence, ignoring build metadata.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.version.cmp_precedence(&other.version))
    }

    /// Whether this is a safe upgrade from `base`: the names are equal and the version is
    /// compatibly greater (see [`Version::is_compatibly_greater_than`]).
    pub fn is_compatibly_greater_than(&self, base: &Self) -> bool {
        self.name == base.name && self.version.is_compatibly_greater_than(&base.version)
    }

    /// Shorthand for [`NamedVersion::is_compatibly_greater_than`].
    pub fn cgt(&self, base: &Self) -> bool {
        self.is_compatibly_greater_than(base)
    }
}

impl FromStr for NamedVersion {
    type Err = NamedVersionParseError;

    /// Parses `<name>-<major>.<minor>.<patch>(-<prerelease>)?(+<build>)?`.
    ///
    /// Both the name and the prerelease may contain `-`, but the name can't contain `.`, so the
    /// version starts after the last `-` that precedes the first `.`. For example,
    /// `my-tool-2-1.0.0-rc-1` is the name `my-tool-2` and the version `1.0.0-rc-1`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let err = |kind| NamedVersionParseError {
            input: input.to_string(),
            kind,
        };

        if input.is_empty() {
            return Err(err(NamedVersionParseErrorKind::Empty));
        }

        let Some(dot) = memchr(b'.', input.as_bytes()) else {
            return Err(err(NamedVersionParseErrorKind::MissingSeparator));
        };
        let Some(dash) = memrchr(b'-', &input.as_bytes()[..dot]) else {
            return Err(err(NamedVersionParseErrorKind::MissingSeparator));
        };
        let (name, version) = (&input[..dash], &input[dash + 1..]);
        trace!("Split `{input}` into name `{name}` and version `{version}`");

        let name = ProductName::from_str(name)
            .map_err(|error| err(NamedVersionParseErrorKind::Name(error)))?;
        let version = Version::from_str(version)
            .map_err(|error| err(NamedVersionParseErrorKind::Version(error)))?;

        Ok(Self { name, version })
    }
}

impl Display for NamedVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.name, self.version)
    }
}

impl<'de> Deserialize<'de> for NamedVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for NamedVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A named version string could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to parse named version `{input}`: {kind}")]
pub struct NamedVersionParseError {
    input: String,
    kind: NamedVersionParseErrorKind,
}

impl NamedVersionParseError {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn kind(&self) -> &NamedVersionParseErrorKind {
        &self.kind
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamedVersionParseErrorKind {
    #[error("input must not be empty")]
    Empty,
    #[error("expected `<name>-<major>.<minor>.<patch>`")]
    MissingSeparator,
    #[error("{0}")]
    Name(InvalidNameError),
    #[error("invalid version `{}`: {}", .0.version(), .0.kind())]
    Version(VersionParseError),
}
