use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

use crate::{BuildMetadata, IdentifierError, Prerelease};

/// A semantic version such as `1.2.3`, `1.0.0-alpha.1` or `1.0.0-rc.1+sha.5114f85`.
///
/// Versions are immutable: the `with_*` methods consume the version and return a new one.
///
/// There are two orderings:
///
/// * [`Version::cmp_precedence`] is the precedence defined by Semantic Versioning 2.0.0. Build
///   metadata is ignored, so `1.0.0+a` and `1.0.0+b` have equal precedence.
/// * The [`Ord`] implementation sorts by precedence and then by build metadata, so that it agrees
///   with [`Eq`], which treats `1.0.0+a` and `1.0.0+b` as different versions.
///
/// ```text
/// 1.0.0-alpha < 1.0.0-alpha.1 < 1.0.0-alpha.beta < 1.0.0-beta < 1.0.0-beta.2 < 1.0.0-beta.11
///   < 1.0.0-rc.1 < 1.0.0 < 2.0.0 < 2.1.0 < 2.1.1 < 10.0.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Prerelease,
    build: BuildMetadata,
}

impl Version {
    /// A release version without prerelease or build metadata.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: Prerelease::EMPTY,
            build: BuildMetadata::EMPTY,
        }
    }

    /// Create a version from its parts, validating the prerelease and build metadata.
    ///
    /// An empty `prerelease` or `build` string means the part is absent.
    pub fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: &str,
        build: &str,
    ) -> Result<Self, InvalidVersionError> {
        Self::new(major, minor, patch)
            .try_with_prerelease(prerelease)?
            .try_with_build(build)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prerelease(&self) -> &Prerelease {
        &self.pre
    }

    pub fn build(&self) -> &BuildMetadata {
        &self.build
    }

    /// Whether this is a prerelease, e.g., `1.0.0-rc.1`.
    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Whether this version carries build metadata, e.g., `1.0.0+20130313144700`.
    pub fn has_build(&self) -> bool {
        !self.build.is_empty()
    }

    #[must_use]
    pub fn with_major(self, major: u64) -> Self {
        Self { major, ..self }
    }

    #[must_use]
    pub fn with_minor(self, minor: u64) -> Self {
        Self { minor, ..self }
    }

    #[must_use]
    pub fn with_patch(self, patch: u64) -> Self {
        Self { patch, ..self }
    }

    #[must_use]
    pub fn with_prerelease(self, pre: Prerelease) -> Self {
        Self { pre, ..self }
    }

    #[must_use]
    pub fn with_build(self, build: BuildMetadata) -> Self {
        Self { build, ..self }
    }

    /// Like [`Version::with_prerelease`], but parses and validates the prerelease first.
    pub fn try_with_prerelease(self, prerelease: &str) -> Result<Self, InvalidVersionError> {
        let pre = Prerelease::from_str(prerelease).map_err(|error| InvalidVersionError {
            field: Field::Prerelease,
            error,
        })?;
        Ok(self.with_prerelease(pre))
    }

    /// Like [`Version::with_build`], but parses and validates the build metadata first.
    pub fn try_with_build(self, build: &str) -> Result<Self, InvalidVersionError> {
        let build = BuildMetadata::from_str(build).map_err(|error| InvalidVersionError {
            field: Field::Build,
            error,
        })?;
        Ok(self.with_build(build))
    }

    #[must_use]
    pub fn without_build(self) -> Self {
        self.with_build(BuildMetadata::EMPTY)
    }

    /// Compare by Semantic Versioning precedence, ignoring build metadata.
    ///
    /// `major`, `minor` and `patch` compare numerically. If they are equal, a release has higher
    /// precedence than a prerelease, and two prereleases compare identifier by identifier.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| self.pre.cmp(&other.pre))
    }

    /// Whether upgrading from `base` to this version is safe, i.e., does not cross a breaking
    /// change.
    ///
    /// A version is always compatible with itself. Otherwise, a `0.y.z` base has no stable API
    /// and nothing is compatible with it, and for `1.0.0` and later the major versions must match
    /// and this version must not have lower precedence than `base`.
    pub fn is_compatibly_greater_than(&self, base: &Self) -> bool {
        if self == base {
            return true;
        }
        if base.major == 0 {
            return false;
        }
        self.major == base.major && self.cmp_precedence(base) != Ordering::Less
    }

    /// Shorthand for [`Version::is_compatibly_greater_than`].
    pub fn cgt(&self, base: &Self) -> bool {
        self.is_compatibly_greater_than(base)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    /// Parses `<major>.<minor>.<patch>(-<prerelease>)?(+<build>)?`.
    ///
    /// No leading `v`, surrounding whitespace, or missing components are accepted.
    fn from_str(version: &str) -> Result<Self, Self::Err> {
        parse(version).map_err(|kind| VersionParseError {
            version: version.to_string(),
            kind,
        })
    }
}

fn parse(version: &str) -> Result<Version, VersionParseErrorKind> {
    if version.is_empty() {
        return Err(VersionParseErrorKind::Empty);
    }

    // `+` can't occur before the build metadata, and `-` can't occur in the release numbers, so
    // the first of each delimits the sections.
    let (rest, build) = match version.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (version, None),
    };
    let (release, pre) = match rest.split_once('-') {
        Some((release, pre)) => (release, Some(pre)),
        None => (rest, None),
    };

    let mut components = release.split('.');
    let major = parse_component(components.next(), Field::Major)?;
    let minor = parse_component(components.next(), Field::Minor)?;
    let patch = parse_component(components.next(), Field::Patch)?;
    if components.next().is_some() {
        return Err(VersionParseErrorKind::TooManyComponents);
    }

    let pre = match pre {
        Some("") => return Err(VersionParseErrorKind::Prerelease(IdentifierError::Empty)),
        Some(pre) => Prerelease::from_str(pre).map_err(VersionParseErrorKind::Prerelease)?,
        None => Prerelease::EMPTY,
    };
    let build = match build {
        Some("") => return Err(VersionParseErrorKind::Build(IdentifierError::Empty)),
        Some(build) => BuildMetadata::from_str(build).map_err(VersionParseErrorKind::Build)?,
        None => BuildMetadata::EMPTY,
    };

    Ok(Version {
        major,
        minor,
        patch,
        pre,
        build,
    })
}

/// Parse one of `major`, `minor` or `patch`: ASCII digits without a leading zero.
fn parse_component(component: Option<&str>, field: Field) -> Result<u64, VersionParseErrorKind> {
    let Some(component) = component else {
        return Err(VersionParseErrorKind::MissingComponent(field));
    };
    if component.is_empty() {
        return Err(VersionParseErrorKind::MissingComponent(field));
    }
    if !component.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(VersionParseErrorKind::NonNumeric {
            field,
            component: component.to_string(),
        });
    }
    if component.len() > 1 && component.starts_with('0') {
        return Err(VersionParseErrorKind::LeadingZero {
            field,
            component: component.to_string(),
        });
    }
    component
        .parse::<u64>()
        .map_err(|_| VersionParseErrorKind::Overflow {
            field,
            component: component.to_string(),
        })
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(de::Error::custom)
    }
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A part of a [`Version`], used to say which part was invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Major,
    Minor,
    Patch,
    Prerelease,
    Build,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Major => "major version",
            Self::Minor => "minor version",
            Self::Patch => "patch version",
            Self::Prerelease => "prerelease",
            Self::Build => "build metadata",
        })
    }
}

/// A version string could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to parse version `{version}`: {kind}")]
pub struct VersionParseError {
    version: String,
    kind: VersionParseErrorKind,
}

impl VersionParseError {
    /// The string that failed to parse.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn kind(&self) -> &VersionParseErrorKind {
        &self.kind
    }
}

/// The reason a version string could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParseErrorKind {
    #[error("version must not be empty")]
    Empty,
    #[error("expected `major.minor.patch`, but the {0} is missing")]
    MissingComponent(Field),
    #[error("expected `major.minor.patch`, but found more than three release numbers")]
    TooManyComponents,
    #[error("the {field} `{component}` must only contain ASCII digits")]
    NonNumeric { field: Field, component: String },
    #[error("the {field} `{component}` must not contain leading zeros")]
    LeadingZero { field: Field, component: String },
    #[error("the {field} `{component}` is larger than {max}", max = u64::MAX)]
    Overflow { field: Field, component: String },
    #[error("invalid prerelease: {0}")]
    Prerelease(IdentifierError),
    #[error("invalid build metadata: {0}")]
    Build(IdentifierError),
}

/// A [`Version`] could not be constructed from the given parts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {error}")]
pub struct InvalidVersionError {
    field: Field,
    error: IdentifierError,
}

impl InvalidVersionError {
    /// The part of the version that was rejected.
    pub fn field(&self) -> Field {
        self.field
    }

    pub fn error(&self) -> &IdentifierError {
        &self.error
    }
}
