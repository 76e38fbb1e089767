use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::identifier::{IdentifierError, check_characters, parse_prerelease_identifier};
use crate::Identifier;

/// The dot-separated prerelease identifiers of a version, such as `alpha.1` in `1.0.0-alpha.1`.
///
/// An empty prerelease means the version is a release. Releases have higher precedence than any
/// prerelease of the same `major.minor.patch`, so the empty prerelease sorts last:
///
/// `alpha < alpha.1 < alpha.beta < beta < beta.2 < beta.11 < rc.1 < (empty)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Prerelease(Vec<Identifier>);

impl Prerelease {
    /// The empty prerelease, i.e., a release.
    pub const EMPTY: Self = Self(Vec::new());

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Identifier] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identifier> {
        self.0.iter()
    }
}

impl FromStr for Prerelease {
    type Err = IdentifierError;

    /// Parses dot-separated identifiers. The empty string is the empty prerelease.
    fn from_str(prerelease: &str) -> Result<Self, Self::Err> {
        if prerelease.is_empty() {
            return Ok(Self::EMPTY);
        }
        prerelease
            .split('.')
            .map(parse_prerelease_identifier)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl Display for Prerelease {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, identifier) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{identifier}")?;
        }
        Ok(())
    }
}

impl PartialOrd for Prerelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Prerelease {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            // A release outranks any prerelease.
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Identifier by identifier; when one is a prefix of the other, the shorter one is
            // lower, which is exactly the `Ord` of a slice.
            (false, false) => self.0.cmp(&other.0),
        }
    }
}

/// The dot-separated build metadata of a version, such as `sha.5114f85` in `1.0.0+sha.5114f85`.
///
/// Build metadata has no influence on precedence. Unlike prerelease identifiers, numeric build
/// identifiers may have leading zeros (`1.0.0+001`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BuildMetadata(Vec<Box<str>>);

impl BuildMetadata {
    pub const EMPTY: Self = Self(Vec::new());

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|identifier| &**identifier)
    }
}

impl FromStr for BuildMetadata {
    type Err = IdentifierError;

    fn from_str(build: &str) -> Result<Self, Self::Err> {
        if build.is_empty() {
            return Ok(Self::EMPTY);
        }
        build
            .split('.')
            .map(|segment| check_characters(segment).map(|_| Box::from(segment)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl Display for BuildMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, identifier) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(identifier)?;
        }
        Ok(())
    }
}

impl PartialOrd for BuildMetadata {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BuildMetadata {
    /// An arbitrary but total order, used only to break ties between versions of equal
    /// precedence: no build metadata sorts first, then identifier by identifier, comparing
    /// all-digit identifiers by value (and then by their leading zeros) and everything else by
    /// ASCII order.
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            let ordering = compare_build_identifier(a, b);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        self.0.len().cmp(&other.0.len())
    }
}

fn compare_build_identifier(a: &str, b: &str) -> Ordering {
    let a_numeric = a.bytes().all(|byte| byte.is_ascii_digit());
    let b_numeric = b.bytes().all(|byte| byte.is_ascii_digit());
    match (a_numeric, b_numeric) {
        (true, true) => {
            let a_value = a.trim_start_matches('0');
            let b_value = b.trim_start_matches('0');
            a_value
                .len()
                .cmp(&b_value.len())
                .then_with(|| a_value.cmp(b_value))
                .then_with(|| a.len().cmp(&b.len()))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}
