use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::process::ExitCode;
use std::str::FromStr;

use serde_json::json;

use semvername_named::NamedVersion;
use semvername_semver::Version;

pub(crate) use cgt::cgt;
pub(crate) use compare::compare;
pub(crate) use parse::parse;
pub(crate) use sort::sort;

mod cgt;
mod compare;
mod parse;
mod sort;

#[derive(Copy, Clone)]
pub(crate) enum ExitStatus {
    /// The command succeeded.
    Success,

    /// The command ran, but the answer was "no" (e.g., `cgt` returned `false`).
    Failure,

    /// The command failed with an error, e.g., malformed input.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::from(0),
            ExitStatus::Failure => Self::from(1),
            ExitStatus::Error => Self::from(2),
        }
    }
}

/// The operations the commands need, implemented by both [`Version`] and [`NamedVersion`].
pub(crate) trait VersionLike: Debug + Display + Ord + Sized {
    fn parse(input: &str) -> anyhow::Result<Self>;

    /// Compare by precedence, ignoring build metadata.
    fn cmp_precedence(&self, other: &Self) -> Ordering;

    fn is_compatibly_greater_than(&self, base: &Self) -> bool;

    fn to_json(&self) -> serde_json::Value;
}

impl VersionLike for Version {
    fn parse(input: &str) -> anyhow::Result<Self> {
        Ok(Self::from_str(input)?)
    }

    fn cmp_precedence(&self, other: &Self) -> Ordering {
        Self::cmp_precedence(self, other)
    }

    fn is_compatibly_greater_than(&self, base: &Self) -> bool {
        Self::is_compatibly_greater_than(self, base)
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "version": self,
            "major": self.major(),
            "minor": self.minor(),
            "patch": self.patch(),
            "prerelease": self
                .prerelease()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            "build": self.build().iter().collect::<Vec<_>>(),
        })
    }
}

impl VersionLike for NamedVersion {
    fn parse(input: &str) -> anyhow::Result<Self> {
        Ok(Self::from_str(input)?)
    }

    fn cmp_precedence(&self, other: &Self) -> Ordering {
        Self::cmp_precedence(self, other)
    }

    fn is_compatibly_greater_than(&self, base: &Self) -> bool {
        Self::is_compatibly_greater_than(self, base)
    }

    fn to_json(&self) -> serde_json::Value {
        let mut value = self.version().to_json();
        value["name"] = json!(self.name());
        value["version"] = json!(self.version());
        value["named_version"] = json!(self);
        value
    }
}
