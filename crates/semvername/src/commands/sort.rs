use std::fmt::Write;

use anyhow::Result;
use tracing::debug;

use crate::commands::{ExitStatus, VersionLike};
use crate::printer::Printer;

/// Print the inputs in ascending (or, with `reverse`, descending) order.
pub(crate) fn sort<T: VersionLike>(
    inputs: &[String],
    reverse: bool,
    printer: Printer,
) -> Result<ExitStatus> {
    let mut versions = inputs
        .iter()
        .map(|input| T::parse(input))
        .collect::<Result<Vec<_>>>()?;
    debug!("Sorting {} versions", versions.len());

    versions.sort();
    if reverse {
        versions.reverse();
    }

    for version in &versions {
        writeln!(printer.stdout(), "{version}")?;
    }

    Ok(ExitStatus::Success)
}
