use std::cmp::Ordering;
use std::fmt::Write;

use anyhow::Result;
use tracing::debug;

use crate::commands::{ExitStatus, VersionLike};
use crate::printer::Printer;

/// Print whether `lhs` has lower, equal, or higher precedence than `rhs`.
pub(crate) fn compare<T: VersionLike>(lhs: &str, rhs: &str, printer: Printer) -> Result<ExitStatus> {
    let lhs = T::parse(lhs)?;
    let rhs = T::parse(rhs)?;

    let ordering = lhs.cmp_precedence(&rhs);
    debug!("Compared {lhs} to {rhs}: {ordering:?}");

    let symbol = match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };

    // Precedence ignores build metadata, so equal precedence doesn't imply equal versions.
    if ordering == Ordering::Equal && lhs != rhs {
        writeln!(
            printer.stdout(),
            "{lhs} {symbol} {rhs} (build metadata differs)"
        )?;
    } else {
        writeln!(printer.stdout(), "{lhs} {symbol} {rhs}")?;
    }

    Ok(ExitStatus::Success)
}
