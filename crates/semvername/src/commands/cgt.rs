use std::fmt::Write;

use anyhow::Result;
use tracing::debug;

use crate::commands::{ExitStatus, VersionLike};
use crate::printer::Printer;

/// Print whether `candidate` is a compatible upgrade from `base`, and exit with
/// [`ExitStatus::Failure`] if it isn't.
pub(crate) fn cgt<T: VersionLike>(candidate: &str, base: &str, printer: Printer) -> Result<ExitStatus> {
    let candidate = T::parse(candidate)?;
    let base = T::parse(base)?;

    let compatible = candidate.is_compatibly_greater_than(&base);
    debug!("{candidate} is compatibly greater than {base}: {compatible}");

    writeln!(printer.stdout(), "{compatible}")?;

    if compatible {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
