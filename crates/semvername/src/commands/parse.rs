use std::fmt::Write;

use anyhow::Result;
use tracing::debug;

use crate::commands::{ExitStatus, VersionLike};
use crate::printer::Printer;

/// Parse each input and print its canonical form, or a JSON object per input.
pub(crate) fn parse<T: VersionLike>(
    inputs: &[String],
    json: bool,
    printer: Printer,
) -> Result<ExitStatus> {
    for input in inputs {
        let version = T::parse(input)?;
        debug!("Parsed `{input}` as {version:?}");

        if json {
            writeln!(printer.stdout(), "{}", version.to_json())?;
        } else {
            writeln!(printer.stdout(), "{version}")?;
        }
    }

    Ok(ExitStatus::Success)
}
