// src/output/summary.rs

use crate::config::OutputDestination;
use crate::core_types::RunResult;
use crate::output::writer::describe_destination;
use log::debug;
use std::io::{self, Write};

/// Writes the run report: how many files were written where, then each
/// skipped file with its reason, in processing order.
pub fn write_report(
    writer: &mut dyn Write,
    result: &RunResult,
    destination: &OutputDestination,
) -> io::Result<()> {
    debug!("Writing report for {} skipped files...", result.skipped.len());
    writeln!(
        writer,
        "Wrote {} file(s) to {}.",
        result.written,
        describe_destination(destination)
    )?;
    if !result.skipped.is_empty() {
        writeln!(writer, "Skipped {} file(s):", result.skipped.len())?;
        for record in &result.skipped {
            writeln!(writer, "- {}: {}", record.path.display(), record.reason)?;
        }
    }
    Ok(())
}
