// src/output/dry_run.rs

use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;

/// Writes the output for a dry run (-D).
///
/// Lists the candidate files in the order they would be concatenated. Size
/// and binary checks are not applied, since they happen during the run.
pub fn write_dry_run_output(writer: &mut dyn Write, files: &[PathBuf]) -> io::Result<()> {
    debug!("Executing dry run output...");
    writeln!(writer, "--- Dry Run: Files that would be processed ---")?;

    for path in files {
        writeln!(writer, "- {}", path.display())?;
    }

    writeln!(writer, "--- End Dry Run ({} file(s)) ---", files.len())?;
    writer.flush()
}
