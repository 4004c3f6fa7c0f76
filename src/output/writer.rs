// src/output/writer.rs

//! Sends the concatenation to the configured destination (stdout, file, or
//! clipboard).

use crate::config::OutputDestination;
use crate::core_types::RunResult;
use crate::errors::{io_error_with_path, Result};
use crate::output::{Concatenator, Progress};
use std::io::{self, Write};
use std::path::PathBuf;

/// Runs `engine` over `files` and delivers the output to `destination`.
///
/// File output is written atomically by [`Concatenator::to_file`]. Stdout and
/// clipboard output is assembled in memory first, so a cancelled run prints or
/// copies nothing.
///
/// # Errors
/// Returns an error if the destination cannot be written, the clipboard is
/// unavailable, or the run is cancelled.
pub fn write_output(
    engine: &Concatenator,
    files: &[PathBuf],
    destination: &OutputDestination,
    progress: Option<Progress<'_>>,
) -> Result<RunResult> {
    match destination {
        OutputDestination::Stdout => {
            let output = engine.to_string(files, progress)?;
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.text.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| io_error_with_path(e, "<stdout>"))?;
            Ok(output.result)
        }
        OutputDestination::File(path) => engine.to_file(files, path, progress),
        #[cfg(feature = "clipboard")]
        OutputDestination::Clipboard => {
            let output = engine.to_string(files, progress)?;
            copy_to_clipboard(&output.text)?;
            Ok(output.result)
        }
    }
}

/// Describes a destination for the run report.
pub fn describe_destination(destination: &OutputDestination) -> String {
    match destination {
        OutputDestination::Stdout => "standard output".to_string(),
        OutputDestination::File(path) => path.display().to_string(),
        #[cfg(feature = "clipboard")]
        OutputDestination::Clipboard => "the clipboard".to_string(),
    }
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(content: &str) -> Result<()> {
    use crate::errors::Error;
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(content)
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Options;
    use crate::errors::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_output_file() -> Result<()> {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.txt");
        fs::write(&input, "content").unwrap();
        let out_path = temp.path().join("out.txt");
        let engine = Concatenator::new(&Options::default());

        let result = write_output(
            &engine,
            &[input.clone()],
            &OutputDestination::File(out_path.clone()),
            None,
        )?;
        assert_eq!(result.written, 1);
        let written = fs::read_to_string(&out_path).unwrap();
        assert!(written.ends_with("content\n"));
        assert!(written.contains(&input.display().to_string()));
        Ok(())
    }

    #[test]
    fn test_write_output_file_replaces_existing() -> Result<()> {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.txt");
        fs::write(&input, "new").unwrap();
        let out_path = temp.path().join("out.txt");
        fs::write(&out_path, "old content that is longer").unwrap();
        let options = crate::config::OptionsBuilder::new().add_headers(false).build()?;

        write_output(
            &Concatenator::new(&options),
            &[input],
            &OutputDestination::File(out_path.clone()),
            None,
        )?;
        assert_eq!(fs::read_to_string(&out_path).unwrap(), "new\n");
        Ok(())
    }

    #[test]
    fn test_cancelled_stdout_run_is_interrupted() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.txt");
        fs::write(&input, "x").unwrap();
        let mut cancel = |_: usize, _: usize| std::ops::ControlFlow::Break(());
        let result = write_output(
            &Concatenator::new(&Options::default()),
            &[input],
            &OutputDestination::Stdout,
            Some(&mut cancel),
        );
        assert!(matches!(result, Err(Error::Interrupted)));
    }

    #[test]
    fn test_describe_destination() {
        assert_eq!(describe_destination(&OutputDestination::Stdout), "standard output");
        assert_eq!(
            describe_destination(&OutputDestination::File(PathBuf::from("out.txt"))),
            "out.txt"
        );
    }

    // Clipboard access depends on the environment; accept success or a
    // clipboard error, never anything else.
    #[cfg(feature = "clipboard")]
    #[test]
    fn test_clipboard_errors_are_clipboard_errors() {
        match copy_to_clipboard("filecat test") {
            Ok(()) | Err(Error::Clipboard(_)) => {}
            Err(other) => panic!("unexpected error: {}", other),
        }
    }
}
