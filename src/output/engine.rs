// src/output/engine.rs

use crate::config::Options;
use crate::core_types::{ConcatOutput, RunResult, SkipReason, SkipRecord};
use crate::errors::{io_error_with_path, Error, Result};
use crate::filtering::{is_binary, passes_size_filter};
use crate::output::file_block::render_file_block;
use crate::processing::{default_cleaner, read_lossy, ContentTransformer, NoCleaner, TextCleaner};
use log::debug;
use std::fs;
use std::io::{BufWriter, Write};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

/// Progress callback: receives `(done, total)` and returns
/// [`ControlFlow::Break`] to cancel the run.
pub type Progress<'a> = &'a mut dyn FnMut(usize, usize) -> ControlFlow<()>;

/// Label used for errors on a caller-supplied writer.
const WRITER_LABEL: &str = "<output stream>";

/// Concatenates an ordered list of files into one output.
///
/// Every entry point runs the same per-file pipeline, only the sink differs,
/// so all of them produce the same bytes for the same input:
///
/// 1. Files larger than the size cap are skipped.
/// 2. Binary files are skipped when `ignore_binaries` is set.
/// 3. The text is read lossily and transformed.
/// 4. A header line is written first when `add_headers` is set, preceded by a
///    blank line unless it is the first written block.
/// 5. The content follows, newline-terminated.
///
/// Stat, read and transform failures become skip records; only sink failures
/// abort the run.
///
/// The progress callback is called with `(i, total)` before the `i`-th file
/// (1-based, `total = max(1, files.len())`) and with `(files.len(), total)`
/// once at the end. Returning `Break` stops the run with
/// [`Error::Interrupted`].
///
/// # Examples
///
/// ```
/// use filecat::{Concatenator, Options};
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// let file = temp.path().join("note.txt");
/// fs::write(&file, "hello")?;
///
/// let output = Concatenator::new(&Options::default()).to_string(&[file.clone()], None)?;
/// assert_eq!(
///     output.text,
///     format!("============ {} ============\nhello\n", file.display())
/// );
/// assert_eq!(output.result.written, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Concatenator {
    options: Options,
    transformer: ContentTransformer,
}

impl Concatenator {
    /// Creates an engine for `options`.
    ///
    /// When a cleaning flag is set, the external cleaner is located the usual
    /// way (see [`ExternalCleaner::locate`](crate::processing::ExternalCleaner::locate)).
    pub fn new(options: &Options) -> Self {
        let cleaner: Box<dyn TextCleaner> = if options.clean_flags().any() {
            default_cleaner(None)
        } else {
            Box::new(NoCleaner)
        };
        Self::with_cleaner(options, cleaner)
    }

    /// Creates an engine that cleans `.cs` files with `cleaner`.
    pub fn with_cleaner(options: &Options, cleaner: Box<dyn TextCleaner>) -> Self {
        Self {
            options: options.clone(),
            transformer: ContentTransformer::new(options, cleaner),
        }
    }

    /// The options this engine runs with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Writes the concatenation to `writer`.
    ///
    /// # Errors
    /// [`Error::Io`] if writing fails, [`Error::Interrupted`] on cancellation.
    pub fn to_writer<W: Write + ?Sized>(
        &self,
        files: &[PathBuf],
        writer: &mut W,
        progress: Option<Progress<'_>>,
    ) -> Result<RunResult> {
        let result = self.drive(files, progress, |block| {
            writer
                .write_all(block.as_bytes())
                .map_err(|e| io_error_with_path(e, WRITER_LABEL))
        })?;
        writer
            .flush()
            .map_err(|e| io_error_with_path(e, WRITER_LABEL))?;
        Ok(result)
    }

    /// Writes the concatenation to the file at `out_path`.
    ///
    /// Output goes to a temporary file in the same directory that replaces
    /// `out_path` only once the run has succeeded. A cancelled or failed run
    /// leaves any existing file untouched.
    ///
    /// # Errors
    /// [`Error::Io`] if the file cannot be created, written or moved into
    /// place, [`Error::Interrupted`] on cancellation.
    pub fn to_file(
        &self,
        files: &[PathBuf],
        out_path: &Path,
        progress: Option<Progress<'_>>,
    ) -> Result<RunResult> {
        let dir = match out_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = tempfile::Builder::new()
            .prefix(".filecat-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| io_error_with_path(e, out_path))?;

        let result = {
            let mut writer = BufWriter::new(temp.as_file());
            let result = self.drive(files, progress, |block| {
                writer
                    .write_all(block.as_bytes())
                    .map_err(|e| io_error_with_path(e, out_path))
            })?;
            writer.flush().map_err(|e| io_error_with_path(e, out_path))?;
            result
        };

        temp.persist(out_path)
            .map_err(|e| io_error_with_path(e.error, out_path))?;
        debug!("Wrote output to {}", out_path.display());
        Ok(result)
    }

    /// Returns the concatenation as a string, with the same bytes the other
    /// entry points would write.
    ///
    /// # Errors
    /// [`Error::Interrupted`] on cancellation.
    pub fn to_string(
        &self,
        files: &[PathBuf],
        progress: Option<Progress<'_>>,
    ) -> Result<ConcatOutput> {
        let mut text = String::new();
        let result = self.drive(files, progress, |block| {
            text.push_str(block);
            Ok(())
        })?;
        Ok(ConcatOutput { text, result })
    }

    /// The shared per-file loop. `emit` receives each rendered block.
    fn drive<F>(
        &self,
        files: &[PathBuf],
        mut progress: Option<Progress<'_>>,
        mut emit: F,
    ) -> Result<RunResult>
    where
        F: FnMut(&str) -> Result<()>,
    {
        let _span = tracing::debug_span!("concatenate", files = files.len()).entered();
        let total = files.len().max(1);
        let mut result = RunResult::default();

        for (index, path) in files.iter().enumerate() {
            report(&mut progress, index + 1, total)?;

            match self.render(path, result.written > 0) {
                Ok(block) => {
                    emit(&block)?;
                    result.written += 1;
                }
                Err(reason) => {
                    debug!("Skipping {}: {}", path.display(), reason);
                    result.skipped.push(SkipRecord::new(path, reason));
                }
            }
        }

        report(&mut progress, files.len(), total)?;
        debug!(
            "Concatenation complete. Written: {}, skipped: {}",
            result.written,
            result.skipped.len()
        );
        Ok(result)
    }

    /// Produces the output block for one file, or the reason it is skipped.
    fn render(&self, path: &Path, separate: bool) -> std::result::Result<String, SkipReason> {
        let metadata = fs::metadata(path).map_err(|e| SkipReason::Io(e.to_string()))?;
        let size = metadata.len();
        if !passes_size_filter(size, &self.options) {
            return Err(SkipReason::SizeExceeded {
                size,
                limit_mb: self.options.max_mb(),
            });
        }
        if self.options.ignore_binaries() && is_binary(path) {
            return Err(SkipReason::Binary);
        }

        let text = read_lossy(path).map_err(skip_reason_for)?;
        let content = self.transformer.transform(path, text);
        Ok(render_file_block(
            path,
            &content,
            self.options.add_headers(),
            separate,
        ))
    }
}

fn report(progress: &mut Option<Progress<'_>>, done: usize, total: usize) -> Result<()> {
    if let Some(callback) = progress {
        if callback(done, total).is_break() {
            debug!("Cancelled at {}/{}", done, total);
            return Err(Error::Interrupted);
        }
    }
    Ok(())
}

fn skip_reason_for(error: Error) -> SkipReason {
    match error {
        Error::Io { source, .. } => SkipReason::Io(source.to_string()),
        other => SkipReason::Io(other.to_string()),
    }
}
