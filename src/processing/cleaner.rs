// src/processing/cleaner.rs

//! The external code cleaner collaborator.
//!
//! Cleaning is delegated to a separate program that receives the source text on
//! stdin and prints the cleaned text on stdout. Its internals are opaque; this
//! module only knows how to find it, which flags to pass and how to read the
//! result.

use crate::config::CleanFlags;
use crate::constants::CLEANER_ENV_VAR;
use log::debug;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use thiserror::Error;

const REMOVE_COMMENTS_FLAG: &str = "--remove-comments";
const REMOVE_USINGS_FLAG: &str = "--remove-usings";
const CLEANER_DIR: &str = "RoslynCleaner";
const CLEANER_DLL: &str = "RoslynCleaner.dll";

/// Reasons a cleaning attempt did not produce text.
///
/// Callers treat every variant the same way: the text is kept unmodified.
#[derive(Error, Debug)]
pub enum CleanerError {
    /// No cleaner is configured or installed.
    #[error("no external cleaner available")]
    NotFound,

    /// The cleaner process could not be started or waited on.
    #[error("failed to run cleaner '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The cleaner exited unsuccessfully.
    #[error("cleaner exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    /// The cleaner printed something that is not UTF-8.
    #[error("cleaner output is not valid UTF-8")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
}

/// Cleans source text according to a set of flags.
pub trait TextCleaner: Send + Sync {
    fn clean(&self, text: &str, flags: CleanFlags) -> Result<String, CleanerError>;
}

/// A cleaner that is never available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCleaner;

impl TextCleaner for NoCleaner {
    fn clean(&self, _text: &str, _flags: CleanFlags) -> Result<String, CleanerError> {
        Err(CleanerError::NotFound)
    }
}

/// Runs an external program as the cleaner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCleaner {
    program: OsString,
    leading_args: Vec<OsString>,
}

impl ExternalCleaner {
    /// Runs `program` with `leading_args` placed before the cleaning flags.
    pub fn new(program: impl Into<OsString>, leading_args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            leading_args,
        }
    }

    /// Builds a cleaner from a path: a `.dll` is run through `dotnet`, anything
    /// else is executed directly.
    ///
    /// # Examples
    /// ```
    /// use filecat::processing::ExternalCleaner;
    ///
    /// let cleaner = ExternalCleaner::from_path("tools/RoslynCleaner.DLL");
    /// assert_eq!(cleaner.program(), "dotnet");
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let is_dll = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("dll"));
        if is_dll {
            Self::new("dotnet", vec![path.as_os_str().to_owned()])
        } else {
            Self::new(path.as_os_str(), Vec::new())
        }
    }

    /// Finds the cleaner to use.
    ///
    /// Lookup order:
    /// 1. `explicit`, when given.
    /// 2. The `FILECAT_CLEANER` environment variable, when set and non-empty.
    /// 3. The first existing `RoslynCleaner.dll` in the usual build locations
    ///    under a `RoslynCleaner` directory next to the running executable.
    ///
    /// # Errors
    /// Returns [`CleanerError::NotFound`] if none of these yields a cleaner.
    pub fn locate(explicit: Option<&Path>) -> Result<Self, CleanerError> {
        if let Some(path) = explicit {
            debug!("Using cleaner from explicit path {:?}", path);
            return Ok(Self::from_path(path));
        }
        if let Some(value) = std::env::var_os(CLEANER_ENV_VAR).filter(|v| !v.is_empty()) {
            debug!("Using cleaner from {}={:?}", CLEANER_ENV_VAR, value);
            return Ok(Self::from_path(PathBuf::from(value)));
        }
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .ok_or(CleanerError::NotFound)?;
        installed_candidates(&exe_dir)
            .into_iter()
            .find(|candidate| candidate.is_file())
            .map(|dll| {
                debug!("Found installed cleaner at {:?}", dll);
                Self::from_path(dll)
            })
            .ok_or(CleanerError::NotFound)
    }

    /// The program that gets executed.
    pub fn program(&self) -> &std::ffi::OsStr {
        &self.program
    }
}

impl TextCleaner for ExternalCleaner {
    fn clean(&self, text: &str, flags: CleanFlags) -> Result<String, CleanerError> {
        if !flags.any() {
            return Ok(text.to_string());
        }
        let program = self.program.to_string_lossy().into_owned();
        let spawn_error = |source| CleanerError::Spawn {
            program: program.clone(),
            source,
        };

        let mut command = Command::new(&self.program);
        command.args(&self.leading_args);
        if flags.remove_comments {
            command.arg(REMOVE_COMMENTS_FLAG);
        }
        if flags.remove_usings {
            command.arg(REMOVE_USINGS_FLAG);
        }
        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        // Feed stdin from another thread so a large input cannot deadlock
        // against a full stdout pipe.
        let stdin = child.stdin.take();
        let input = text.as_bytes().to_vec();
        let feeder = thread::spawn(move || match stdin {
            Some(mut stdin) => stdin.write_all(&input),
            None => Ok(()),
        });

        let output = child.wait_with_output().map_err(spawn_error)?;
        match feeder.join() {
            Ok(Err(e)) => debug!("Cleaner did not consume all of its input: {}", e),
            Err(_) => debug!("Cleaner input thread panicked"),
            Ok(Ok(())) => {}
        }

        if !output.status.success() {
            return Err(CleanerError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8(output.stdout)?)
    }
}

fn installed_candidates(exe_dir: &Path) -> Vec<PathBuf> {
    let base = exe_dir.join(CLEANER_DIR);
    vec![
        base.join(CLEANER_DLL),
        base.join("publish").join(CLEANER_DLL),
        base.join("bin").join("Release").join("net8.0").join(CLEANER_DLL),
        base.join("bin").join("Debug").join("net8.0").join(CLEANER_DLL),
    ]
}

/// Picks the cleaner for a run: the located external cleaner, or
/// [`NoCleaner`] when none is found.
pub fn default_cleaner(explicit: Option<&Path>) -> Box<dyn TextCleaner> {
    match ExternalCleaner::locate(explicit) {
        Ok(cleaner) => Box::new(cleaner),
        Err(e) => {
            debug!("{}", e);
            Box::new(NoCleaner)
        }
    }
}
