//! Handles the per-file content pipeline.
//!
//! Text is read lossily as UTF-8, then passed through the content filters
//! selected by the [`Options`] (line-ending normalization) and, for `.cs`
//! files with a cleaning flag set, through the external [`TextCleaner`].

use crate::config::Options;
use log::debug;
use std::fmt;
use std::path::Path;

mod cleaner;
mod content_reader;
pub mod filters;

pub use cleaner::{default_cleaner, CleanerError, ExternalCleaner, NoCleaner, TextCleaner};
pub use content_reader::read_lossy;

use filters::{ContentFilter, NormalizeEolFilter};

/// Applies the configured transformations to one file's text.
pub struct ContentTransformer {
    options: Options,
    filters: Vec<Box<dyn ContentFilter>>,
    cleaner: Box<dyn TextCleaner>,
}

impl ContentTransformer {
    /// Creates a transformer for `options`, cleaning `.cs` files with `cleaner`.
    pub fn new(options: &Options, cleaner: Box<dyn TextCleaner>) -> Self {
        let mut filters: Vec<Box<dyn ContentFilter>> = Vec::new();
        if options.normalize_eol() {
            filters.push(Box::new(NormalizeEolFilter));
        }
        Self {
            options: options.clone(),
            filters,
            cleaner,
        }
    }

    /// Transforms `text`, read from `path`.
    ///
    /// Line endings are normalized first, then the cleaner runs. A cleaner
    /// failure of any kind leaves the text as it was.
    ///
    /// # Examples
    /// ```
    /// use filecat::processing::{ContentTransformer, NoCleaner};
    /// use filecat::OptionsBuilder;
    /// use std::path::Path;
    ///
    /// let options = OptionsBuilder::new().remove_comments(true).build().unwrap();
    /// let transformer = ContentTransformer::new(&options, Box::new(NoCleaner));
    /// let out = transformer.transform(Path::new("Program.cs"), "// hi\r\nint x;\r\n".into());
    /// assert_eq!(out, "// hi\nint x;\n");
    /// ```
    pub fn transform(&self, path: &Path, text: String) -> String {
        let mut content = text;
        for filter in &self.filters {
            content = filter.apply(&content);
            debug!("Applied filter '{}' to {}", filter.name(), path.display());
        }

        if self.options.wants_cleaning(path) {
            match self.cleaner.clean(&content, self.options.clean_flags()) {
                Ok(cleaned) => {
                    debug!("Cleaned {}", path.display());
                    content = cleaned;
                }
                Err(e) => debug!("Keeping {} uncleaned: {}", path.display(), e),
            }
        }
        content
    }
}

impl fmt::Debug for ContentTransformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentTransformer")
            .field("filters", &self.filters)
            .field("clean_flags", &self.options.clean_flags())
            .finish_non_exhaustive()
    }
}
