//! Batch extraction over a directory of stored pages.
//!
//! Documents are processed one at a time: load, locate the finals table,
//! classify its rows, emit each accepted record. A page without a finals
//! table contributes nothing and does not stop the run; I/O failures do.

use tracing::{debug, info, warn};

use crate::classifier::RowClassifier;
use crate::emitter::{FileEmitter, RecordSink};
use crate::error::Result;
use crate::loader::DocumentLoader;
use crate::locator::ResultsTableLocator;
use crate::options::Options;
use crate::{Document, Record};

/// Counters for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents read and parsed.
    pub documents: usize,
    /// Documents where a finals table was found.
    pub tables_found: usize,
    /// Records written to the sink.
    pub records: usize,
}

/// Wires loader, locator, classifier and emitter from one [`Options`] value.
#[derive(Debug, Clone)]
pub struct Pipeline {
    options: Options,
    locator: ResultsTableLocator,
    classifier: RowClassifier,
}

impl Pipeline {
    #[must_use]
    pub fn new(options: Options) -> Self {
        let locator = ResultsTableLocator::new(options.min_table_rows, options.badge_marker.clone());
        let classifier = RowClassifier::new(options.badge_marker.clone());
        Self {
            options,
            locator,
            classifier,
        }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Process every document in the input directory, appending to the
    /// configured output file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the input directory or a
    /// document cannot be read, or the output cannot be written.
    pub fn run(&self) -> Result<RunSummary> {
        let mut emitter = FileEmitter::new(
            &self.options.output_path,
            self.options.format,
            self.options.height_style,
        );
        debug!(output = %emitter.path().display(), "appending records");
        self.run_into(&mut emitter)
    }

    /// Like [`Pipeline::run`], writing to a caller-supplied sink.
    ///
    /// # Errors
    ///
    /// Returns the first loader or sink error.
    pub fn run_into<S: RecordSink>(&self, mut sink: S) -> Result<RunSummary> {
        let loader = DocumentLoader::open(&self.options.input_dir)?;
        info!(
            dir = %self.options.input_dir.display(),
            files = loader.remaining(),
            "extracting medalists"
        );

        let mut summary = RunSummary::default();
        for item in loader {
            let (path, bytes) = item?;
            let document = Document::parse(path, &bytes);
            summary.documents += 1;

            let Some(records) = self.extract(&document) else {
                info!(source = %document.source().display(), "no finals table found");
                continue;
            };
            summary.tables_found += 1;

            for record in &records {
                sink.emit(record)?;
                summary.records += 1;
            }
        }

        info!(
            documents = summary.documents,
            tables = summary.tables_found,
            records = summary.records,
            "extraction finished"
        );
        Ok(summary)
    }

    /// Records of one document, or `None` when it has no finals table.
    #[must_use]
    pub fn extract(&self, document: &Document) -> Option<Vec<Record>> {
        let table = self.locator.locate(document)?;

        let year = document.year().unwrap_or_else(|| {
            warn!(title = document.title(), "no year in page title");
            ""
        });

        let records = self.classifier.classify_table(&table, year);
        debug!(
            source = %document.source().display(),
            year,
            records = records.len(),
            "finals table classified"
        );
        Some(records)
    }
}

/// Extract records from a single in-memory page with default settings.
///
/// # Example
///
/// ```rust
/// let html = b"<title>1992 World Junior Championships</title><table></table>";
/// let records = medalist_extract::extract_page("page.html", html);
/// assert!(records.is_empty());
/// ```
#[must_use]
pub fn extract_page(source: &str, bytes: &[u8]) -> Vec<Record> {
    let document = Document::parse(source, bytes);
    Pipeline::new(Options::default())
        .extract(&document)
        .unwrap_or_default()
}
