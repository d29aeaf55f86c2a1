//! Record serialisation and output sinks.
//!
//! Each record becomes one newline-terminated line. The file sink opens,
//! appends and closes the artifact once per record, so a run that aborts
//! midway leaves every record written so far intact.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::options::{HeightStyle, OutputFormat};
use crate::Record;

/// Destination for accepted records.
pub trait RecordSink {
    /// Write one record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be rendered or written.
    fn emit(&mut self, record: &Record) -> Result<()>;
}

/// Quote a value as an SQL string literal, doubling embedded quotes.
#[must_use]
pub fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Render `record` as a single-row insert statement, without the trailing
/// newline.
#[must_use]
pub fn render_insert(record: &Record, height_style: HeightStyle) -> String {
    let height = match (&record.height, height_style) {
        (Some(height), _) => sql_literal(height),
        (None, HeightStyle::Null) => "NULL".to_string(),
        (None, HeightStyle::LegacyNone) => sql_literal("None"),
    };
    format!(
        "INSERT INTO medalists(place, athlete, height, year) VALUES ({}, {}, {}, {});",
        sql_literal(&record.place),
        sql_literal(&record.athlete),
        height,
        sql_literal(&record.year),
    )
}

/// Render `record` in the requested format, without the trailing newline.
///
/// # Errors
///
/// Returns [`Error::Serialize`] if JSON serialisation fails.
pub fn render(record: &Record, format: OutputFormat, height_style: HeightStyle) -> Result<String> {
    match format {
        OutputFormat::Sql => Ok(render_insert(record, height_style)),
        OutputFormat::JsonLines => Ok(serde_json::to_string(record)?),
    }
}

/// Appends records to a file, creating it on first write.
#[derive(Debug, Clone)]
pub struct FileEmitter {
    path: PathBuf,
    format: OutputFormat,
    height_style: HeightStyle,
}

impl FileEmitter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, format: OutputFormat, height_style: HeightStyle) -> Self {
        Self {
            path: path.into(),
            format,
            height_style,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for FileEmitter {
    fn emit(&mut self, record: &Record) -> Result<()> {
        let mut line = render(record, self.format, self.height_style)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io(&self.path, e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| Error::io(&self.path, e))
    }
}

/// Keeps rendered lines in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    format: OutputFormat,
    height_style: HeightStyle,
    lines: Vec<String>,
}

impl MemorySink {
    #[must_use]
    pub fn new(format: OutputFormat, height_style: HeightStyle) -> Self {
        Self {
            format,
            height_style,
            lines: Vec::new(),
        }
    }

    /// Rendered lines, without newlines, in emission order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl RecordSink for MemorySink {
    fn emit(&mut self, record: &Record) -> Result<()> {
        self.lines
            .push(render(record, self.format, self.height_style)?);
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn emit(&mut self, record: &Record) -> Result<()> {
        (**self).emit(record)
    }
}
