//! Configuration options for an extraction run.
//!
//! The `Options` struct is the single explicit configuration value handed to
//! [`Pipeline::new`](crate::Pipeline::new). Nothing is discovered from the
//! working directory.

use std::path::PathBuf;

/// Default minimum number of body rows a finals table must have.
pub const DEFAULT_MIN_TABLE_ROWS: usize = 12;

/// Default substring of an `<img alt>` that marks a medal row.
pub const DEFAULT_BADGE_MARKER: &str = "medalist";

/// Default output artifact name.
pub const DEFAULT_OUTPUT: &str = "medalists.sql";

/// How an absent jump height is rendered in SQL output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeightStyle {
    /// Unquoted SQL `NULL`.
    #[default]
    Null,
    /// The quoted literal `'None'`, matching output of earlier runs.
    LegacyNone,
}

/// Serialisation used for each emitted record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `INSERT INTO medalists(...)` statement per line.
    #[default]
    Sql,
    /// One JSON object per line.
    JsonLines,
}

/// Configuration options for an extraction run.
///
/// All fields are public for easy configuration. Use `Options::new` or
/// `Default::default()` for standard settings.
///
/// # Example
///
/// ```rust
/// use medalist_extract::{HeightStyle, Options};
///
/// let options = Options {
///     height_style: HeightStyle::LegacyNone,
///     ..Options::new("html", "out.sql")
/// };
/// assert_eq!(options.min_table_rows, 12);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Directory holding the stored HTML pages.
    ///
    /// Default: `.`
    pub input_dir: PathBuf,

    /// Output artifact records are appended to.
    ///
    /// Default: `medalists.sql`
    pub output_path: PathBuf,

    /// Tables with fewer direct body rows than this are never finals tables.
    ///
    /// Keeps infobox and summary tables out while full finals tables
    /// (8 finalists plus qualifying rows) pass.
    ///
    /// Default: `12`
    pub min_table_rows: usize,

    /// Substring of an image `alt` text that marks a medal badge.
    ///
    /// Default: `"medalist"`
    pub badge_marker: String,

    /// Rendering of a missing height in SQL output.
    ///
    /// Default: [`HeightStyle::Null`]
    pub height_style: HeightStyle,

    /// Output serialisation.
    ///
    /// Default: [`OutputFormat::Sql`]
    pub format: OutputFormat,
}

impl Options {
    /// Creates options for the given input directory and output artifact,
    /// with every other field at its default.
    #[must_use]
    pub fn new(input_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            min_table_rows: DEFAULT_MIN_TABLE_ROWS,
            badge_marker: DEFAULT_BADGE_MARKER.to_string(),
            height_style: HeightStyle::default(),
            format: OutputFormat::default(),
        }
    }
}
