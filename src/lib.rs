//! # medalist-extract
//!
//! Extracts medalist records from locally stored Wikipedia pages of
//! athletics competitions and writes them out as SQL inserts.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use medalist_extract::{Options, Pipeline};
//!
//! let summary = Pipeline::new(Options::new("html", "medalists.sql")).run()?;
//! println!("{} records from {} pages", summary.records, summary.documents);
//! # Ok::<(), medalist_extract::Error>(())
//! ```
//!
//! ## How a page is read
//!
//! - **Finals table**: the first `<table>` with at least 12 direct body rows
//!   and a medal badge image (`alt` containing "medalist").
//! - **Medal rows**: place is the first word of the badge ("Gold").
//! - **Finalist rows**: place is the rank cell, trusted only when the row has
//!   exactly two plain-text cells.
//! - **Athlete / height**: first cell link text, first cell bold text.
//! - **Year**: first four-digit year in the page title.

mod document;
mod error;
mod options;
mod pipeline;
mod record;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Directory-backed document source.
pub mod loader;

/// Finals table lookup.
pub mod locator;

/// Row classification.
pub mod classifier;

/// SQL / JSON rendering and output sinks.
pub mod emitter;

// Public API - re-exports
pub use classifier::RowClassifier;
pub use document::Document;
pub use emitter::{FileEmitter, MemorySink, RecordSink};
pub use error::{Error, Result};
pub use loader::DocumentLoader;
pub use locator::ResultsTableLocator;
pub use options::{
    HeightStyle, Options, OutputFormat, DEFAULT_BADGE_MARKER, DEFAULT_MIN_TABLE_ROWS,
    DEFAULT_OUTPUT,
};
pub use pipeline::{extract_page, Pipeline, RunSummary};
pub use record::Record;
