//! Finals table lookup.
//!
//! A results page carries many tables: infoboxes, records summaries,
//! qualification groups, navigation boxes. The finals table is the first one
//! that is both long enough and carries at least one medal badge.

use dom_query::{NodeRef, Selection};

use crate::dom::{self, body_rows};
use crate::Document;

/// Selects the finals table of a document.
#[derive(Debug, Clone)]
pub struct ResultsTableLocator {
    min_rows: usize,
    badge_marker: String,
}

impl ResultsTableLocator {
    #[must_use]
    pub fn new(min_rows: usize, badge_marker: impl Into<String>) -> Self {
        Self {
            min_rows,
            badge_marker: badge_marker.into(),
        }
    }

    /// The badge substring this locator looks for.
    #[must_use]
    pub fn badge_marker(&self) -> &str {
        &self.badge_marker
    }

    /// First table, in document order, with at least `min_rows` direct body
    /// rows and a medal badge in one of those rows.
    ///
    /// `None` means the page has no finals table in the expected shape. Later
    /// qualifying tables are never considered once one matches.
    #[must_use]
    pub fn locate<'a>(&self, document: &'a Document) -> Option<Selection<'a>> {
        document
            .dom()
            .select("table")
            .nodes()
            .iter()
            .find(|table| self.is_finals_table(table))
            .map(|table| Selection::from(*table))
    }

    fn is_finals_table(&self, table: &NodeRef) -> bool {
        let rows = body_rows(table);
        rows.len() >= self.min_rows
            && rows
                .iter()
                .any(|row| medal_badge(row, &self.badge_marker).is_some())
    }
}

impl Default for ResultsTableLocator {
    fn default() -> Self {
        Self::new(
            crate::options::DEFAULT_MIN_TABLE_ROWS,
            crate::options::DEFAULT_BADGE_MARKER,
        )
    }
}

/// `alt` text of the first image in `row` whose `alt` contains `marker`.
#[must_use]
pub fn medal_badge(row: &NodeRef, marker: &str) -> Option<String> {
    Selection::from(*row)
        .select("img[alt]")
        .nodes()
        .iter()
        .filter_map(|img| img.attr("alt"))
        .map(|alt| dom::clean_text(&alt))
        .find(|alt| alt.contains(marker))
}
