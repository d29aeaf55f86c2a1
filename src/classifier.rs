//! Row classification for finals tables.
//!
//! Medal rows carry a badge image ("Gold medalist") in place of a rank;
//! finalist rows carry the rank as plain cell text. Everything else in the
//! table (headers, separators, footnotes) is discarded.

use dom_query::{NodeRef, Selection};
use tracing::debug;

use crate::dom::{body_rows, first_grandchild_text, own_cell_texts};
use crate::locator::medal_badge;
use crate::Record;

/// Turns table rows into [`Record`]s.
#[derive(Debug, Clone)]
pub struct RowClassifier {
    badge_marker: String,
}

impl RowClassifier {
    #[must_use]
    pub fn new(badge_marker: impl Into<String>) -> Self {
        Self {
            badge_marker: badge_marker.into(),
        }
    }

    /// Classify every direct body row of `table`, keeping accepted rows in
    /// table order.
    #[must_use]
    pub fn classify_table(&self, table: &Selection, year: &str) -> Vec<Record> {
        table
            .nodes()
            .first()
            .map(|table| {
                body_rows(table)
                    .iter()
                    .filter_map(|row| self.classify(row, year))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Classify one row, or `None` to discard it.
    ///
    /// A medal row is always kept; when its athlete has no link the first
    /// plain cell text stands in (empty if there is none). A finalist row
    /// needs both a trusted rank and a linked athlete.
    #[must_use]
    pub fn classify(&self, row: &NodeRef, year: &str) -> Option<Record> {
        let linked = first_grandchild_text(row, "td", "a");

        let (place, athlete) = match (medal_place(row, &self.badge_marker), linked) {
            (Some(medal), Some(athlete)) => (medal, athlete),
            (Some(medal), None) => {
                let athlete = own_cell_texts(row, "td").into_iter().next().unwrap_or_default();
                debug!(place = %medal, athlete = %athlete, "medal row without athlete link");
                (medal, athlete)
            }
            (None, Some(athlete)) => (rank_place(row)?, athlete),
            (None, None) => return None,
        };

        Some(Record {
            place,
            athlete,
            height: first_grandchild_text(row, "td", "b"),
            year: year.to_string(),
        })
    }
}

impl Default for RowClassifier {
    fn default() -> Self {
        Self::new(crate::options::DEFAULT_BADGE_MARKER)
    }
}

/// First token of the badge text: "Gold medalist" gives "Gold".
fn medal_place(row: &NodeRef, marker: &str) -> Option<String> {
    medal_badge(row, marker).and_then(|alt| alt.split_whitespace().next().map(str::to_string))
}

/// Rank of a finalist row. Only rows with exactly two plain-text cells
/// (rank plus one filler such as a qualification mark) are trusted.
fn rank_place(row: &NodeRef) -> Option<String> {
    let texts = own_cell_texts(row, "td");
    match <[String; 2]>::try_from(texts) {
        Ok([rank, _]) => Some(rank),
        Err(texts) => {
            if !texts.is_empty() {
                debug!(cells = texts.len(), "row placement skipped: unexpected plain-text cell count");
            }
            None
        }
    }
}
