//! The output unit of an extraction run.

use serde::Serialize;

/// One placement in a finals table, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Medal name ("Gold", "Silver", "Bronze") or finishing position ("5").
    pub place: String,

    /// Athlete name as linked in the results table.
    pub athlete: String,

    /// Best cleared height, e.g. "2.22". `None` when no valid jump is recorded.
    pub height: Option<String>,

    /// Competition year taken from the page title.
    pub year: String,
}
