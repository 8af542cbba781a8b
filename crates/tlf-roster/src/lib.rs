//! Programmer roster merge and QC status tracking.
//!
//! The roster (the "people" sheet) assigns a programmer, a QC program, and
//! a QC programmer to each published output. This crate fills a roster
//! sheet from index records, and merges QC comparison results back into an
//! existing roster.

pub mod assign;
pub mod read;
pub mod status;
pub mod write;

use serde::{Deserialize, Serialize};

pub use assign::{AssignmentStats, FilledRosterRow, MatchTier, fill_roster};
pub use read::{read_roster, read_status};
pub use status::{StatusStats, apply_status, map_comparison_status};
pub use write::{FILLED_ROSTER_COLUMNS, write_filled_roster, write_roster};

/// Full header of the hand-maintained QC status column.
pub const QC_STATUS_COLUMN: &str = "QC Status (Not Started, Ongoing, QC Pending, Fail, Pass)";

/// One row of the programmer roster. Every field is optional because the
/// sheet is maintained by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub output_name: Option<String>,
    pub program_name: Option<String>,
    pub programmer: Option<String>,
    pub qc_program: Option<String>,
    pub qc_programmer: Option<String>,
    pub qc_status: Option<String>,
}

/// One row of the QC comparison export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub dataset: String,
    pub comparison_status: String,
}
