//! CSV writers for filled and updated roster sheets.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::{FilledRosterRow, QC_STATUS_COLUMN, RosterEntry};

/// Header order of the filled roster sheet. `Match Source` replaces the
/// cell highlighting the spreadsheet version used for tier review.
pub const FILLED_ROSTER_COLUMNS: [&str; 13] = [
    "Section #",
    "Section Title",
    "Output Type (Table, Listing, Figure)",
    "Output #",
    "Title",
    "Standard Template Reference",
    "Program Name",
    "Output Name",
    "Programmer",
    "QC Program",
    "QC Programmer",
    QC_STATUS_COLUMN,
    "Match Source",
];

const ROSTER_COLUMNS: [&str; 6] = [
    "Output Name",
    "Program Name",
    "Programmer",
    "QC Program",
    "QC Programmer",
    QC_STATUS_COLUMN,
];

/// Write the roster sheet rebuilt from index records. The QC status column
/// is intentionally blank: status arrives later from the comparison tool.
pub fn write_filled_roster(path: &Path, rows: &[FilledRosterRow]) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("write roster: {}", path.display()))?;
    writer.write_record(FILLED_ROSTER_COLUMNS)?;
    for row in rows {
        writer.write_record([
            row.section_number.as_str(),
            row.section_title.as_str(),
            row.output_type.as_str(),
            row.output_number.as_str(),
            row.title.as_str(),
            row.template_reference.as_str(),
            row.program_name.as_str(),
            row.output_name.as_str(),
            row.programmer.as_deref().unwrap_or(""),
            row.qc_program.as_deref().unwrap_or(""),
            row.qc_programmer.as_deref().unwrap_or(""),
            "",
            row.tier.as_str(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("flush roster: {}", path.display()))?;
    Ok(())
}

/// Write roster entries back out, typically after a status merge.
pub fn write_roster(path: &Path, entries: &[RosterEntry]) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("write roster: {}", path.display()))?;
    writer.write_record(ROSTER_COLUMNS)?;
    for entry in entries {
        writer.write_record([
            entry.output_name.as_deref().unwrap_or(""),
            entry.program_name.as_deref().unwrap_or(""),
            entry.programmer.as_deref().unwrap_or(""),
            entry.qc_program.as_deref().unwrap_or(""),
            entry.qc_programmer.as_deref().unwrap_or(""),
            entry.qc_status.as_deref().unwrap_or(""),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("flush roster: {}", path.display()))?;
    Ok(())
}
