//! CSV readers for the roster and the QC comparison export.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use tlf_model::TlfError;

use crate::{QC_STATUS_COLUMN, RosterEntry, StatusEntry};

struct ColumnMap {
    positions: BTreeMap<String, usize>,
}

impl ColumnMap {
    fn new(headers: &StringRecord) -> Self {
        let mut positions = BTreeMap::new();
        for (index, header) in headers.iter().enumerate() {
            let name = header.trim().trim_matches('\u{feff}').to_string();
            positions.entry(name).or_insert(index);
        }
        ColumnMap { positions }
    }

    fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    fn optional(&self, record: &StringRecord, name: &str) -> Option<String> {
        let value = self
            .positions
            .get(name)
            .and_then(|&index| record.get(index))
            .unwrap_or("");
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Read the roster sheet. Only `Output Name` is required; the people and
/// status columns are optional because the sheet is maintained by hand.
pub fn read_roster(path: &Path) -> Result<Vec<RosterEntry>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read roster csv: {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read roster headers: {}", path.display()))?
        .clone();
    let columns = ColumnMap::new(&headers);
    if !columns.contains("Output Name") {
        return Err(TlfError::MissingColumn("Output Name".to_string()).into());
    }
    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        entries.push(RosterEntry {
            output_name: columns.optional(&record, "Output Name"),
            program_name: columns.optional(&record, "Program Name"),
            programmer: columns.optional(&record, "Programmer"),
            qc_program: columns.optional(&record, "QC Program"),
            qc_programmer: columns.optional(&record, "QC Programmer"),
            qc_status: columns.optional(&record, QC_STATUS_COLUMN),
        });
    }
    debug!(path = %path.display(), entries = entries.len(), "loaded roster");
    Ok(entries)
}

/// Read the QC comparison export. `Dataset` and `Comparison Status` are
/// both required.
pub fn read_status(path: &Path) -> Result<Vec<StatusEntry>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read status csv: {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read status headers: {}", path.display()))?
        .clone();
    let columns = ColumnMap::new(&headers);
    let missing: Vec<&str> = ["Dataset", "Comparison Status"]
        .into_iter()
        .filter(|name| !columns.contains(name))
        .collect();
    if !missing.is_empty() {
        return Err(TlfError::MissingColumn(missing.join(", ")).into());
    }
    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        entries.push(StatusEntry {
            dataset: columns.optional(&record, "Dataset").unwrap_or_default(),
            comparison_status: columns
                .optional(&record, "Comparison Status")
                .unwrap_or_default(),
        });
    }
    debug!(path = %path.display(), entries = entries.len(), "loaded status export");
    Ok(entries)
}
