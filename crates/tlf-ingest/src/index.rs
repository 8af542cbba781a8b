//! Reader for previously written index sheets.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use tlf_model::{ArtifactType, AttributeKey, OutputRecord, TlfError};

/// Columns the downstream writers cannot work without. The remaining index
/// columns are optional so that hand-edited sheets still load.
const REQUIRED_COLUMNS: [&str; 6] = [
    "sect_num",
    "sect_ttl",
    "OUTFILE",
    "Output Type (Table, Listing, Figure)",
    "tocnumber",
    "Title",
];

#[derive(Debug)]
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

    fn cell<'r>(&self, record: &'r StringRecord, name: &str) -> &'r str {
        self.positions
            .get(name)
            .and_then(|&index| record.get(index))
            .unwrap_or("")
    }

    fn optional(&self, record: &StringRecord, name: &str) -> Option<String> {
        let value = self.cell(record, name);
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| !self.positions.contains_key(*name))
            .collect()
    }
}

/// Read an index sheet back into records. Column names are matched exactly
/// (after BOM/whitespace stripping) because the sheet is produced by this
/// toolchain; a missing required column is a fatal error naming every
/// absent header.
pub fn read_index(path: &Path) -> Result<Vec<OutputRecord>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read index csv: {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read index headers: {}", path.display()))?
        .clone();
    let columns = ColumnMap::new(&headers);
    let missing = columns.missing_required();
    if !missing.is_empty() {
        return Err(TlfError::MissingColumn(missing.join(", ")).into());
    }
    let mut records = Vec::new();
    for (position, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let mut output = OutputRecord::new(
            (position + 1) as u32,
            columns.cell(&record, "sect_num"),
            columns.cell(&record, "sect_ttl"),
            columns.cell(&record, "PROGRAM"),
            columns.cell(&record, "SUFFIX"),
        );
        output.outfile = columns.optional(&record, "OUTFILE");
        output.toc_number = columns.optional(&record, "tocnumber");
        output.out_type = columns.optional(&record, "outtype");
        output.az_solid = columns.optional(&record, "azsolid");
        output.title1 = columns.optional(&record, "title1");
        output.title2 = columns.optional(&record, "title2");
        output.title4 = columns.optional(&record, "title4");
        output.title5 = columns.optional(&record, "title5");
        output.title6 = columns.optional(&record, "title6");
        output.title7 = columns.optional(&record, "title7");
        for n in 1..=9u8 {
            let name = AttributeKey::Footnote(n).as_str();
            output.footnotes[usize::from(n - 1)] = columns.optional(&record, name);
        }
        output.artifact_type =
            ArtifactType::from_str(columns.cell(&record, "Output Type (Table, Listing, Figure)"))
                .ok();
        output.title = columns.cell(&record, "Title").to_string();
        records.push(output);
    }
    debug!(path = %path.display(), records = records.len(), "loaded index sheet");
    Ok(records)
}
