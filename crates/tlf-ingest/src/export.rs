//! Reader for the flat rendering-pipeline export.

use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use tlf_model::{AttributeRow, TlfError};

/// Positions of the required export columns, resolved case-insensitively.
#[derive(Debug, Clone, Copy)]
struct ExportColumns {
    section_number: usize,
    section_title: usize,
    program: usize,
    suffix: usize,
    name: usize,
    value: usize,
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_ascii_lowercase()
}

fn position(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| names.contains(&normalize_header(header).as_str()))
}

fn resolve_columns(headers: &StringRecord) -> Result<ExportColumns, TlfError> {
    const REQUIRED: [(&str, &[&str]); 6] = [
        ("sect_num", &["sect_num"]),
        ("sect_ttl", &["sect_ttl"]),
        ("program", &["program"]),
        ("suffix", &["suffix"]),
        ("parm/param", &["parm", "param"]),
        ("value", &["value"]),
    ];
    let mut found = [0usize; 6];
    let mut missing = Vec::new();
    for (slot, (label, names)) in found.iter_mut().zip(REQUIRED) {
        match position(headers, names) {
            Some(index) => *slot = index,
            None => missing.push(label),
        }
    }
    if !missing.is_empty() {
        return Err(TlfError::MissingColumn(missing.join(", ")));
    }
    Ok(ExportColumns {
        section_number: found[0],
        section_title: found[1],
        program: found[2],
        suffix: found[3],
        name: found[4],
        value: found[5],
    })
}

fn cell(record: &StringRecord, index: usize) -> String {
    record.get(index).unwrap_or("").to_string()
}

/// Read an export CSV into attribute rows. Headers are matched
/// case-insensitively (with `param` accepted as an alias for `parm`) and
/// stripped of a leading BOM; cell values are kept verbatim because
/// trailing whitespace and quoting are significant to later stages.
pub fn read_export(path: &Path) -> Result<Vec<AttributeRow>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read export csv: {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read export headers: {}", path.display()))?
        .clone();
    let columns = resolve_columns(&headers)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        rows.push(AttributeRow {
            section_number: cell(&record, columns.section_number),
            section_title: cell(&record, columns.section_title),
            program: cell(&record, columns.program),
            suffix: cell(&record, columns.suffix),
            name: cell(&record, columns.name),
            value: cell(&record, columns.value),
        });
    }
    debug!(path = %path.display(), rows = rows.len(), "loaded export");
    Ok(rows)
}
