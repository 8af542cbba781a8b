//! CSV writers for the index sheet and the normalized export copy.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use tlf_model::{AttributeRow, INDEX_COLUMNS, OutputRecord};

use crate::common::ensure_parent;

/// Header row of the normalized export copy. The attribute-name column is
/// spelled `parm` whichever alias the source file used.
pub const EXPORT_COLUMNS: [&str; 6] = ["sect_num", "sect_ttl", "program", "suffix", "parm", "value"];

/// Write the fixed-column index sheet. Records are emitted in the order
/// given; callers run the sort engine first.
pub fn write_index_csv(output_path: &Path, records: &[OutputRecord]) -> Result<()> {
    ensure_parent(output_path)?;
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("create {}", output_path.display()))?;
    writer
        .write_record(INDEX_COLUMNS)
        .context("write index header")?;
    for record in records {
        writer
            .write_record(record.index_values())
            .with_context(|| format!("write index row for sequence {}", record.sequence))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", output_path.display()))?;
    debug!(rows = records.len(), path = %output_path.display(), "wrote index sheet");
    Ok(())
}

/// Re-emit the raw export after quote normalization. Cell values are kept
/// verbatim; only the header is canonicalized.
pub fn write_normalized_export(output_path: &Path, rows: &[AttributeRow]) -> Result<()> {
    ensure_parent(output_path)?;
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("create {}", output_path.display()))?;
    writer
        .write_record(EXPORT_COLUMNS)
        .context("write export header")?;
    for row in rows {
        writer
            .write_record([
                row.section_number.as_str(),
                row.section_title.as_str(),
                row.program.as_str(),
                row.suffix.as_str(),
                row.name.as_str(),
                row.value.as_str(),
            ])
            .context("write export row")?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", output_path.display()))?;
    debug!(rows = rows.len(), path = %output_path.display(), "wrote normalized export");
    Ok(())
}
