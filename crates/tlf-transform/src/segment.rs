//! Splits the export row stream into per-output groups.

use tlf_model::{AttributeRow, OutputGroup, Result, TlfError};
use tracing::debug;

/// Walk rows in order, opening a new group at every `outfile` marker row.
/// Rows before the first marker belong to no output and are dropped.
/// Fails when the export contains no marker at all, since nothing could be
/// grouped.
pub fn segment(rows: Vec<AttributeRow>) -> Result<Vec<OutputGroup>> {
    let mut groups: Vec<OutputGroup> = Vec::new();
    let mut dropped = 0usize;
    for row in rows {
        if row.is_sequence_marker() {
            let sequence = groups.len() as u32 + 1;
            groups.push(OutputGroup {
                sequence,
                rows: vec![row],
            });
        } else if let Some(group) = groups.last_mut() {
            group.rows.push(row);
        } else {
            dropped += 1;
        }
    }
    if groups.is_empty() {
        return Err(TlfError::MissingSequenceMarker);
    }
    if dropped > 0 {
        debug!(rows = dropped, "dropped rows before the first outfile marker");
    }
    Ok(groups)
}
