//! Toc number uniqueness.

use std::collections::BTreeMap;

use tlf_model::{OutputRecord, Result, TlfError};

/// Every record that carries a toc number must carry a distinct one, since
/// the published index is keyed by it. Duplicates abort the run; records
/// without a toc number are excluded, but whitespace-only values
/// participate and collide after trimming.
pub fn check(records: &[OutputRecord]) -> Result<()> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        if let Some(toc) = record.toc_number.as_deref() {
            *counts.entry(toc.trim().to_string()).or_insert(0) += 1;
        }
    }
    let duplicates: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(value, _)| value)
        .collect();
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(TlfError::DuplicateIdentifier { duplicates })
    }
}
