//! Program/suffix ownership duplicates.

use std::collections::BTreeMap;

use tlf_model::{Finding, OutputRecord, Severity};

/// Two records sharing a program+suffix pair usually mean a copy-paste slip
/// in the export. Every record in a shared pair is flagged so the review
/// sheet can mark them all; the fully empty pair is exempt because unowned
/// records are legitimate.
pub fn check(records: &[OutputRecord]) -> Vec<Finding> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(record.ownership_key()).or_insert(0) += 1;
    }
    let mut findings = Vec::new();
    for record in records {
        let key = record.ownership_key();
        if key == "||" {
            continue;
        }
        let count = counts.get(&key).copied().unwrap_or(0);
        if count > 1 {
            findings.push(Finding {
                code: "TLF_OWNERSHIP_DUP".to_string(),
                message: format!("program/suffix pair '{key}' appears on {count} records"),
                severity: Severity::Error,
                toc_number: record.toc_number.clone(),
                field: None,
                count: Some(count),
            });
        }
    }
    findings
}
