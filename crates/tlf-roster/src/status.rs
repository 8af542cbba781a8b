//! QC comparison status merge.

use std::collections::BTreeMap;

use crate::{RosterEntry, StatusEntry};

/// Normalize a comparison outcome to the roster vocabulary: `Match` becomes
/// `Pass`, `Mismatch` becomes `Fail`, anything else passes through verbatim
/// (the comparison tool also emits states like `Pending`).
pub fn map_comparison_status(raw: &str) -> String {
    match raw {
        "Match" => "Pass".to_string(),
        "Mismatch" => "Fail".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusStats {
    pub total: usize,
    pub matched: usize,
    pub pass: usize,
    pub fail: usize,
    pub blank: usize,
}

/// Merge comparison results into the roster by output name. A later status
/// row for the same dataset replaces an earlier one, and roster rows with
/// no matching dataset get their QC status cleared rather than left stale.
pub fn apply_status(roster: &mut [RosterEntry], statuses: &[StatusEntry]) -> StatusStats {
    let mut lookup: BTreeMap<&str, String> = BTreeMap::new();
    for entry in statuses {
        if entry.dataset.is_empty() {
            continue;
        }
        lookup.insert(
            entry.dataset.as_str(),
            map_comparison_status(&entry.comparison_status),
        );
    }

    let mut stats = StatusStats {
        total: roster.len(),
        ..StatusStats::default()
    };
    for row in roster.iter_mut() {
        let status = row
            .output_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .and_then(|name| lookup.get(name));
        match status {
            Some(status) => {
                row.qc_status = Some(status.clone());
                stats.matched += 1;
            }
            None => row.qc_status = None,
        }
    }
    for row in roster.iter() {
        match row.qc_status.as_deref() {
            Some("Pass") => stats.pass += 1,
            Some("Fail") => stats.fail += 1,
            Some(_) => {}
            None => stats.blank += 1,
        }
    }
    stats
}
