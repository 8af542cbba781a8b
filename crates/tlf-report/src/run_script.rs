//! SAS run-script generation from index records.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use tlf_model::OutputRecord;

use crate::common::ensure_parent;

/// Per-program usage summary, collected in first-appearance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramUsage {
    pub program: String,
    /// Distinct toc numbers owned by the program, sorted. Records whose toc
    /// slot is empty contribute nothing here but still register the program.
    pub toc_numbers: Vec<String>,
}

impl ProgramUsage {
    pub fn output_count(&self) -> usize {
        self.toc_numbers.len()
    }
}

/// Collect the distinct programs of an index sheet in first-appearance
/// order. Blank program names are skipped; toc numbers are deduplicated by
/// exact value.
pub fn collect_program_usage(records: &[OutputRecord]) -> Vec<ProgramUsage> {
    let mut order: Vec<String> = Vec::new();
    let mut tocs: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for record in records {
        if record.program.is_empty() {
            continue;
        }
        if !tocs.contains_key(&record.program) {
            order.push(record.program.clone());
        }
        let owned = tocs.entry(record.program.clone()).or_default();
        if let Some(toc) = &record.toc_number {
            owned.insert(toc.clone());
        }
    }
    order
        .into_iter()
        .map(|program| {
            let toc_numbers = tocs
                .remove(&program)
                .unwrap_or_default()
                .into_iter()
                .collect();
            ProgramUsage {
                program,
                toc_numbers,
            }
        })
        .collect()
}

/// Render the execution script: a statistics block, then one `%runpgm`
/// call per program.
pub fn generate_run_script(usage: &[ProgramUsage]) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("/* Generated SAS Program Execution Script */".to_string());
    lines.push("/* Programs ordered by first appearance in the index sheet */".to_string());
    lines.push(String::new());
    lines.push("/* Program Statistics: */".to_string());
    for entry in usage {
        lines.push(format!(
            "/*   {}: {} table(s) */",
            entry.program,
            entry.output_count()
        ));
    }
    lines.push(String::new());
    lines.push("/* ====== Program Execution Commands ====== */".to_string());
    lines.push(String::new());
    for entry in usage {
        lines.push(format!("%runpgm(pgm={}, error_override=y);", entry.program));
    }
    let mut script = lines.join("\n");
    script.push('\n');
    script
}

/// Write the run script for an index sheet.
pub fn write_run_script(output_path: &Path, records: &[OutputRecord]) -> Result<Vec<ProgramUsage>> {
    let usage = collect_program_usage(records);
    ensure_parent(output_path)?;
    fs::write(output_path, generate_run_script(&usage))
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(usage)
}
