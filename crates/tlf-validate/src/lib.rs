//! Integrity checks and the findings report for TLF index records.

pub mod checks;

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use tlf_model::{Finding, FindingsReport, OutputRecord};
use tlf_transform::EncodingProfile;

/// Run every record-level check. Toc uniqueness aborts on failure; the
/// remaining checks accumulate findings without stopping the run.
pub fn check_records(
    records: &[OutputRecord],
    profile: EncodingProfile,
) -> tlf_model::Result<FindingsReport> {
    checks::identifier::check(records)?;
    let mut report = FindingsReport::default();
    report.extend(checks::ownership::check(records));
    report.extend(checks::encoding::check(records, profile));
    Ok(report)
}

#[derive(Debug, Serialize)]
pub struct FindingsReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source: String,
    pub record_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub findings: Vec<Finding>,
}

const REPORT_SCHEMA: &str = "tlf-index.findings-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Write the findings report as pretty-printed JSON under `output_dir` and
/// return the path written.
pub fn write_findings_json(
    output_dir: &Path,
    source: &str,
    record_count: usize,
    report: &FindingsReport,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("findings.json");
    let payload = FindingsReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        source: source.to_string(),
        record_count,
        error_count: report.error_count(),
        warning_count: report.warning_count(),
        findings: report.findings.clone(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
