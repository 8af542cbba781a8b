//! End-to-end checks over assembled records plus the JSON report file.

use tlf_model::{OutputRecord, Severity, TlfError};
use tlf_transform::EncodingProfile;
use tlf_validate::{check_records, write_findings_json};

fn record(toc: &str, program: &str, suffix: &str) -> OutputRecord {
    let mut record = OutputRecord::new(1, "14.1", "Demographics", program, suffix);
    if !toc.is_empty() {
        record.toc_number = Some(toc.to_string());
    }
    record
}

#[test]
fn clean_records_yield_an_empty_report() {
    let records = vec![record("14.1.1", "t_demog", "a"), record("14.1.2", "t_vitals", "a")];
    let report = check_records(&records, EncodingProfile::Latin1).unwrap();
    assert!(report.is_empty());
    assert!(!report.has_errors());
}

#[test]
fn duplicate_toc_numbers_abort_before_findings() {
    let records = vec![record("14.1.1", "t_demog", "a"), record("14.1.1", "t_demog", "a")];
    let err = check_records(&records, EncodingProfile::Latin1).unwrap_err();
    assert!(matches!(err, TlfError::DuplicateIdentifier { .. }));
}

#[test]
fn ownership_and_encoding_findings_accumulate() {
    let mut first = record("14.1.1", "t_demog", "a");
    first.title = "Median change \u{2013} full analysis set".to_string();
    let second = record("14.1.2", "t_demog", "a");

    let report = check_records(&[first, second], EncodingProfile::Ascii).unwrap();
    assert_eq!(report.error_count(), 2);
    assert!(report.warning_count() >= 1);
    assert!(report.has_errors());
    let codes: Vec<&str> = report.findings.iter().map(|f| f.code.as_str()).collect();
    assert!(codes.contains(&"TLF_OWNERSHIP_DUP"));
    assert!(codes.contains(&"TLF_ENCODING"));
}

#[test]
fn findings_json_carries_schema_and_counts() {
    let records = vec![record("14.1.1", "t_demog", "a"), record("14.1.2", "t_demog", "a")];
    let report = check_records(&records, EncodingProfile::Latin1).unwrap();
    assert_eq!(report.error_count(), 2);

    let dir = tempfile::tempdir().unwrap();
    let path = write_findings_json(dir.path(), "export.csv", records.len(), &report).unwrap();
    assert_eq!(path.file_name().unwrap(), "findings.json");

    let raw = std::fs::read_to_string(&path).unwrap();
    let payload: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(payload["schema"], "tlf-index.findings-report");
    assert_eq!(payload["schema_version"], 1);
    assert_eq!(payload["source"], "export.csv");
    assert_eq!(payload["record_count"], 2);
    assert_eq!(payload["error_count"], 2);
    assert_eq!(payload["findings"].as_array().unwrap().len(), 2);
    assert_eq!(payload["findings"][0]["severity"], "error");
}

#[test]
fn severity_serialization_is_lowercase() {
    assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
}
