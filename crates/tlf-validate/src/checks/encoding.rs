//! Target-encoding scan across projected index fields.

use tlf_model::{Finding, OutputRecord, Severity};
use tlf_transform::encoding::{EncodingProfile, incompatible_positions};

/// One finding per field whose value cannot be represented in the target
/// encoding, naming the zero-based character positions so the offending
/// characters can be located in wide cells.
pub fn check(records: &[OutputRecord], profile: EncodingProfile) -> Vec<Finding> {
    let mut findings = Vec::new();
    for record in records {
        for (field, value) in record.index_fields() {
            let positions = incompatible_positions(&value, profile);
            if positions.is_empty() {
                continue;
            }
            let rendered: Vec<String> = positions.iter().map(|pos| pos.to_string()).collect();
            findings.push(Finding {
                code: "TLF_ENCODING".to_string(),
                message: format!(
                    "value not representable in {} at character position(s) {}",
                    profile,
                    rendered.join(", ")
                ),
                severity: Severity::Warning,
                toc_number: record.toc_number.clone(),
                field: Some(field.to_string()),
                count: Some(positions.len() as u64),
            });
        }
    }
    findings
}
