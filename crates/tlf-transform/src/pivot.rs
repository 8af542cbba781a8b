//! Long-to-wide fold of attribute groups into records.

use tlf_model::{AttributeKey, OutputGroup, OutputRecord};

/// Collapse one group into a record. Identity fields are seeded from the
/// group's marker row; recognized attributes assign last-write-wins, with
/// empty values clearing the slot. Rows with blank or unrecognized names
/// are dropped.
pub fn pivot(group: &OutputGroup) -> OutputRecord {
    let mut record = match group.rows.first() {
        Some(first) => OutputRecord::new(
            group.sequence,
            first.section_number.clone(),
            first.section_title.clone(),
            first.program.clone(),
            first.suffix.clone(),
        ),
        None => OutputRecord::new(group.sequence, "", "", "", ""),
    };
    for row in &group.rows {
        if let Some(key) = AttributeKey::parse(&row.name) {
            record.set_attribute(key, &row.value);
        }
    }
    record
}

/// Pivot every group, preserving group order.
pub fn pivot_all(groups: &[OutputGroup]) -> Vec<OutputRecord> {
    groups.iter().map(pivot).collect()
}
