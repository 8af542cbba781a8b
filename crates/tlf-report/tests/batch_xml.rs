//! Integration tests for the batch list manifest.

use tlf_model::{ArtifactType, AttributeKey, OutputRecord, Severity};
use tlf_report::{BatchXmlOptions, check_manifest_encoding, render_batch_xml, write_batch_xml};
use tlf_transform::EncodingProfile;

fn record(sequence: u32, sect_num: &str, sect_ttl: &str, toc: &str, title: &str) -> OutputRecord {
    let mut record = OutputRecord::new(sequence, sect_num, sect_ttl, "t_prog", "a");
    record.artifact_type = Some(ArtifactType::Table);
    record.title = title.to_string();
    record.set_attribute(AttributeKey::TocNumber, toc);
    record.set_attribute(AttributeKey::Outfile, &format!("out{sequence}"));
    record
}

fn options() -> BatchXmlOptions {
    BatchXmlOptions::new(
        "CSR Appendix 14.2",
        "root/cdar/d980/ar/dr2/tlf/dev/output/",
        "csr_batch",
    )
}

#[test]
fn manifest_carries_the_fixed_ruleset_block() {
    let records = vec![record(1, "14.2", "Safety", "14.2.1", "AE Overview")];
    let (xml, findings) = render_batch_xml(&records, &options()).unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<pdf-builder-metadata>"));
    assert!(xml.contains("<!-- input files total to less than 100MB -->"));
    assert!(xml.contains(r#"<header text="CSR Appendix 14.2" startNumber="2"/>"#));
    assert!(xml.contains(r#"orientation="landscape""#));
    assert!(xml.contains(r#"size="letter""#));
    assert!(xml.contains(r#"marginTop="0""#));
    assert!(xml.contains(r#"<font fontName="CourierNew" style="normal" size="9"/>"#));
    assert!(xml.contains(r#"<!-- <character-encoding type="ascii" /> -->"#));
    assert!(
        xml.contains(r#"<document-heading text="CSR Appendix 14.2" fontName="Times New Roman"/>"#)
    );
    assert!(findings.is_empty());
}

#[test]
fn sections_group_and_order_naturally() {
    let records = vec![
        record(1, "14.2.10", "Pharmacokinetics", "14.2.10.1", "PK Summary"),
        record(2, "14.2.2", "Safety", "14.2.2.1", "AE Overview"),
        record(3, "14.2.2", "Safety", "14.2.2.2", "SAE Overview"),
    ];
    let (xml, findings) = render_batch_xml(&records, &options()).unwrap();

    let safety = xml.find(r#"<section name="14.2.2 Safety">"#).unwrap();
    let pk = xml.find(r#"<section name="14.2.10 Pharmacokinetics">"#).unwrap();
    assert!(safety < pk, "numeric section order must beat lexicographic");

    let first = xml.find(r#"number="Table 14.2.2.1""#).unwrap();
    let second = xml.find(r#"number="Table 14.2.2.2""#).unwrap();
    assert!(first < second, "records keep sheet order inside a section");
    assert!(findings.is_empty());
}

#[test]
fn source_files_carry_location_number_and_title() {
    let records = vec![record(7, "14.2", "Safety", "14.2.1", "AE & SAE Overview")];
    let (xml, _) = render_batch_xml(&records, &options()).unwrap();

    assert!(xml.contains(r#"filename="out7.rtf""#));
    assert!(xml.contains(r#"fileLocation="root/cdar/d980/ar/dr2/tlf/dev/output/""#));
    assert!(xml.contains(r#"number="Table 14.2.1""#));
    assert!(xml.contains(r#"title="AE &amp; SAE Overview""#));
}

#[test]
fn number_is_blank_unless_both_parts_are_present() {
    let mut no_toc = record(1, "14.2", "Safety", "14.2.1", "AE Overview");
    no_toc.toc_number = None;
    let mut no_type = record(2, "14.2", "Safety", "14.2.2", "SAE Overview");
    no_type.artifact_type = None;

    let (xml, _) = render_batch_xml(&[no_toc, no_type], &options()).unwrap();
    assert!(xml.contains(r#"<source-file filename="out1.rtf""#));
    assert!(!xml.contains(r#"number="Table"#));
    assert_eq!(xml.matches(r#"number="""#).count(), 2);
}

#[test]
fn import_paths_point_at_the_doc_directory() {
    let records = vec![record(1, "14.2", "Safety", "14.2.1", "AE Overview")];
    let (xml, _) = render_batch_xml(&records, &options()).unwrap();

    assert!(xml.contains(r#"<output-pdf filename="csr_batch.pdf">"#));
    assert!(xml.contains(r#"<pdf-import path="root/cdar/d980/ar/dr2/tlf/doc/"/>"#));
    assert!(xml.contains(r#"<output-audit filename="csr_batch_audit.pdf">"#));
    assert!(xml.contains(r#"<audit-import path="root/cdar/d980/ar/dr2/tlf/doc/"/>"#));
}

#[test]
fn blank_section_records_are_reported_and_written_out() {
    let records = vec![
        record(1, "14.2", "Safety", "14.2.1", "AE Overview"),
        record(2, "", "", "14.9.1", "Orphan"),
    ];
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("batch.xml");

    let findings = write_batch_xml(&path, &records, &options()).unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].code, "TLF_SECTION_BLANK");
    assert_eq!(findings[0].severity, Severity::Warning);
    assert_eq!(findings[0].toc_number.as_deref(), Some("14.9.1"));

    let xml = std::fs::read_to_string(&path).unwrap();
    assert!(!xml.contains("Orphan"));
    assert!(xml.contains("AE Overview"));
}

#[test]
fn manifest_encoding_scan_covers_section_title_and_title() {
    let mut clean = record(1, "14.2", "Safety", "14.2.1", "AE Overview");
    clean.set_attribute(AttributeKey::Footnote(1), "\u{2265} stays out of scope");
    let mut dirty = record(2, "14.3", "Efficacy \u{2013} Part B", "14.3.1", "Response \u{2265} 50%");

    let findings = check_manifest_encoding(
        &[clean, dirty.clone()],
        EncodingProfile::Latin1,
    );
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].field.as_deref(), Some("sect_ttl"));
    assert_eq!(findings[1].field.as_deref(), Some("Title"));

    dirty.section_title = "Efficacy Part B".to_string();
    dirty.title = "Response >= 50%".to_string();
    assert!(check_manifest_encoding(&[dirty], EncodingProfile::Latin1).is_empty());
}
