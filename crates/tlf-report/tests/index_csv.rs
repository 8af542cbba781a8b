//! Round trips between the CSV writers and the ingest readers.

use tlf_ingest::{read_export, read_index};
use tlf_model::{ArtifactType, AttributeKey, AttributeRow, INDEX_COLUMNS, OutputRecord};
use tlf_report::{write_index_csv, write_normalized_export};

fn sample_record(sequence: u32, toc: &str) -> OutputRecord {
    let mut record = OutputRecord::new(
        sequence,
        "14.2",
        "Safety",
        format!("t_prog{sequence}"),
        "a",
    );
    record.artifact_type = Some(ArtifactType::Table);
    record.title = format!("Safety Summary {toc}");
    record.set_attribute(AttributeKey::Outfile, &format!("t_prog{sequence}_a"));
    record.set_attribute(AttributeKey::TocNumber, toc);
    record.set_attribute(AttributeKey::Title1, "j=L 'AstraZeneca'");
    record.set_attribute(AttributeKey::Footnote(2), "Safety analysis set.");
    record
}

#[test]
fn index_sheet_round_trips_through_the_reader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.csv");
    let records = vec![sample_record(1, "14.2.1"), sample_record(2, "14.2.2")];

    write_index_csv(&path, &records).unwrap();
    let loaded = read_index(&path).unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn index_sheet_has_the_fixed_header_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.csv");
    write_index_csv(&path, &[sample_record(1, "14.2.1")]).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let header = text.lines().next().unwrap();
    assert!(header.starts_with("sect_num,sect_ttl,outtype,azsolid,Core,tocnumber"));
    assert!(header.contains("\"Output Type (Table, Listing, Figure)\""));
    assert!(header.ends_with("footnote8,footnote9"));
    assert_eq!(header.split(',').count(), INDEX_COLUMNS.len() + 2);
}

#[test]
fn normalized_export_keeps_cell_values_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("original.csv");
    let rows = vec![
        AttributeRow {
            section_number: "14.2".to_string(),
            section_title: "Safety".to_string(),
            program: "t_ae".to_string(),
            suffix: "a".to_string(),
            name: "PARM ".to_string(),
            value: "\"kept as-is\" ".to_string(),
        },
        AttributeRow {
            section_number: String::new(),
            section_title: String::new(),
            program: "t_ae".to_string(),
            suffix: "a".to_string(),
            name: "footnote1".to_string(),
            value: String::new(),
        },
    ];

    write_normalized_export(&path, &rows).unwrap();
    let header = std::fs::read_to_string(&path).unwrap();
    assert!(header.starts_with("sect_num,sect_ttl,program,suffix,parm,value"));

    let loaded = read_export(&path).unwrap();
    assert_eq!(loaded, rows);
}
