//! File round trips for the roster readers and writers.

use std::fs;

use tlf_model::{ArtifactType, AttributeKey, OutputRecord};
use tlf_roster::{
    apply_status, fill_roster, read_roster, read_status, write_filled_roster, write_roster,
};

fn record(outfile: &str, program: &str, toc: &str) -> OutputRecord {
    let mut record = OutputRecord::new(1, "14.1", "Demographics", program, "a");
    record.set_attribute(AttributeKey::Outfile, outfile);
    record.set_attribute(AttributeKey::AzSolid, "AZSTD01");
    record.toc_number = Some(toc.to_string());
    record.artifact_type = Some(ArtifactType::Table);
    record.title = "Demographic Characteristics".to_string();
    record
}

#[test]
fn filled_roster_round_trips_with_tier_column() {
    let dir = tempfile::tempdir().unwrap();
    let roster_path = dir.path().join("roster.csv");
    fs::write(
        &roster_path,
        concat!(
            "Output Name,Program Name,Programmer,QC Program,QC Programmer\n",
            "t_demog_a,t_demog,ana,v_demog,ben\n",
            "t_vitals_a,t_vitals,,v_vitals,\n",
        ),
    )
    .unwrap();

    let roster = read_roster(&roster_path).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].programmer.as_deref(), Some("ana"));
    assert_eq!(roster[1].programmer, None);

    let records = vec![
        record("t_demog_a", "t_demog", "14.1.1"),
        record("t_missing", "t_vitals", "14.1.2"),
    ];
    let (rows, stats) = fill_roster(&records, &roster);
    assert_eq!(stats.by_output, 1);
    assert_eq!(stats.by_program, 1);

    let filled_path = dir.path().join("filled.csv");
    write_filled_roster(&filled_path, &rows).unwrap();
    let contents = fs::read_to_string(&filled_path).unwrap();
    let mut lines = contents.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("Section #,Section Title"));
    assert!(header.ends_with("Match Source"));
    let first = lines.next().unwrap();
    assert!(first.contains("t_demog_a"));
    assert!(first.ends_with(",output"));
    let second = lines.next().unwrap();
    assert!(second.ends_with(",program"));
}

#[test]
fn status_merge_round_trips_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let roster_path = dir.path().join("roster.csv");
    fs::write(
        &roster_path,
        concat!(
            "Output Name,Programmer,\"QC Status (Not Started, Ongoing, QC Pending, Fail, Pass)\"\n",
            "t_demog_a,ana,Ongoing\n",
            "t_vitals_a,ben,Ongoing\n",
        ),
    )
    .unwrap();
    let status_path = dir.path().join("status.csv");
    fs::write(
        &status_path,
        "Dataset,Comparison Status\nt_demog_a,Match\nt_other,Mismatch\n",
    )
    .unwrap();

    let mut roster = read_roster(&roster_path).unwrap();
    let statuses = read_status(&status_path).unwrap();
    let stats = apply_status(&mut roster, &statuses);
    assert_eq!(stats.matched, 1);
    assert_eq!(stats.pass, 1);
    assert_eq!(stats.blank, 1);

    let out_path = dir.path().join("updated.csv");
    write_roster(&out_path, &roster).unwrap();
    let updated = read_roster(&out_path).unwrap();
    assert_eq!(updated[0].qc_status.as_deref(), Some("Pass"));
    assert_eq!(updated[1].qc_status, None);
}

#[test]
fn status_reader_requires_both_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status.csv");
    fs::write(&path, "Dataset\nt_demog_a\n").unwrap();
    let err = read_status(&path).unwrap_err();
    assert!(err.to_string().contains("Comparison Status"));
}

#[test]
fn roster_reader_requires_output_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.csv");
    fs::write(&path, "Program Name,Programmer\nt_demog,ana\n").unwrap();
    let err = read_roster(&path).unwrap_err();
    assert!(err.to_string().contains("Output Name"));
}
