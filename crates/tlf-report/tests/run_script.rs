//! Integration tests for the SAS run-script generator.

use tlf_model::{AttributeKey, OutputRecord};
use tlf_report::{collect_program_usage, generate_run_script, write_run_script};

fn record(sequence: u32, program: &str, toc: Option<&str>) -> OutputRecord {
    let mut record = OutputRecord::new(sequence, "14.2", "Safety", program, "a");
    if let Some(toc) = toc {
        record.set_attribute(AttributeKey::TocNumber, toc);
    }
    record
}

#[test]
fn programs_collect_in_first_appearance_order() {
    let records = vec![
        record(1, "t_demog", Some("14.1.1")),
        record(2, "t_ae", Some("14.3.1")),
        record(3, "t_demog", Some("14.1.2")),
        record(4, "t_demog", Some("14.1.1")),
        record(5, "", Some("9.9")),
        record(6, "t_vs", None),
    ];

    let usage = collect_program_usage(&records);
    let programs: Vec<&str> = usage.iter().map(|entry| entry.program.as_str()).collect();
    assert_eq!(programs, vec!["t_demog", "t_ae", "t_vs"]);

    assert_eq!(usage[0].toc_numbers, vec!["14.1.1", "14.1.2"]);
    assert_eq!(usage[0].output_count(), 2);
    assert_eq!(usage[2].output_count(), 0);
}

#[test]
fn script_lists_statistics_then_commands() {
    let records = vec![
        record(1, "t_demog", Some("14.1.1")),
        record(2, "t_ae", Some("14.3.1")),
        record(3, "t_demog", Some("14.1.2")),
        record(4, "t_demog", Some("14.1.1")),
        record(5, "", Some("9.9")),
        record(6, "t_vs", None),
    ];
    let script = generate_run_script(&collect_program_usage(&records));

    insta::assert_snapshot!(script, @r"
/* Generated SAS Program Execution Script */
/* Programs ordered by first appearance in the index sheet */

/* Program Statistics: */
/*   t_demog: 2 table(s) */
/*   t_ae: 1 table(s) */
/*   t_vs: 0 table(s) */

/* ====== Program Execution Commands ====== */

%runpgm(pgm=t_demog, error_override=y);
%runpgm(pgm=t_ae, error_override=y);
%runpgm(pgm=t_vs, error_override=y);
");
}

#[test]
fn script_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run_tlf.sas");
    let records = vec![record(1, "t_demog", Some("14.1.1"))];

    let usage = write_run_script(&path, &records).unwrap();
    assert_eq!(usage.len(), 1);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.ends_with("%runpgm(pgm=t_demog, error_override=y);\n"));
    assert_eq!(text.matches("%runpgm").count(), 1);
}

#[test]
fn empty_sheet_yields_a_header_only_script() {
    let script = generate_run_script(&[]);
    assert!(script.contains("/* Program Statistics: */"));
    assert!(script.contains("/* ====== Program Execution Commands ====== */"));
    assert!(!script.contains("%runpgm"));
}
