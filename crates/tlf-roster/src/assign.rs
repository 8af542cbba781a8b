//! Tiered assignment of roster people to index records.

use std::collections::BTreeMap;

use serde::Serialize;
use tlf_model::OutputRecord;

use crate::RosterEntry;

/// How a row was matched to the roster. Output-name matches are
/// authoritative; program-name matches only supplement rows the first tier
/// missed and are surfaced for review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    ByOutput,
    ByProgram,
    #[default]
    Unmatched,
}

impl MatchTier {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::ByOutput => "output",
            MatchTier::ByProgram => "program",
            MatchTier::Unmatched => "",
        }
    }
}

/// One row of the filled roster sheet: the record's review columns plus the
/// people assignment and the tier that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilledRosterRow {
    pub section_number: String,
    pub section_title: String,
    pub output_type: String,
    pub output_number: String,
    pub title: String,
    pub template_reference: String,
    pub program_name: String,
    pub output_name: String,
    pub programmer: Option<String>,
    pub qc_program: Option<String>,
    pub qc_programmer: Option<String>,
    pub tier: MatchTier,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentStats {
    pub by_output: usize,
    pub by_program: usize,
    pub unmatched: usize,
}

fn first_occurrence_lookup<'a>(
    entries: &'a [RosterEntry],
    key: impl Fn(&RosterEntry) -> Option<&str>,
) -> BTreeMap<&'a str, &'a RosterEntry> {
    let mut lookup: BTreeMap<&str, &RosterEntry> = BTreeMap::new();
    for entry in entries {
        if let Some(name) = key(entry)
            && !name.is_empty()
        {
            lookup.entry(name).or_insert(entry);
        }
    }
    lookup
}

/// Build one filled row per record. Tier one matches the record's `OUTFILE`
/// against roster output names; tier two fills still-unmatched rows by
/// program name. Both lookups keep the first roster occurrence of a key.
/// A tier counts as matched on key presence alone, even when the roster
/// row's people cells are blank.
pub fn fill_roster(
    records: &[OutputRecord],
    roster: &[RosterEntry],
) -> (Vec<FilledRosterRow>, AssignmentStats) {
    let by_output = first_occurrence_lookup(roster, |entry| entry.output_name.as_deref());
    let by_program = first_occurrence_lookup(roster, |entry| entry.program_name.as_deref());

    let mut rows = Vec::with_capacity(records.len());
    let mut stats = AssignmentStats::default();
    for record in records {
        let mut row = FilledRosterRow {
            section_number: record.section_number.clone(),
            section_title: record.section_title.clone(),
            output_type: record
                .artifact_type
                .map(|kind| kind.as_str().to_string())
                .unwrap_or_default(),
            output_number: record.toc_number.clone().unwrap_or_default(),
            title: record.title.clone(),
            template_reference: record.az_solid.clone().unwrap_or_default(),
            program_name: record.program.clone(),
            output_name: record.outfile.clone().unwrap_or_default(),
            ..FilledRosterRow::default()
        };
        let matched = if row.output_name.is_empty() {
            None
        } else {
            by_output.get(row.output_name.as_str()).copied()
        };
        let supplemented = match matched {
            Some(_) => None,
            None if row.program_name.is_empty() => None,
            None => by_program.get(row.program_name.as_str()).copied(),
        };
        match (matched, supplemented) {
            (Some(entry), _) => {
                row.programmer = entry.programmer.clone();
                row.qc_program = entry.qc_program.clone();
                row.qc_programmer = entry.qc_programmer.clone();
                row.tier = MatchTier::ByOutput;
                stats.by_output += 1;
            }
            (None, Some(entry)) => {
                row.programmer = entry.programmer.clone();
                row.qc_program = entry.qc_program.clone();
                row.qc_programmer = entry.qc_programmer.clone();
                row.tier = MatchTier::ByProgram;
                stats.by_program += 1;
            }
            (None, None) => {
                stats.unmatched += 1;
            }
        }
        rows.push(row);
    }
    (rows, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tlf_model::{ArtifactType, AttributeKey};

    fn record(outfile: &str, program: &str) -> OutputRecord {
        let mut record = OutputRecord::new(1, "14.1", "Demographics", program, "a");
        if !outfile.is_empty() {
            record.set_attribute(AttributeKey::Outfile, outfile);
        }
        record.artifact_type = Some(ArtifactType::Table);
        record.toc_number = Some("14.1.1".to_string());
        record
    }

    fn roster_entry(output: &str, program: &str, programmer: &str) -> RosterEntry {
        RosterEntry {
            output_name: (!output.is_empty()).then(|| output.to_string()),
            program_name: (!program.is_empty()).then(|| program.to_string()),
            programmer: Some(programmer.to_string()),
            qc_program: Some(format!("qc_{program}")),
            qc_programmer: Some("reviewer".to_string()),
            qc_status: None,
        }
    }

    #[test]
    fn output_name_matches_take_priority() {
        let records = vec![record("t_demog_a", "t_demog")];
        let roster = vec![
            roster_entry("t_demog_a", "t_other", "ana"),
            roster_entry("", "t_demog", "ben"),
        ];
        let (rows, stats) = fill_roster(&records, &roster);
        assert_eq!(rows[0].tier, MatchTier::ByOutput);
        assert_eq!(rows[0].programmer.as_deref(), Some("ana"));
        assert_eq!(stats.by_output, 1);
        assert_eq!(stats.by_program, 0);
    }

    #[test]
    fn program_name_supplements_unmatched_rows_only() {
        let records = vec![record("t_demog_a", "t_demog"), record("t_vitals_a", "t_vitals")];
        let roster = vec![
            roster_entry("t_demog_a", "", "ana"),
            roster_entry("", "t_vitals", "ben"),
        ];
        let (rows, stats) = fill_roster(&records, &roster);
        assert_eq!(rows[0].tier, MatchTier::ByOutput);
        assert_eq!(rows[1].tier, MatchTier::ByProgram);
        assert_eq!(rows[1].programmer.as_deref(), Some("ben"));
        assert_eq!(stats.by_output, 1);
        assert_eq!(stats.by_program, 1);
        assert_eq!(stats.unmatched, 0);
    }

    #[test]
    fn duplicate_roster_keys_keep_the_first_occurrence() {
        let records = vec![record("t_demog_a", "t_demog")];
        let roster = vec![
            roster_entry("t_demog_a", "", "first"),
            roster_entry("t_demog_a", "", "second"),
        ];
        let (rows, _) = fill_roster(&records, &roster);
        assert_eq!(rows[0].programmer.as_deref(), Some("first"));
    }

    #[test]
    fn unmatched_rows_keep_record_fields_and_empty_people() {
        let records = vec![record("t_orphan", "t_orphan_pgm")];
        let (rows, stats) = fill_roster(&records, &[]);
        assert_eq!(rows[0].tier, MatchTier::Unmatched);
        assert_eq!(rows[0].output_name, "t_orphan");
        assert_eq!(rows[0].output_type, "Table");
        assert_eq!(rows[0].programmer, None);
        assert_eq!(stats.unmatched, 1);
    }

    #[test]
    fn key_presence_counts_even_with_blank_people_cells() {
        let records = vec![record("t_demog_a", "t_demog")];
        let roster = vec![RosterEntry {
            output_name: Some("t_demog_a".to_string()),
            ..RosterEntry::default()
        }];
        let (rows, stats) = fill_roster(&records, &roster);
        assert_eq!(rows[0].tier, MatchTier::ByOutput);
        assert_eq!(rows[0].programmer, None);
        assert_eq!(stats.by_output, 1);
    }
}
