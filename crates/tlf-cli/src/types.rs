use std::path::PathBuf;

use tlf_model::{Finding, FindingsReport};
use tlf_report::ProgramUsage;
use tlf_roster::{AssignmentStats, StatusStats};

/// Outcome of `convert`, for the summary printer.
#[derive(Debug)]
pub struct ConvertRunResult {
    pub export: PathBuf,
    pub output_dir: PathBuf,
    pub row_count: usize,
    pub swapped_quotes: usize,
    pub group_count: usize,
    pub record_count: usize,
    /// Written file paths; all `None` on a dry run.
    pub index_path: Option<PathBuf>,
    pub export_copy_path: Option<PathBuf>,
    pub findings_path: Option<PathBuf>,
    pub report: FindingsReport,
}

#[derive(Debug)]
pub struct BatchXmlRunResult {
    pub index: PathBuf,
    pub manifest: PathBuf,
    pub record_count: usize,
    /// Records placed in a section; the rest lacked a section number.
    pub placed: usize,
    pub findings: Vec<Finding>,
}

#[derive(Debug)]
pub struct ProgramsRunResult {
    pub index: PathBuf,
    pub script: PathBuf,
    pub usage: Vec<ProgramUsage>,
}

#[derive(Debug)]
pub struct RosterFillRunResult {
    pub output: PathBuf,
    pub row_count: usize,
    pub stats: AssignmentStats,
}

#[derive(Debug)]
pub struct StatusFillRunResult {
    pub output: PathBuf,
    pub stats: StatusStats,
}
