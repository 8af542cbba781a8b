use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A non-fatal problem found while building or checking records. Findings
/// accumulate in a [`FindingsReport`]; they never abort the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Stable code (e.g., "TLF_OWNERSHIP_DUP").
    pub code: String,
    /// Human-readable message describing the problem.
    pub message: String,
    /// Severity level.
    pub severity: Severity,
    /// Toc number of the affected record (if applicable).
    pub toc_number: Option<String>,
    /// Index-sheet field the problem was found in (if applicable).
    pub field: Option<String>,
    /// Count of occurrences.
    pub count: Option<u64>,
}

/// Findings collected over one conversion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindingsReport {
    pub findings: Vec<Finding>,
}

impl FindingsReport {
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}
