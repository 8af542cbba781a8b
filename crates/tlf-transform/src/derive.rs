//! Presentation fields derived after the pivot.

use regex::Regex;
use tlf_model::{ArtifactType, Finding, OutputRecord, Severity};

/// Sponsor banner forced into `title1` on every record.
pub const TITLE1_BANNER: &str = "j=L 'AstraZeneca'";

const TITLE_PREFIX: &str = "j=C '";
const TITLE_SUFFIX: &str = "' ";

/// Footnote literals cleared during derivation. The four variants cover the
/// single- and double-quoted renderings of the template line, with and
/// without the trailing space the renderer sometimes leaves behind.
pub const DEFAULT_PLACEHOLDERS: [&str; 4] = [
    "j=L \"<<output program path>> <<output file name>> <<date/time>>\"",
    "j=L \"<<output program path>> <<output file name>> <<date/time>>\" ",
    "j=L '<<output program path>> <<output file name>> <<date/time>>'",
    "j=L '<<output program path>> <<output file name>> <<date/time>>' ",
];

/// Placeholder handling for footnote slots: an exact-literal clearing list
/// plus a token pattern that flags leftovers without clearing them. Only
/// exact literals are safe to erase.
#[derive(Debug, Clone)]
pub struct PlaceholderRules {
    literals: Vec<String>,
    token: Regex,
}

impl Default for PlaceholderRules {
    fn default() -> Self {
        PlaceholderRules::new(&[])
    }
}

impl PlaceholderRules {
    /// Build rules from the default literals plus caller-supplied extras.
    pub fn new(extra: &[String]) -> Self {
        let mut literals: Vec<String> = DEFAULT_PLACEHOLDERS
            .iter()
            .map(|literal| (*literal).to_string())
            .collect();
        literals.extend(extra.iter().cloned());
        let token = Regex::new(r"<<[^<>]+>>").unwrap();
        PlaceholderRules { literals, token }
    }

    /// True when the trimmed value exactly matches a clearing literal.
    pub fn is_placeholder(&self, value: &str) -> bool {
        let trimmed = value.trim();
        self.literals.iter().any(|literal| literal == trimmed)
    }

    /// True when the value still carries an unfilled `<<…>>` template token.
    pub fn has_template_token(&self, value: &str) -> bool {
        self.token.is_match(value)
    }
}

/// Classify the output kind from the `title4` banner line, in priority
/// order. `Appendix` banners publish as listings.
pub fn classify_artifact(title4: &str) -> Option<ArtifactType> {
    if title4.contains("Table") {
        Some(ArtifactType::Table)
    } else if title4.contains("Figure") {
        Some(ArtifactType::Figure)
    } else if title4.contains("Appendix") {
        Some(ArtifactType::Listing)
    } else {
        None
    }
}

/// Pull the display title out of a `title5` layout value. The renderer
/// wraps titles as `j=C '…' `; anything else passes through verbatim, and
/// blank or literal-`None` values yield an empty title.
pub fn extract_title(title5: &str) -> String {
    if title5.is_empty() || title5 == "None" {
        return String::new();
    }
    if title5.starts_with(TITLE_PREFIX) {
        if title5.ends_with(TITLE_SUFFIX) {
            let end = title5
                .len()
                .saturating_sub(TITLE_SUFFIX.len())
                .max(TITLE_PREFIX.len());
            return title5[TITLE_PREFIX.len()..end].to_string();
        }
        return title5[TITLE_PREFIX.len()..].to_string();
    }
    title5.to_string()
}

/// Finish a pivoted record: classify the artifact type, extract the display
/// title, force the sponsor banner, and clear placeholder footnotes.
/// Footnotes that survive clearing but still carry a template token are
/// reported as findings.
pub fn derive_record(record: &mut OutputRecord, rules: &PlaceholderRules) -> Vec<Finding> {
    record.artifact_type = record.title4.as_deref().and_then(classify_artifact);
    record.title = record
        .title5
        .as_deref()
        .map(extract_title)
        .unwrap_or_default();
    record.title1 = Some(TITLE1_BANNER.to_string());

    let mut findings = Vec::new();
    let toc_number = record.toc_number.clone();
    for (index, slot) in record.footnotes.iter_mut().enumerate() {
        let Some(value) = slot.as_deref() else {
            continue;
        };
        if rules.is_placeholder(value) {
            *slot = None;
        } else if rules.has_template_token(value) {
            findings.push(Finding {
                code: "TLF_PLACEHOLDER".to_string(),
                message: format!(
                    "footnote{} still carries an unfilled template token",
                    index + 1
                ),
                severity: Severity::Warning,
                toc_number: toc_number.clone(),
                field: Some(format!("footnote{}", index + 1)),
                count: Some(1),
            });
        }
    }
    findings
}

/// Derive every record in place, collecting the findings.
pub fn derive_all(records: &mut [OutputRecord], rules: &PlaceholderRules) -> Vec<Finding> {
    let mut findings = Vec::new();
    for record in records.iter_mut() {
        findings.extend(derive_record(record, rules));
    }
    findings
}
