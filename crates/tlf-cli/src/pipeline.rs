//! Conversion pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the raw export rows
//! 2. **Normalize**: swap outer single quotes on footnote rows
//! 3. **Segment**: split rows into output groups at `outfile` markers
//! 4. **Pivot**: collapse each group into one wide record
//! 5. **Derive**: classify the type, extract the display title, clear
//!    placeholder footnotes
//! 6. **Check**: toc uniqueness, ownership duplicates, encoding scan
//! 7. **Sort**: numeric-aware toc ordering
//!
//! The fatal cases (no marker rows, duplicate toc numbers) surface as
//! errors; everything else lands in the findings report.

use std::path::Path;

use anyhow::Result;
use tracing::{info, info_span, warn};

use tlf_ingest::read_export;
use tlf_model::{AttributeRow, FindingsReport, OutputRecord};
use tlf_transform::{
    EncodingProfile, PlaceholderRules, derive_all, normalize_footnote_quotes, pivot_all, segment,
    sort_records,
};
use tlf_validate::check_records;

/// Options of one conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Target encoding the index values are checked against.
    pub encoding: EncodingProfile,
    /// Placeholder literals cleared in addition to the built-in set.
    pub extra_placeholders: Vec<String>,
}

/// Everything a conversion produces before any file is written.
#[derive(Debug)]
pub struct ConversionOutcome {
    /// Export rows after quote normalization, in file order.
    pub rows: Vec<AttributeRow>,
    /// Pivoted, derived, checked records in final sheet order.
    pub records: Vec<OutputRecord>,
    /// Non-fatal findings from the derive and check stages.
    pub report: FindingsReport,
    /// Footnote rows whose outer quote pair was rewritten.
    pub swapped_quotes: usize,
    /// Output groups found in the export.
    pub group_count: usize,
}

/// Run the full conversion against one export file.
pub fn convert_export(export_path: &Path, options: &ConvertOptions) -> Result<ConversionOutcome> {
    let ingest_span = info_span!("ingest", export = %export_path.display());
    let mut rows = ingest_span.in_scope(|| read_export(export_path))?;

    let swapped_quotes =
        info_span!("normalize_quotes").in_scope(|| normalize_footnote_quotes(&mut rows));

    // The normalized rows are re-emitted verbatim later, so the segmenter
    // works on a copy.
    let groups = info_span!("segment").in_scope(|| segment(rows.clone()))?;
    let group_count = groups.len();

    let mut records = info_span!("pivot").in_scope(|| pivot_all(&groups));

    let rules = PlaceholderRules::new(&options.extra_placeholders);
    let mut report = FindingsReport::default();
    info_span!("derive").in_scope(|| {
        report.extend(derive_all(&mut records, &rules));
    });

    let checked = info_span!("check").in_scope(|| check_records(&records, options.encoding))?;
    report.extend(checked.findings);
    for finding in &report.findings {
        warn!(
            code = %finding.code,
            toc = finding.toc_number.as_deref().unwrap_or("-"),
            "{}",
            finding.message
        );
    }

    info_span!("sort").in_scope(|| sort_records(&mut records));

    info!(
        rows = rows.len(),
        groups = group_count,
        records = records.len(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "conversion complete"
    );
    Ok(ConversionOutcome {
        rows,
        records,
        report,
        swapped_quotes,
        group_count,
    })
}
