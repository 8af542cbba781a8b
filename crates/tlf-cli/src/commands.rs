use anyhow::{Result, anyhow};
use tracing::{info, info_span, warn};

use tlf_ingest::read_index;
use tlf_report::{
    BatchXmlOptions, check_manifest_encoding, write_batch_xml, write_index_csv,
    write_normalized_export, write_run_script,
};
use tlf_roster::{
    apply_status, fill_roster, read_roster, read_status, write_filled_roster, write_roster,
};
use tlf_transform::EncodingProfile;
use tlf_validate::write_findings_json;

use crate::cli::{
    BatchXmlArgs, ConvertArgs, EncodingArg, ProgramsArgs, RosterFillArgs, StatusFillArgs,
};
use crate::pipeline::{ConvertOptions, convert_export};
use crate::types::{
    BatchXmlRunResult, ConvertRunResult, ProgramsRunResult, RosterFillRunResult,
    StatusFillRunResult,
};

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertRunResult> {
    let options = ConvertOptions {
        encoding: encoding_profile(args.encoding),
        extra_placeholders: args.placeholder.clone(),
    };
    let outcome = convert_export(&args.export, &options)?;

    let mut result = ConvertRunResult {
        export: args.export.clone(),
        output_dir: args.out_dir.clone(),
        row_count: outcome.rows.len(),
        swapped_quotes: outcome.swapped_quotes,
        group_count: outcome.group_count,
        record_count: outcome.records.len(),
        index_path: None,
        export_copy_path: None,
        findings_path: None,
        report: outcome.report,
    };

    if args.dry_run {
        info!("dry run; skipping file output");
        return Ok(result);
    }

    let output_span = info_span!("output", dir = %args.out_dir.display());
    let _output_guard = output_span.enter();

    let index_path = args.out_dir.join("index.csv");
    write_index_csv(&index_path, &outcome.records)?;

    let export_copy_path = args.out_dir.join("original.csv");
    write_normalized_export(&export_copy_path, &outcome.rows)?;

    let findings_path = write_findings_json(
        &args.out_dir,
        &args.export.display().to_string(),
        outcome.records.len(),
        &result.report,
    )?;

    result.index_path = Some(index_path);
    result.export_copy_path = Some(export_copy_path);
    result.findings_path = Some(findings_path);
    Ok(result)
}

pub fn run_batch_xml(args: &BatchXmlArgs) -> Result<BatchXmlRunResult> {
    if args.name.contains(' ') {
        return Err(anyhow!(
            "output name '{}' must not contain spaces",
            args.name
        ));
    }
    let records = read_index(&args.index)?;

    let encoding_findings = check_manifest_encoding(&records, EncodingProfile::Latin1);
    for finding in &encoding_findings {
        warn!(
            code = %finding.code,
            toc = finding.toc_number.as_deref().unwrap_or("-"),
            "{}",
            finding.message
        );
    }
    if args.fail_on_encoding && !encoding_findings.is_empty() {
        return Err(anyhow!(
            "{} manifest value(s) not representable in latin1",
            encoding_findings.len()
        ));
    }

    let mut options = BatchXmlOptions::new(&args.heading, &args.file_location, &args.name);
    options.start_number = args.start_number;

    // write_batch_xml reports the records it had to leave out.
    let skipped = write_batch_xml(&args.out, &records, &options)?;
    let placed = records.len() - skipped.len();
    let mut findings = skipped;
    findings.extend(encoding_findings);

    info!(records = records.len(), placed, "manifest written");
    Ok(BatchXmlRunResult {
        index: args.index.clone(),
        manifest: args.out.clone(),
        record_count: records.len(),
        placed,
        findings,
    })
}

pub fn run_programs(args: &ProgramsArgs) -> Result<ProgramsRunResult> {
    let records = read_index(&args.index)?;
    let usage = write_run_script(&args.out, &records)?;
    info!(
        programs = usage.len(),
        records = records.len(),
        "run script written"
    );
    Ok(ProgramsRunResult {
        index: args.index.clone(),
        script: args.out.clone(),
        usage,
    })
}

pub fn run_roster_fill(args: &RosterFillArgs) -> Result<RosterFillRunResult> {
    let records = read_index(&args.index)?;
    let roster = read_roster(&args.roster)?;
    let (rows, stats) = fill_roster(&records, &roster);
    write_filled_roster(&args.out, &rows)?;
    info!(
        rows = rows.len(),
        unmatched = stats.unmatched,
        "filled roster written"
    );
    Ok(RosterFillRunResult {
        output: args.out.clone(),
        row_count: rows.len(),
        stats,
    })
}

pub fn run_status_fill(args: &StatusFillArgs) -> Result<StatusFillRunResult> {
    let mut roster = read_roster(&args.roster)?;
    let statuses = read_status(&args.status)?;
    let stats = apply_status(&mut roster, &statuses);
    write_roster(&args.out, &roster)?;
    info!(
        rows = stats.total,
        matched = stats.matched,
        "roster statuses written"
    );
    Ok(StatusFillRunResult {
        output: args.out.clone(),
        stats,
    })
}

fn encoding_profile(arg: EncodingArg) -> EncodingProfile {
    match arg {
        EncodingArg::Latin1 => EncodingProfile::Latin1,
        EncodingArg::Ascii => EncodingProfile::Ascii,
    }
}
