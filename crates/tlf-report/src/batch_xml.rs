//! Batch list manifest for the downstream PDF builder.
//!
//! Records are grouped into `<section>` blocks keyed by section number and
//! title, sections are ordered naturally (`14.2.10` after `14.2.2`), and a
//! fixed ruleset block carries the page and font setup the builder expects.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use tlf_model::{Finding, OutputRecord, Severity};
use tlf_transform::encoding::{EncodingProfile, incompatible_positions};
use tlf_transform::natural_sort_key;

/// Options for the batch list manifest.
#[derive(Debug, Clone)]
pub struct BatchXmlOptions {
    /// Header text, reused as the document heading.
    pub heading: String,
    /// Directory the builder reads the RTF outputs from.
    pub file_location: String,
    /// Basename of the generated PDF pair, without extension. Must not
    /// contain spaces; the CLI rejects such names before reaching here.
    pub output_name: String,
    /// `startNumber` attribute of the header element.
    pub start_number: u32,
}

impl BatchXmlOptions {
    pub fn new(
        heading: impl Into<String>,
        file_location: impl Into<String>,
        output_name: impl Into<String>,
    ) -> Self {
        Self {
            heading: heading.into(),
            file_location: file_location.into(),
            output_name: output_name.into(),
            start_number: 2,
        }
    }
}

#[derive(Debug)]
struct SectionGroup {
    number: String,
    title: String,
    files: Vec<SourceFile>,
}

#[derive(Debug)]
struct SourceFile {
    filename: String,
    number: String,
    title: String,
}

/// Scan the two columns the builder renders as visible text. The full-sheet
/// scan lives in the conformance checks; this pass only guards what the
/// manifest embeds.
pub fn check_manifest_encoding(records: &[OutputRecord], profile: EncodingProfile) -> Vec<Finding> {
    let mut findings = Vec::new();
    for record in records {
        for (field, value) in [
            ("sect_ttl", record.section_title.as_str()),
            ("Title", record.title.as_str()),
        ] {
            let positions = incompatible_positions(value, profile);
            if positions.is_empty() {
                continue;
            }
            let rendered: Vec<String> = positions.iter().map(|pos| pos.to_string()).collect();
            findings.push(Finding {
                code: "TLF_ENCODING".to_string(),
                message: format!(
                    "value not representable in {} at character position(s) {}",
                    profile,
                    rendered.join(", ")
                ),
                severity: Severity::Warning,
                toc_number: record.toc_number.clone(),
                field: Some(field.to_string()),
                count: Some(positions.len() as u64),
            });
        }
    }
    findings
}

/// Render the manifest document. Returns the XML text and the findings for
/// records that could not be placed in a section.
pub fn render_batch_xml(
    records: &[OutputRecord],
    options: &BatchXmlOptions,
) -> Result<(String, Vec<Finding>)> {
    let mut findings = Vec::new();
    let sections = group_records(records, &mut findings);

    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 4);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.write_event(Event::Start(BytesStart::new("pdf-builder-metadata")))?;
    xml.write_event(Event::Comment(BytesText::from_escaped(
        " input files total to less than 100MB ",
    )))?;

    xml.write_event(Event::Start(BytesStart::new("ruleset")))?;
    xml.write_event(Event::Start(BytesStart::new("headers")))?;
    let start_number = options.start_number.to_string();
    let mut header = BytesStart::new("header");
    header.push_attribute(("text", options.heading.as_str()));
    header.push_attribute(("startNumber", start_number.as_str()));
    xml.write_event(Event::Empty(header))?;
    xml.write_event(Event::End(BytesEnd::new("headers")))?;

    let mut page = BytesStart::new("page");
    page.push_attribute(("orientation", "landscape"));
    page.push_attribute(("size", "letter"));
    page.push_attribute(("measurementUnit", "in"));
    page.push_attribute(("marginTop", "0"));
    page.push_attribute(("marginLeft", "0"));
    page.push_attribute(("marginRight", "0"));
    page.push_attribute(("marginBottom", "0"));
    xml.write_event(Event::Empty(page))?;

    let mut font = BytesStart::new("font");
    font.push_attribute(("fontName", "CourierNew"));
    font.push_attribute(("style", "normal"));
    font.push_attribute(("size", "9"));
    xml.write_event(Event::Empty(font))?;
    xml.write_event(Event::Comment(BytesText::from_escaped(
        " <character-encoding type=\"ascii\" /> ",
    )))?;

    let mut doc_heading = BytesStart::new("document-heading");
    doc_heading.push_attribute(("text", options.heading.as_str()));
    doc_heading.push_attribute(("fontName", "Times New Roman"));
    xml.write_event(Event::Empty(doc_heading))?;
    xml.write_event(Event::End(BytesEnd::new("ruleset")))?;

    xml.write_event(Event::Start(BytesStart::new("sectionset")))?;
    for section in &sections {
        let name = format!("{} {}", section.number, section.title);
        let mut node = BytesStart::new("section");
        node.push_attribute(("name", name.as_str()));
        xml.write_event(Event::Start(node))?;
        for file in &section.files {
            let mut source = BytesStart::new("source-file");
            source.push_attribute(("filename", file.filename.as_str()));
            source.push_attribute(("fileLocation", options.file_location.as_str()));
            source.push_attribute(("number", file.number.as_str()));
            source.push_attribute(("title", file.title.as_str()));
            xml.write_event(Event::Empty(source))?;
        }
        xml.write_event(Event::End(BytesEnd::new("section")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("sectionset")))?;

    let doc_dir = doc_directory(&options.file_location);
    let pdf_name = format!("{}.pdf", options.output_name);
    let mut pdf = BytesStart::new("output-pdf");
    pdf.push_attribute(("filename", pdf_name.as_str()));
    xml.write_event(Event::Start(pdf))?;
    let mut pdf_import = BytesStart::new("pdf-import");
    pdf_import.push_attribute(("path", doc_dir.as_str()));
    xml.write_event(Event::Empty(pdf_import))?;
    xml.write_event(Event::End(BytesEnd::new("output-pdf")))?;

    let audit_name = format!("{}_audit.pdf", options.output_name);
    let mut audit = BytesStart::new("output-audit");
    audit.push_attribute(("filename", audit_name.as_str()));
    xml.write_event(Event::Start(audit))?;
    let mut audit_import = BytesStart::new("audit-import");
    audit_import.push_attribute(("path", doc_dir.as_str()));
    xml.write_event(Event::Empty(audit_import))?;
    xml.write_event(Event::End(BytesEnd::new("output-audit")))?;

    xml.write_event(Event::End(BytesEnd::new("pdf-builder-metadata")))?;

    let placed: usize = sections.iter().map(|section| section.files.len()).sum();
    debug!(
        sections = sections.len(),
        files = placed,
        skipped = findings.len(),
        "rendered batch manifest"
    );
    let text =
        String::from_utf8(xml.into_inner()).context("batch manifest rendered as invalid utf-8")?;
    Ok((text, findings))
}

/// Render and write the manifest.
pub fn write_batch_xml(
    output_path: &Path,
    records: &[OutputRecord],
    options: &BatchXmlOptions,
) -> Result<Vec<Finding>> {
    let (text, findings) = render_batch_xml(records, options)?;
    crate::common::ensure_parent(output_path)?;
    fs::write(output_path, text).with_context(|| format!("write {}", output_path.display()))?;
    Ok(findings)
}

/// Group records by trimmed section number and title, preserving sheet
/// order inside each section, then order sections naturally.
fn group_records(records: &[OutputRecord], findings: &mut Vec<Finding>) -> Vec<SectionGroup> {
    let mut groups: Vec<SectionGroup> = Vec::new();
    let mut positions: BTreeMap<(String, String), usize> = BTreeMap::new();
    for record in records {
        let number = record.section_number.trim();
        let title = record.section_title.trim();
        if number.is_empty() {
            findings.push(Finding {
                code: "TLF_SECTION_BLANK".to_string(),
                message: format!(
                    "record {} has no section number and was left out of the manifest",
                    record.sequence
                ),
                severity: Severity::Warning,
                toc_number: record.toc_number.clone(),
                field: Some("sect_num".to_string()),
                count: None,
            });
            continue;
        }
        let key = (number.to_string(), title.to_string());
        let position = *positions.entry(key).or_insert_with(|| {
            groups.push(SectionGroup {
                number: number.to_string(),
                title: title.to_string(),
                files: Vec::new(),
            });
            groups.len() - 1
        });
        groups[position].files.push(source_file(record));
    }
    groups.sort_by_key(|group| (natural_sort_key(&group.number), group.title.clone()));
    groups
}

fn source_file(record: &OutputRecord) -> SourceFile {
    let outfile = record.outfile.as_deref().unwrap_or_default().trim();
    let filename = if outfile.is_empty() {
        String::new()
    } else {
        format!("{outfile}.rtf")
    };
    let kind = record
        .artifact_type
        .map(|kind| kind.as_str())
        .unwrap_or_default();
    let toc = record.toc_number.as_deref().unwrap_or_default().trim();
    let number = if kind.is_empty() || toc.is_empty() {
        String::new()
    } else {
        format!("{kind} {toc}")
    };
    SourceFile {
        filename,
        number,
        title: record.title.trim().to_string(),
    }
}

/// Document directory for the import paths: everything before `/tlf/` in
/// the source location, re-joined as `{base}/tlf/doc/`. A location without
/// the marker is used as the base unchanged.
fn doc_directory(file_location: &str) -> String {
    let base = match file_location.split_once("/tlf/") {
        Some((head, _)) => head,
        None => file_location,
    };
    format!("{}/tlf/doc/", base.trim_end_matches('/'))
}
