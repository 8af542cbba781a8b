use std::cmp::Ordering;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use tlf_model::{Finding, Severity};

use crate::types::{
    BatchXmlRunResult, ConvertRunResult, ProgramsRunResult, RosterFillRunResult,
    StatusFillRunResult,
};

pub fn print_convert_summary(result: &ConvertRunResult) {
    println!("Export: {}", result.export.display());
    println!("Output: {}", result.output_dir.display());
    if let Some(path) = &result.index_path {
        println!("Index sheet: {}", path.display());
    }
    if let Some(path) = &result.export_copy_path {
        println!("Export copy: {}", path.display());
    }
    if let Some(path) = &result.findings_path {
        println!("Findings report: {}", path.display());
    }
    if result.index_path.is_none() {
        println!("Dry run: no files written");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Quote swaps"),
        header_cell("Groups"),
        header_cell("Records"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_table_style(&mut table);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.row_count),
        Cell::new(result.swapped_quotes),
        Cell::new(result.group_count),
        Cell::new(result.record_count),
        count_cell(result.report.error_count(), Color::Red),
        count_cell(result.report.warning_count(), Color::Yellow),
    ]);
    println!("{table}");
    print_findings_table(&result.report.findings);
}

pub fn print_batch_xml_summary(result: &BatchXmlRunResult) {
    println!("Index: {}", result.index.display());
    println!("Manifest: {}", result.manifest.display());
    println!(
        "Records: {} ({} placed, {} skipped)",
        result.record_count,
        result.placed,
        result.record_count - result.placed
    );
    print_findings_table(&result.findings);
}

pub fn print_programs_summary(result: &ProgramsRunResult) {
    println!("Index: {}", result.index.display());
    println!("Script: {}", result.script.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Program"),
        header_cell("Outputs"),
        header_cell("Toc numbers"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let mut total_outputs = 0usize;
    for usage in &result.usage {
        total_outputs += usage.output_count();
        table.add_row(vec![
            Cell::new(&usage.program)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(usage.output_count()),
            toc_list_cell(&usage.toc_numbers),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_outputs).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_roster_fill_summary(result: &RosterFillRunResult) {
    println!("Output: {}", result.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("By output"),
        header_cell("By program"),
        header_cell("Unmatched"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.row_count),
        Cell::new(result.stats.by_output),
        Cell::new(result.stats.by_program),
        count_cell(result.stats.unmatched, Color::Yellow),
    ]);
    println!("{table}");
}

pub fn print_status_fill_summary(result: &StatusFillRunResult) {
    println!("Output: {}", result.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Matched"),
        header_cell("Pass"),
        header_cell("Fail"),
        header_cell("Blank"),
        header_cell("Match rate"),
    ]);
    apply_table_style(&mut table);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let rate_cell = if result.stats.total == 0 {
        dim_cell("-")
    } else {
        let rate = result.stats.matched as f64 * 100.0 / result.stats.total as f64;
        Cell::new(format!("{rate:.1}%"))
    };
    table.add_row(vec![
        Cell::new(result.stats.total),
        Cell::new(result.stats.matched),
        count_cell(result.stats.pass, Color::Green),
        count_cell(result.stats.fail, Color::Red),
        count_cell(result.stats.blank, Color::Yellow),
        rate_cell,
    ]);
    println!("{table}");
}

fn print_findings_table(findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    let mut ordered: Vec<&Finding> = findings.iter().collect();
    ordered.sort_by(|a, b| {
        let severity = severity_rank(b.severity).cmp(&severity_rank(a.severity));
        if severity != Ordering::Equal {
            return severity;
        }
        let code = a.code.cmp(&b.code);
        if code != Ordering::Equal {
            return code;
        }
        a.toc_number.cmp(&b.toc_number)
    });
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Toc"),
        header_cell("Field"),
        header_cell("Count"),
        header_cell("Message"),
    ]);
    apply_findings_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    for finding in ordered {
        table.add_row(vec![
            severity_cell(finding.severity),
            Cell::new(&finding.code),
            optional_cell(finding.toc_number.as_deref()),
            optional_cell(finding.field.as_deref()),
            finding_count_cell(finding.count, finding.severity),
            Cell::new(&finding.message),
        ]);
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_findings_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 2,
        Severity::Warning => 1,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    }
}

fn finding_count_cell(count: Option<u64>, severity: Severity) -> Cell {
    match count {
        Some(value) => Cell::new(value).fg(severity_color(severity)),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn toc_list_cell(toc_numbers: &[String]) -> Cell {
    if toc_numbers.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(toc_numbers.join(", "))
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) if !text.is_empty() => Cell::new(text),
        _ => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
