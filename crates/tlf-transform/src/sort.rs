//! Ordering keys for toc numbers and section numbers.

use tlf_model::OutputRecord;

/// One component of a toc sort key. Numeric components order before the
/// sentinel, so `10.2` lands after `2.1` and unnumbered records go last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TocPart {
    Number(u64),
    Last,
}

/// Sort key for a toc number: split on dots, numeric components compare
/// numerically, and non-numeric components (or a missing toc number) become
/// the sentinel.
pub fn toc_sort_key(toc_number: Option<&str>) -> Vec<TocPart> {
    match toc_number {
        Some(value) => value
            .split('.')
            .map(|part| {
                if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
                    part.parse::<u64>().map_or(TocPart::Last, TocPart::Number)
                } else {
                    TocPart::Last
                }
            })
            .collect(),
        None => vec![TocPart::Last],
    }
}

/// Stable sort of records by toc number; ties keep their original order.
pub fn sort_records(records: &mut [OutputRecord]) {
    records.sort_by_key(|record| toc_sort_key(record.toc_number.as_deref()));
}

/// One run of a natural sort key. Runs alternate text, number, text, so two
/// keys always meet like-typed parts when compared position by position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum NaturalPart {
    Number(u64),
    Text(String),
}

/// Natural sort key over an arbitrary string: digit runs compare
/// numerically, the text between them lexically. The empty string sorts
/// before everything else.
pub fn natural_sort_key(value: &str) -> Vec<NaturalPart> {
    let mut parts = Vec::new();
    let mut text = String::new();
    let mut chars = value.chars().peekable();
    while let Some(&ch) = chars.peek() {
        if ch.is_ascii_digit() {
            parts.push(NaturalPart::Text(std::mem::take(&mut text)));
            let mut run = String::new();
            while let Some(&digit) = chars.peek() {
                if !digit.is_ascii_digit() {
                    break;
                }
                run.push(digit);
                chars.next();
            }
            parts.push(NaturalPart::Number(run.parse().unwrap_or(u64::MAX)));
        } else {
            text.push(ch);
            chars.next();
        }
    }
    parts.push(NaturalPart::Text(text));
    parts
}
