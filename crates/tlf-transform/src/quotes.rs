//! Quote-convention repair for footnote values.

use tlf_model::AttributeRow;

/// Replace the first and the last single quote of `value` with double
/// quotes, leaving interior quotes untouched. A lone single quote is
/// itself replaced; a value without any single quote passes through
/// unchanged.
///
/// The rendering pipeline wraps footnote text in single quotes, but the
/// publishing step expects the outermost pair to be double quotes. Interior
/// apostrophes are real content and must survive.
///
/// # Examples
///
/// ```
/// use tlf_transform::quotes::normalize_quotes;
///
/// assert_eq!(
///     normalize_quotes("j=L 'Patient wasn't dosed'"),
///     "j=L \"Patient wasn't dosed\""
/// );
/// assert_eq!(normalize_quotes("j=L 'x"), "j=L \"x");
/// assert_eq!(normalize_quotes(""), "");
/// ```
pub fn normalize_quotes(value: &str) -> String {
    match (value.find('\''), value.rfind('\'')) {
        (Some(first), Some(last)) if first != last => {
            let mut out = String::with_capacity(value.len());
            out.push_str(&value[..first]);
            out.push('"');
            out.push_str(&value[first + 1..last]);
            out.push('"');
            out.push_str(&value[last + 1..]);
            out
        }
        (Some(only), _) => {
            let mut out = String::with_capacity(value.len());
            out.push_str(&value[..only]);
            out.push('"');
            out.push_str(&value[only + 1..]);
            out
        }
        _ => value.to_string(),
    }
}

/// Apply [`normalize_quotes`] to every row whose attribute name starts with
/// `footnote`, matched case-insensitively and without trimming. Returns the
/// number of rows that changed.
pub fn normalize_footnote_quotes(rows: &mut [AttributeRow]) -> usize {
    let mut changed = 0;
    for row in rows.iter_mut() {
        if !row.name.to_lowercase().starts_with("footnote") {
            continue;
        }
        let normalized = normalize_quotes(&row.value);
        if normalized != row.value {
            row.value = normalized;
            changed += 1;
        }
    }
    changed
}
