//! Report filename derived from the property address.

/// Appended to every sanitized address.
pub const REPORT_SUFFIX: &str = "_geotech_seismic_report.pdf";

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Characters that are folded into `_` runs.
fn is_separator(c: char) -> bool {
    c == ','
        || c.is_whitespace()
        || c.is_control()
        || matches!(c, '/' | '\\' | ':' | '"' | '<' | '>' | '|' | '?' | '*')
}

/// Derives the report filename for `address`.
///
/// - Every run of commas and whitespace becomes a single `_`
/// - Path separators, NUL, control chars, and `: " < > | ? *` are part of the same runs
/// - `_geotech_seismic_report.pdf` is appended
/// - The stem is cut on a char boundary so the whole name fits in 255 bytes
///
/// `"123 Main St, San Jose, CA"` → `"123_Main_St_San_Jose_CA_geotech_seismic_report.pdf"`
pub fn report_filename(address: &str) -> String {
    let mut stem = String::with_capacity(address.len());
    let mut in_run = false;

    for c in address.chars() {
        if is_separator(c) {
            if !in_run {
                stem.push('_');
            }
            in_run = true;
        } else {
            stem.push(c);
            in_run = false;
        }
    }

    let max_stem = NAME_MAX - REPORT_SUFFIX.len();
    if stem.len() > max_stem {
        let mut take = max_stem;
        while take > 0 && !stem.is_char_boundary(take) {
            take -= 1;
        }
        stem.truncate(take);
    }

    stem.push_str(REPORT_SUFFIX);
    stem
}
