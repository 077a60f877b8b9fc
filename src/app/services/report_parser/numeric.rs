//! Locale-heuristic numeric cell normalization
//!
//! Ad-platform exports mix thousands/decimal separator conventions:
//! "1.234,56" and "1,234.56" denote the same value, and a bare "1.234"
//! is ambiguous in general. The rules here are a compatibility-critical
//! tie-break, not locale-API-driven formatting:
//!
//! - both separators present: the rightmost one is the decimal point,
//!   the other is thousands and is stripped
//! - a single separator followed by exactly 3 digits is thousands
//!   (a 3-digit suffix is far more likely "thousands" than "cents" in
//!   a currency with no minor units); otherwise it is the decimal point
//! - multiple dots are always thousands separators
//!
//! Any parse failure yields 0; numeric corruption never aborts an
//! upload.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MISSING_CELL_MARKER;

/// ASCII letters and the dollar sign, stripped before separator
/// analysis (currency suffixes like "CLP" or a leading "$")
static LETTERS_AND_CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z$]").expect("letter/currency pattern is valid"));

/// Parse one textual numeric cell into a canonical value
///
/// Empty cells and the literal "--" placeholder parse to 0, as does
/// anything that remains unparseable after cleaning.
pub fn normalize_number(value: &str) -> f64 {
    if value.is_empty() || value == MISSING_CELL_MARKER {
        return 0.0;
    }

    let stripped = value.trim().trim_matches('"').trim();
    let mut cleaned = LETTERS_AND_CURRENCY
        .replace_all(stripped, "")
        .trim()
        .to_string();

    if cleaned.is_empty() {
        return 0.0;
    }

    let has_comma = cleaned.contains(',');
    let has_dot = cleaned.contains('.');

    if has_comma && has_dot {
        if cleaned.rfind(',') > cleaned.rfind('.') {
            // 1.234,56 style: dots are thousands, comma is decimal
            cleaned = cleaned.replace('.', "").replacen(',', ".", 1);
        } else {
            // 1,234.56 style: commas are thousands
            cleaned = cleaned.replace(',', "");
        }
    } else if has_comma {
        let after_last = cleaned.rsplit(',').next().unwrap_or("");
        if after_last.len() == 3 {
            cleaned = cleaned.replace(',', "");
        } else {
            cleaned = cleaned.replacen(',', ".", 1);
        }
    } else if has_dot {
        // 208.562 style is common in CLP exports
        let parts: Vec<&str> = cleaned.split('.').collect();
        if parts.last().is_some_and(|p| p.len() == 3) || parts.len() > 2 {
            cleaned = cleaned.replace('.', "");
        }
    }

    cleaned.parse::<f64>().unwrap_or(0.0)
}
