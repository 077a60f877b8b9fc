//! Line splitting, delimiter inference and header location
//!
//! The first two pipeline stages: break the raw upload into retained
//! lines, pick the field delimiter, and find the header row within a
//! bounded scan window.

use crate::constants::{CAMPAIGN_KEYWORDS, HEADER_SCAN_WINDOW};

/// Split a raw text blob into non-empty logical lines
///
/// Handles both `\n` and `\r\n` line endings. Whitespace-only lines are
/// dropped; relative order is preserved. Line content is kept as-is
/// (no trimming) so downstream tokenizing sees the original cells.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}

/// Infer the field delimiter from the first retained line
///
/// A semicolon anywhere in the first line selects `;`, otherwise `,`.
/// One global choice for the entire file; delimiters appearing only in
/// later lines are ignored.
pub fn detect_delimiter(first_line: &str) -> char {
    if first_line.contains(';') { ';' } else { ',' }
}

/// Locate the header row within the leading scan window
///
/// Returns the index of the first line (case-insensitively) containing
/// any campaign keyword. Exports commonly carry report metadata above
/// the header, so at most [`HEADER_SCAN_WINDOW`] lines are scanned.
/// Falls back to index 0 when no line matches.
pub fn locate_header(lines: &[&str]) -> usize {
    let window = lines.len().min(HEADER_SCAN_WINDOW);

    for (index, line) in lines[..window].iter().enumerate() {
        let lowered = line.to_lowercase();
        if CAMPAIGN_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            return index;
        }
    }

    0
}

/// Tokenize one line with quote-respecting delimiter splitting
///
/// A double quote toggles the in-quotes state and is dropped from the
/// token; the delimiter only separates fields while outside quotes.
/// Each token is trimmed. Rows are not required to be rectangular: a
/// row may yield fewer tokens than the header.
pub fn split_row(line: &str, delimiter: char) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == delimiter && !in_quotes {
            tokens.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    tokens.push(current.trim().to_string());

    tokens
}
