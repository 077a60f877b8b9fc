//! Tests for line splitting, delimiter inference and header location

use crate::app::services::report_parser::lines::{
    detect_delimiter, locate_header, split_lines, split_row,
};
use crate::constants::HEADER_SCAN_WINDOW;

#[test]
fn test_split_lines_mixed_endings() {
    let text = "one\r\ntwo\nthree\r\n";
    assert_eq!(split_lines(text), vec!["one", "two", "three"]);
}

#[test]
fn test_split_lines_drops_blank_lines() {
    let text = "one\n\n   \ntwo\n\t\nthree";
    assert_eq!(split_lines(text), vec!["one", "two", "three"]);
}

#[test]
fn test_split_lines_empty_input() {
    assert!(split_lines("").is_empty());
    assert!(split_lines("\n\n  \n").is_empty());
}

#[test]
fn test_detect_delimiter_semicolon() {
    assert_eq!(detect_delimiter("Campaña;Costo;Resultados"), ';');
}

#[test]
fn test_detect_delimiter_defaults_to_comma() {
    assert_eq!(detect_delimiter("Campaign name,Amount spent"), ',');
    assert_eq!(detect_delimiter("no delimiters here"), ',');
}

#[test]
fn test_detect_delimiter_only_first_line_counts() {
    // Semicolons in later lines must not change the choice
    let lines = split_lines("a,b,c\nx;y;z");
    assert_eq!(detect_delimiter(lines[0]), ',');
}

#[test]
fn test_locate_header_skips_preamble() {
    let lines = vec![
        "Informe de rendimiento",
        "Periodo: junio",
        "Campaña;Costo;Resultados",
        "A;1;2",
    ];
    assert_eq!(locate_header(&lines), 2);
}

#[test]
fn test_locate_header_case_insensitive() {
    let lines = vec!["preamble", "CAMPAIGN NAME,SPEND"];
    assert_eq!(locate_header(&lines), 1);
}

#[test]
fn test_locate_header_defaults_to_first_line() {
    let lines = vec!["col_a,col_b", "1,2"];
    assert_eq!(locate_header(&lines), 0);
}

#[test]
fn test_locate_header_window_bound() {
    // A keyword match beyond the scan window is ignored
    let mut lines: Vec<String> = (0..HEADER_SCAN_WINDOW).map(|i| format!("filler {}", i)).collect();
    lines.push("Campaña;Costo".to_string());
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();

    assert_eq!(locate_header(&refs), 0);
}

#[test]
fn test_locate_header_match_at_window_edge() {
    let mut lines: Vec<String> = (0..HEADER_SCAN_WINDOW - 1)
        .map(|i| format!("filler {}", i))
        .collect();
    lines.push("Campaña;Costo".to_string());
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();

    assert_eq!(locate_header(&refs), HEADER_SCAN_WINDOW - 1);
}

#[test]
fn test_split_row_basic() {
    assert_eq!(split_row("a;b;c", ';'), vec!["a", "b", "c"]);
}

#[test]
fn test_split_row_trims_tokens() {
    assert_eq!(split_row(" a ; b ;c ", ';'), vec!["a", "b", "c"]);
}

#[test]
fn test_split_row_quoted_delimiter() {
    // A delimiter inside quotes does not separate fields
    assert_eq!(
        split_row("\"Launch, Phase One\",100", ','),
        vec!["Launch, Phase One", "100"]
    );
}

#[test]
fn test_split_row_drops_quote_characters() {
    assert_eq!(split_row("\"a\",\"b\"", ','), vec!["a", "b"]);
}

#[test]
fn test_split_row_trailing_empty_field() {
    assert_eq!(split_row("a,b,", ','), vec!["a", "b", ""]);
}

#[test]
fn test_split_row_ragged_rows_allowed() {
    // No rectangularity is enforced; short rows simply yield fewer tokens
    assert_eq!(split_row("a", ';'), vec!["a"]);
}
