//! Core report parser orchestration
//!
//! Runs the pipeline stages in order over one uploaded text blob:
//! line splitting, delimiter and header location, column resolution,
//! then per-row normalization. The whole pipeline is a pure function of
//! (raw text, platform hint); no state survives between invocations.

use tracing::{debug, warn};

use crate::app::models::Platform;

use super::columns::ColumnMap;
use super::lines::{detect_delimiter, locate_header, split_lines, split_row};
use super::record_parser::parse_campaign_row;
use super::stats::{ParseResult, ParseStats};

/// Tolerant parser for delimited advertising report text
///
/// The parser focuses on never blocking the user: unresolved columns
/// and malformed cells degrade to zeros, summary rows are filtered,
/// and degenerate input yields an empty result rather than an error.
#[derive(Debug, Default)]
pub struct ReportParser;

impl ReportParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse the raw text of an uploaded report into campaign records
    ///
    /// The platform discriminator is accepted for future
    /// platform-specific rules; parsing currently applies identical
    /// logic for every platform. Inputs with fewer than 2 retained
    /// lines produce an empty result.
    pub fn parse_text(&self, text: &str, platform: Platform) -> ParseResult {
        debug!("Parsing {} text report", platform.display_name());

        let lines = split_lines(text);
        if lines.len() < 2 {
            debug!("Degenerate input: {} non-empty lines", lines.len());
            return ParseResult {
                campaigns: Vec::new(),
                stats: ParseStats::empty(),
            };
        }

        let delimiter = detect_delimiter(lines[0]);
        let header_row = locate_header(&lines);
        debug!(delimiter = %delimiter, header_row, "Located report structure");

        let headers: Vec<String> = split_row(lines[header_row], delimiter)
            .iter()
            .map(|h| h.trim_matches('"').trim().to_lowercase())
            .collect();

        let columns = ColumnMap::resolve(&headers);
        debug!(?columns, "Resolved columns");

        let unresolved_roles = columns.unresolved_roles();
        for role in &unresolved_roles {
            warn!(
                "No column matched the '{}' role; its values will default to zero",
                role
            );
        }

        let mut campaigns = Vec::new();
        let mut total_rows = 0;
        let mut rows_filtered = 0;

        for line in &lines[header_row + 1..] {
            total_rows += 1;
            let row = split_row(line, delimiter);
            match parse_campaign_row(&row, &columns, campaigns.len()) {
                Some(campaign) => campaigns.push(campaign),
                None => rows_filtered += 1,
            }
        }

        debug!(
            "Parsed {} campaigns from {} rows ({} filtered)",
            campaigns.len(),
            total_rows,
            rows_filtered
        );

        let stats = ParseStats {
            total_rows,
            campaigns_parsed: campaigns.len(),
            rows_filtered,
            delimiter,
            header_row,
            unresolved_roles,
        };

        ParseResult { campaigns, stats }
    }
}
