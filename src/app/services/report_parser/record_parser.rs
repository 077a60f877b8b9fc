//! Row filtering and campaign record assembly
//!
//! The final pipeline stage: decide whether a tokenized row is a real
//! campaign row, and if so normalize its cells into a [`Campaign`]
//! record.

use crate::app::models::{Campaign, CampaignStatus};
use crate::constants::{SUMMARY_ROW_KEYWORDS, TEXT_RECORD_ID_PREFIX};

use super::columns::{ColumnMap, cell};
use super::numeric::normalize_number;

/// Check whether a row's name cell marks it as a summary/total row
///
/// Matching is case-insensitive and on substrings, not whole fields:
/// "Total Awareness Campaign" is excluded, and so is "The Totally New
/// Campaign". The over-eager match is a known tolerance/precision
/// trade-off inherited from the exports this parser targets. An empty
/// or whitespace-only name also excludes the row.
pub fn is_summary_row(name_cell: &str) -> bool {
    let lowered = name_cell.to_lowercase();
    if lowered.trim().is_empty() {
        return true;
    }
    SUMMARY_ROW_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Normalize one tokenized data row into a campaign record
///
/// Returns `None` for summary/total and blank rows. `position` is the
/// index among surviving rows and becomes part of the record id.
pub fn parse_campaign_row(row: &[String], columns: &ColumnMap, position: usize) -> Option<Campaign> {
    let name_cell = cell(row, columns.name).unwrap_or("");
    if is_summary_row(name_cell) {
        return None;
    }

    let spend = normalize_number(cell(row, columns.spend).unwrap_or(""));
    let results = normalize_number(cell(row, columns.results).unwrap_or(""));
    let reach = normalize_number(cell(row, columns.reach).unwrap_or(""));
    let impressions = normalize_number(cell(row, columns.impressions).unwrap_or(""));

    Some(Campaign {
        id: format!("{}-{}", TEXT_RECORD_ID_PREFIX, position),
        name: Campaign::display_name(name_cell),
        spend,
        results,
        cost_per_result: Campaign::derive_cost_per_result(spend, results),
        reach,
        impressions,
        status: CampaignStatus::Active,
    })
}
