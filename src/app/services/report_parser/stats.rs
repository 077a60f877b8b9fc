//! Parsing statistics and result structures for report processing
//!
//! This module provides types for tracking what the tolerant parser
//! decided and silently absorbed, so callers can observe degradation
//! that would otherwise be invisible.

use serde::Serialize;

use crate::app::models::Campaign;

use super::columns::ColumnRole;

/// Parsing result with campaign records and diagnostics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Normalized campaign records in source row order
    pub campaigns: Vec<Campaign>,

    /// Parse diagnostics
    pub stats: ParseStats,
}

/// Diagnostics for one parse
///
/// The parser never fails, so these stats are the only way to observe
/// what it skipped or could not resolve.
#[derive(Debug, Clone, Serialize)]
pub struct ParseStats {
    /// Number of data rows examined (lines after the header)
    pub total_rows: usize,

    /// Number of campaign records produced
    pub campaigns_parsed: usize,

    /// Rows dropped as summary/total or blank rows
    pub rows_filtered: usize,

    /// Delimiter inferred from the first retained line
    pub delimiter: char,

    /// Index of the line used as the header row
    pub header_row: usize,

    /// Semantic roles that matched no header column; every record's
    /// corresponding field defaulted to zero
    pub unresolved_roles: Vec<ColumnRole>,
}

impl ParseStats {
    /// Create empty stats for a degenerate input
    pub fn empty() -> Self {
        Self {
            total_rows: 0,
            campaigns_parsed: 0,
            rows_filtered: 0,
            delimiter: ',',
            header_row: 0,
            unresolved_roles: Vec::new(),
        }
    }

    /// Whether any role failed to resolve
    pub fn has_unresolved_roles(&self) -> bool {
        !self.unresolved_roles.is_empty()
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::empty()
    }
}
