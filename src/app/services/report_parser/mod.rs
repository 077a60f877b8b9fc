//! Tolerant parser for advertising performance report exports
//!
//! This module normalizes loosely structured CSV exports into typed
//! campaign records. Real-world exports vary by platform, language and
//! locale: delimiters differ, the header row floats below preamble
//! lines, and numeric cells mix thousands/decimal separator
//! conventions. The parser absorbs all of that with heuristics and
//! never fails; malformed cells degrade to zeros.
//!
//! ## Architecture
//!
//! Parsing runs as four sequential stages:
//! - [`lines`] - line splitting, delimiter inference and header location
//! - [`columns`] - semantic column resolution from header keywords
//! - [`numeric`] - locale-heuristic numeric cell normalization
//! - [`record_parser`] - row filtering and campaign record assembly
//!
//! [`parser`] orchestrates the stages and [`stats`] carries the parse
//! diagnostics, including the unresolved-column report.
//!
//! ## Usage
//!
//! ```rust
//! use adshub_processor::app::services::report_parser::ReportParser;
//! use adshub_processor::app::models::Platform;
//!
//! let parser = ReportParser::new();
//! let result = parser.parse_text("Campaña;Costo;Resultados\nA;1.000;10", Platform::Meta);
//!
//! assert_eq!(result.campaigns.len(), 1);
//! assert_eq!(result.campaigns[0].spend, 1000.0);
//! ```

pub mod columns;
pub mod lines;
pub mod numeric;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use columns::{ColumnMap, ColumnRole};
pub use parser::ReportParser;
pub use stats::{ParseResult, ParseStats};
