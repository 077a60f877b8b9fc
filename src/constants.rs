//! Application constants for the Ads Hub processor
//!
//! This module contains the keyword tables driving tolerant report
//! parsing, along with default values used throughout the application.

// =============================================================================
// Header Location
// =============================================================================

/// Maximum number of leading lines scanned when locating the header row
pub const HEADER_SCAN_WINDOW: usize = 25;

/// Keywords identifying the header row (matched case-insensitively as
/// substrings). Exports arrive in English and Spanish, with and without
/// the tilde.
pub const CAMPAIGN_KEYWORDS: &[&str] = &["campaign", "campaña", "campana", "nombre de la"];

// =============================================================================
// Row Filtering
// =============================================================================

/// Substrings marking summary/grand-total rows that must be excluded.
///
/// Substring matching is intentionally loose: a campaign legitimately
/// named "Total Awareness" is also dropped. Tolerance over precision.
pub const SUMMARY_ROW_KEYWORDS: &[&str] = &["total", "resumen"];

/// Placeholder name for rows whose name cell is empty after trimming
pub const NAME_PLACEHOLDER: &str = "Campaña sin nombre";

/// Literal cell value ad platforms emit for "no data"
pub const MISSING_CELL_MARKER: &str = "--";

// =============================================================================
// Record Identity
// =============================================================================

/// Record id prefix for the text (CSV) ingestion path
pub const TEXT_RECORD_ID_PREFIX: &str = "c";

/// Record id prefix for the document (PDF) ingestion path
///
/// Distinct prefixes keep ids collision-free when both paths feed the
/// same session.
pub const DOCUMENT_RECORD_ID_PREFIX: &str = "g";

// =============================================================================
// Dashboard Statistics
// =============================================================================

/// A campaign is flagged as underperforming when its cost per result
/// exceeds the average by this factor.
pub const UNDERPERFORMING_FACTOR: f64 = 1.2;

// =============================================================================
// Gemini API Defaults
// =============================================================================

/// Default Gemini model used for extraction and summaries
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Base URL of the Gemini generateContent endpoint
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default request timeout for Gemini calls, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Environment variable overriding the Gemini model name
pub const MODEL_ENV_VAR: &str = "ADSHUB_MODEL";

/// Config file name inside the user configuration directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name for configuration lookup
pub const CONFIG_DIR_NAME: &str = "adshub-processor";
