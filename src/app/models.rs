//! Data models for advertising report processing
//!
//! This module contains the core data structures for representing
//! normalized campaign performance records, dashboard statistics and
//! AI-generated analysis summaries.

use serde::{Deserialize, Serialize};

use crate::constants::NAME_PLACEHOLDER;

// =============================================================================
// Platform Discriminator
// =============================================================================

/// Source ad platform of an uploaded report
///
/// The caller knows the platform from which upload control was used.
/// The text-parsing path accepts it for future platform-specific rules
/// but currently applies identical logic regardless of the value; only
/// the document-extraction path branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Meta Ads (CSV export)
    Meta,
    /// Google Ads (PDF export)
    Google,
}

impl Platform {
    /// Human-readable platform name for prompts and reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Meta => "Meta Ads",
            Platform::Google => "Google Ads",
        }
    }

    /// Label the platform uses for its results metric
    pub fn results_label(&self) -> &'static str {
        match self {
            Platform::Meta => "Resultados",
            Platform::Google => "Conversiones",
        }
    }
}

// =============================================================================
// Campaign Record
// =============================================================================

/// Campaign lifecycle status
///
/// Exports only carry rows for running campaigns, so no lifecycle
/// transitions are modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
    Active,
}

/// One normalized row of advertising performance data
///
/// Records are immutable value objects produced once per upload and
/// replaced wholesale on the next upload. No cross-field relation (such
/// as `reach <= impressions`) is enforced; the data is trusted as
/// extracted. Field names serialize in camelCase to match the wire
/// shape the Gemini extraction path returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Identifier unique within one parse result, derived from row
    /// position with an ingestion-path prefix ("c-" for text, "g-" for
    /// document extraction)
    pub id: String,

    /// Trimmed display name, never empty (placeholder when the source
    /// cell was blank)
    pub name: String,

    /// Amount spent
    pub spend: f64,

    /// Count of valuable actions (conversions/interactions)
    pub results: f64,

    /// Cost per result, `spend / results` when results are positive
    pub cost_per_result: f64,

    /// Unique audience reached
    pub reach: f64,

    /// Total impression count
    pub impressions: f64,

    /// Lifecycle status marker
    pub status: CampaignStatus,
}

impl Campaign {
    /// Derive cost per result from spend and results
    ///
    /// Shared by both ingestion paths so they produce identical
    /// downstream contracts.
    pub fn derive_cost_per_result(spend: f64, results: f64) -> f64 {
        if results > 0.0 { spend / results } else { 0.0 }
    }

    /// Normalize a raw name cell: strip surrounding quotes, trim, and
    /// fall back to the placeholder when empty
    pub fn display_name(raw: &str) -> String {
        let trimmed = raw.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            NAME_PLACEHOLDER.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

// =============================================================================
// Dashboard Statistics
// =============================================================================

/// Aggregate statistics computed over one parse result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of spend across all campaigns
    pub total_spend: f64,

    /// Sum of results across all campaigns
    pub total_results: f64,

    /// Average cost per result (`total_spend / total_results`, zero
    /// when there are no results)
    pub avg_cost_per_result: f64,

    /// Best performing campaign: most results, ties broken by lower
    /// cost per result
    pub star_campaign: Option<Campaign>,

    /// Campaigns whose cost per result exceeds the average by more
    /// than the underperforming factor
    pub underperforming_campaigns: Vec<Campaign>,

    /// Platform the statistics were computed for
    pub platform: Platform,
}

// =============================================================================
// Analysis Summary
// =============================================================================

/// AI-generated executive summary of campaign performance
///
/// Returned by the Gemini collaborator; validated only for structural
/// presence, never for content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Narrative overview of the reporting period
    pub overview: String,

    /// Strengths observed in the data
    pub strengths: Vec<String>,

    /// Weaknesses or risks observed in the data
    pub weaknesses: Vec<String>,

    /// Actionable recommendations
    pub recommendations: Vec<String>,
}
