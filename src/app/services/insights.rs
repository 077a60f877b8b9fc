//! Dashboard statistics over normalized campaign records
//!
//! Aggregates one parse result into the headline numbers the dashboard
//! shows and the summary prompt is built from: totals, average cost per
//! result, the star campaign and the underperformers.

use crate::app::models::{Campaign, DashboardStats, Platform};
use crate::constants::UNDERPERFORMING_FACTOR;

/// Compute dashboard statistics for a set of campaign records
///
/// The star campaign has the most results, ties broken by lower cost
/// per result. Underperformers exceed the average cost per result by
/// more than [`UNDERPERFORMING_FACTOR`]. An empty slice yields zeroed
/// stats with no star.
pub fn compute_stats(campaigns: &[Campaign], platform: Platform) -> DashboardStats {
    if campaigns.is_empty() {
        return DashboardStats {
            total_spend: 0.0,
            total_results: 0.0,
            avg_cost_per_result: 0.0,
            star_campaign: None,
            underperforming_campaigns: Vec::new(),
            platform,
        };
    }

    let total_spend: f64 = campaigns.iter().map(|c| c.spend).sum();
    let total_results: f64 = campaigns.iter().map(|c| c.results).sum();
    let avg_cost_per_result = if total_results > 0.0 {
        total_spend / total_results
    } else {
        0.0
    };

    let mut ranked: Vec<&Campaign> = campaigns.iter().collect();
    ranked.sort_by(|a, b| {
        b.results
            .partial_cmp(&a.results)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                a.cost_per_result
                    .partial_cmp(&b.cost_per_result)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });
    let star_campaign = ranked.first().map(|c| (*c).clone());

    let underperforming_campaigns = campaigns
        .iter()
        .filter(|c| c.cost_per_result > avg_cost_per_result * UNDERPERFORMING_FACTOR)
        .cloned()
        .collect();

    DashboardStats {
        total_spend,
        total_results,
        avg_cost_per_result,
        star_campaign,
        underperforming_campaigns,
        platform,
    }
}
