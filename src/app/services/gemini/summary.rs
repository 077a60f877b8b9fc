//! AI-generated executive summary of campaign performance
//!
//! Builds a prompt from the dashboard statistics and asks Gemini for a
//! structured narrative. A failed summary is not an error for the
//! session: the caller gets `None`, logs stay on stderr, and prior
//! state is left untouched.

use serde_json::json;
use tracing::{debug, warn};

use crate::app::models::{AnalysisSummary, DashboardStats};

use super::client::{GeminiClient, Part};

/// Response schema for the narrative object
fn summary_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overview": { "type": "STRING" },
            "strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
            "weaknesses": { "type": "ARRAY", "items": { "type": "STRING" } },
            "recommendations": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["overview", "strengths", "weaknesses", "recommendations"]
    })
}

/// Build the summary prompt from the period statistics
fn summary_prompt(stats: &DashboardStats) -> String {
    let platform_name = stats.platform.display_name();
    let metric_name = stats.platform.results_label();

    let star_name = stats
        .star_campaign
        .as_ref()
        .map(|c| c.name.as_str())
        .unwrap_or("N/A");

    let critical = if stats.underperforming_campaigns.is_empty() {
        "Ninguna".to_string()
    } else {
        stats
            .underperforming_campaigns
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Como analista experto en Marketing Digital y {platform_name}, genera un resumen \
         ejecutivo profesional y accionable basado en estos datos de rendimiento REALES.\n\n\
         ESTADÍSTICAS DEL PERIODO:\n\
         - Inversión Total: {total_spend}\n\
         - {metric_name} Totales: {total_results}\n\
         - Costo Promedio por Conversión: {avg_cost}\n\n\
         CAMPAÑA LÍDER: {star_name}\n\
         CAMPAÑAS CRÍTICAS: {critical}\n\n\
         Estructura tu respuesta en JSON para un dashboard profesional en español.",
        total_spend = stats.total_spend,
        total_results = stats.total_results,
        avg_cost = stats.avg_cost_per_result,
    )
}

/// Request an executive summary for the given statistics
///
/// Returns `None` when the collaborator fails or its output cannot be
/// decoded; the failure is logged but never surfaced as an error.
pub async fn executive_summary(
    client: &GeminiClient,
    stats: &DashboardStats,
) -> Option<AnalysisSummary> {
    let prompt = summary_prompt(stats);
    debug!("Requesting executive summary");

    let payload = match client
        .generate_json(vec![Part::Text { text: prompt }], summary_schema())
        .await
    {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Summary generation failed: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<AnalysisSummary>(&payload) {
        Ok(summary) => Some(summary),
        Err(e) => {
            warn!("Could not decode summary response: {}", e);
            None
        }
    }
}
