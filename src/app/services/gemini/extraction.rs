//! Campaign extraction from PDF report documents
//!
//! The document ingestion path: raw PDF bytes go to Gemini with a
//! response schema shaped like the campaign record, and the returned
//! items are mapped onto the same record contract the text parser
//! produces. There is no partial-result recovery; any failure is
//! terminal for the upload.

use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::app::models::{Campaign, CampaignStatus};
use crate::constants::DOCUMENT_RECORD_ID_PREFIX;
use crate::{Error, Result};

use super::client::{GeminiClient, InlineData, Part};

/// Extraction instructions sent alongside the document
///
/// Exports are Spanish-language reports, so the prompt is too. The
/// critical instructions: no rounding, one item per campaign, skip
/// total/account/summary rows, plain numeric JSON values.
const EXTRACTION_PROMPT: &str = "\
Analiza este informe de Google Ads en PDF y extrae los datos EXACTOS de las tablas.

INSTRUCCIONES CRÍTICAS:
1. NO REDONDEES NINGÚN VALOR. Si el costo es 77625.43, extrae 77625.43.
2. Identifica cada campaña individual.
3. Extrae:
   - \"name\": Nombre exacto de la campaña.
   - \"spend\": El valor de la columna \"Costo\".
   - \"results\": El valor de la columna \"Conversiones\" (si no hay, usa \"Interacciones\").
   - \"costPerResult\": El valor de \"Costo/conv.\".
   - \"reach\": El valor de \"Impresiones\".
4. IGNORA las filas que digan \"Total\", \"Cuenta\" o resúmenes. Solo queremos las filas de campañas individuales.
5. Los números deben ser devueltos como tipos numéricos puros en el JSON, sin símbolos de moneda.";

/// Wire shape of one extracted item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractedCampaign {
    name: String,
    spend: f64,
    results: f64,
    #[serde(default)]
    cost_per_result: Option<f64>,
    reach: f64,
}

/// Response schema constraining the model to a record array
fn extraction_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "spend": { "type": "NUMBER" },
                "results": { "type": "NUMBER" },
                "costPerResult": { "type": "NUMBER" },
                "reach": { "type": "NUMBER" }
            },
            "required": ["name", "spend", "results", "reach"]
        }
    })
}

/// Convert one wire item into a campaign record
///
/// The supplied cost per result is preferred; it is recomputed from
/// spend and results only when absent or zero. Google reports carry
/// impressions in the reach column, so both fields share the value.
fn into_campaign(item: ExtractedCampaign, index: usize) -> Campaign {
    let cost_per_result = match item.cost_per_result {
        Some(value) if value != 0.0 => value,
        _ => Campaign::derive_cost_per_result(item.spend, item.results),
    };

    Campaign {
        id: format!("{}-{}", DOCUMENT_RECORD_ID_PREFIX, index),
        name: Campaign::display_name(&item.name),
        spend: item.spend,
        results: item.results,
        cost_per_result,
        reach: item.reach,
        impressions: item.reach,
        status: CampaignStatus::Active,
    }
}

/// Extract campaign records from a PDF report document
pub async fn extract_campaigns(client: &GeminiClient, pdf_bytes: &[u8]) -> Result<Vec<Campaign>> {
    debug!("Extracting campaigns from {} byte document", pdf_bytes.len());

    let encoded = base64::engine::general_purpose::STANDARD.encode(pdf_bytes);
    let parts = vec![
        Part::InlineData {
            inline_data: InlineData {
                mime_type: "application/pdf".to_string(),
                data: encoded,
            },
        },
        Part::Text {
            text: EXTRACTION_PROMPT.to_string(),
        },
    ];

    let payload = client
        .generate_json(parts, extraction_schema())
        .await
        .map_err(|e| Error::extraction(format!("Document extraction request failed: {}", e)))?;

    let items: Vec<ExtractedCampaign> = serde_json::from_str(&payload).map_err(|e| {
        Error::extraction(format!("Could not decode extracted campaign data: {}", e))
    })?;

    let campaigns: Vec<Campaign> = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| into_campaign(item, index))
        .collect();

    info!("Extracted {} campaigns from document", campaigns.len());
    Ok(campaigns)
}
