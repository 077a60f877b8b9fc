//! HTTP client for the Gemini generateContent endpoint
//!
//! Thin wrapper over reqwest that posts content parts with a JSON
//! response schema and returns the model's text payload. Callers own
//! prompt construction and payload decoding.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::{Error, Result};

/// Client for Gemini structured-output requests
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

/// One content part of a generateContent request
#[derive(Debug)]
pub enum Part {
    /// Plain text (prompts)
    Text { text: String },
    /// Inline binary data, base64 encoded
    InlineData { inline_data: InlineData },
}

/// Base64-encoded inline document data
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<PartPayload>,
}

/// Wire form of a part; `Part` is flattened into the object shape the
/// API expects
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PartPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Create a client from validated configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        if config.gemini.api_key.trim().is_empty() {
            return Err(Error::configuration(
                "Gemini API key is not set (use --api-key, the config file, or GEMINI_API_KEY)",
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.gemini.timeout_secs))
            .build()
            .map_err(|e| Error::http("Failed to build HTTP client", e))?;

        Ok(Self {
            http,
            api_key: config.gemini.api_key.clone(),
            model: config.gemini.model.clone(),
            base_url: config.gemini.api_base.clone(),
        })
    }

    /// Post content parts and return the model's JSON text payload
    ///
    /// The response schema constrains the model to emit parseable JSON;
    /// decoding that JSON is left to the caller since the shape differs
    /// per operation.
    pub async fn generate_json(
        &self,
        parts: Vec<Part>,
        response_schema: serde_json::Value,
    ) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: parts.into_iter().map(PartPayload::from).collect(),
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            },
        };

        let url = format!("{}/{}:generateContent", self.base_url, self.model);
        debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::http("Gemini request failed", e))?
            .error_for_status()
            .map_err(|e| Error::http("Gemini request rejected", e))?;

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::http("Failed to read Gemini response", e))?;

        // An empty payload falls through to the caller's JSON decode,
        // which reports it as a decode failure for that operation.
        let text = body
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        Ok(text)
    }
}

impl From<Part> for PartPayload {
    fn from(part: Part) -> Self {
        match part {
            Part::Text { text } => PartPayload {
                text: Some(text),
                inline_data: None,
            },
            Part::InlineData { inline_data } => PartPayload {
                text: None,
                inline_data: Some(inline_data),
            },
        }
    }
}
