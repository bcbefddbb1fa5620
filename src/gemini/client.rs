//! Gemini client struct, request building, and response parsing.

use std::time::Duration;

use crate::{Citation, QueryError, QueryResult, Role, Turn};

use super::config::GeminiConfig;
use super::transport::{ReqwestTransport, Transport};

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Per-attempt request timeout.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Substituted when a response carries no text part.
pub(crate) const MISSING_TEXT_PLACEHOLDER: &str = "Could not generate content.";

/// Map conversation roles onto the wire vocabulary. The two vocabularies
/// are coupled nowhere else.
pub(crate) fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
    }
}

/// Gemini API client with Google Search grounding enabled.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) transport: Box<dyn Transport>,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            transport: Box::new(ReqwestTransport::new(REQUEST_TIMEOUT)),
        }
    }

    pub(crate) fn with_transport(config: GeminiConfig, transport: Box<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Full endpoint URL. The key rides as a query parameter, so never log
    /// the result.
    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.config.model, self.config.api_key
        )
    }

    /// Build the JSON request body: prior turns (minus synthetic ones) plus
    /// the new prompt, grounding tool, and system instruction.
    pub(crate) fn build_request_body(
        &self,
        prompt: &str,
        history: &[Turn],
        system_instruction: &str,
    ) -> serde_json::Value {
        let mut contents: Vec<serde_json::Value> = history
            .iter()
            .filter(|turn| !turn.synthetic)
            .map(|turn| {
                serde_json::json!({
                    "role": wire_role(turn.role),
                    "parts": [{ "text": turn.text }]
                })
            })
            .collect();

        contents.push(serde_json::json!({
            "role": "user",
            "parts": [{ "text": prompt }]
        }));

        serde_json::json!({
            "contents": contents,
            "tools": [{ "google_search": {} }],
            "systemInstruction": {
                "parts": [{ "text": system_instruction }]
            }
        })
    }

    /// Parse a successful response body into answer text plus citations.
    ///
    /// The grounding metadata schema is undocumented upstream, so every
    /// nested field access defaults instead of failing.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<QueryResult, QueryError> {
        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| QueryError::Unexpected("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| QueryError::Unexpected("empty candidates".to_string()))?;

        let answer = first["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or(MISSING_TEXT_PLACEHOLDER)
            .to_string();

        let citations = first["groundingMetadata"]["groundingAttributions"]
            .as_array()
            .map(|attributions| {
                attributions
                    .iter()
                    .filter_map(|attribution| attribution.get("web"))
                    .map(|web| Citation {
                        title: web["title"].as_str().unwrap_or("Link").to_string(),
                        uri: web["uri"].as_str().unwrap_or("#").to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(QueryResult { answer, citations })
    }
}
