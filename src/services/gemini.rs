// src/services/gemini.rs
//! Gemini `generateContent` over plain REST, no SDK.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::services::coach::{CoachError, CoachModel};

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate; `None` if there is no candidate at all.
    pub(crate) fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text = candidate
            .content
            .as_ref()
            .map(|c| c.parts.iter().filter_map(|p| p.text.as_deref()).collect::<String>())
            .unwrap_or_default();
        Some(text)
    }
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl CoachModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, CoachError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(CoachError::MissingApiKey)?;

        let body = GenerateRequest {
            contents: vec![Content { parts: vec![Part { text: prompt }] }],
        };

        debug!(model = %self.model, "Sending generateContent request");
        let resp = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CoachError::Status { status: status.as_u16(), body });
        }

        let parsed: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| CoachError::Malformed(e.to_string()))?;

        // a blocked prompt answers without candidates; treat it as an empty reply
        Ok(parsed.text().unwrap_or_default())
    }
}
