//! Gemini Engine
//!
//! `LlmEngine` over the Generative Language REST API
//! (`models/{model}:generateContent`). The key travels in the
//! `x-goog-api-key` header.

use agent_core::{
    config::{Provider, Settings},
    engine::{GenerationOptions, LlmEngine},
    error::{AgentError, Result},
};
use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::http::{self, EnvLookup};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const FALLBACK_API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const LABEL: &str = "Gemini";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    name: String,
}

impl GenerateResponse {
    fn into_text(self) -> std::result::Result<String, &'static str> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or("response contained no candidates")?;
        let parts = candidate
            .content
            .ok_or("first candidate has no content")?
            .parts;

        let texts: Vec<String> = parts.into_iter().filter_map(|p| p.text).collect();
        if texts.is_empty() {
            return Err("first candidate has no text parts");
        }
        Ok(texts.concat())
    }
}

/// Gemini LLM engine
#[derive(Clone, Debug)]
pub struct GeminiEngine {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiEngine {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<Self> {
        Ok(Self {
            http: http::client(timeout_secs)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Create from settings, reading `GEMINI_API_KEY` (or `GOOGLE_API_KEY`)
    pub fn from_env(settings: &Settings) -> Result<Self> {
        Self::from_lookup(settings, &http::process_env)
    }

    pub fn from_lookup(settings: &Settings, lookup: EnvLookup<'_>) -> Result<Self> {
        let api_key = http::credential(lookup, &[API_KEY_VAR, FALLBACK_API_KEY_VAR])?;
        Self::new(
            api_key,
            settings.model_for(Provider::Gemini),
            DEFAULT_BASE_URL,
            settings.request_timeout_secs,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_url(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{model}:generateContent", self.base_url)
    }

    /// List model names visible to the configured key, following pagination.
    /// Stops at the first page token already seen.
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/models", self.base_url);
        let mut names = Vec::new();
        let mut seen = HashSet::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.http.get(&url).header(API_KEY_HEADER, &self.api_key);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let response = request
                .send()
                .await
                .map_err(|e| AgentError::Generation(format!("{LABEL} model listing failed: {e}")))?;
            if !response.status().is_success() {
                let reason = http::status_reason(response).await;
                return Err(AgentError::Generation(format!(
                    "{LABEL} model listing failed: {reason}"
                )));
            }

            let page: ListModelsResponse = response.json().await.map_err(|e| {
                AgentError::Generation(format!(
                    "{LABEL} model listing failed: malformed response: {e}"
                ))
            })?;
            names.extend(page.models.into_iter().map(|m| m.name));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) if seen.insert(token.clone()) => page_token = Some(token),
                Some(token) => {
                    tracing::debug!(provider = LABEL, token = %token, "page token repeated");
                    break;
                }
                None => break,
            }
        }

        Ok(names)
    }
}

#[async_trait]
impl LlmEngine for GeminiEngine {
    fn name(&self) -> &str {
        Provider::Gemini.as_str()
    }

    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        let model = options.model.as_deref().unwrap_or(&self.model);
        let url = self.generate_url(model);
        let generation_config = (options.temperature.is_some() || options.max_tokens.is_some())
            .then_some(GenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_tokens,
            });
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config,
        };

        tracing::debug!(provider = LABEL, model, "generateContent request");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AgentError::generation(LABEL, e))?;

        if !response.status().is_success() {
            let reason = http::status_reason(response).await;
            return Err(AgentError::generation(LABEL, reason));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AgentError::generation(LABEL, e))?;
        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| AgentError::generation(LABEL, format!("malformed response: {e}")))?;

        parsed
            .into_text()
            .map_err(|reason| {
                AgentError::generation(LABEL, format!("malformed response: {reason}"))
            })
    }
}
