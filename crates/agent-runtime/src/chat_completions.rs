//! Chat-completions wire format
//!
//! OpenRouter and OpenAI speak the same JSON: a POST of
//! `{model, messages:[{role, content}]}` with bearer auth, answered by
//! `{choices:[{message:{content}}]}`.

use agent_core::{
    engine::GenerationOptions,
    error::{AgentError, Result},
    message::Role,
};
use serde::{Deserialize, Serialize};

use crate::http;

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: Role,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice
    pub fn into_text(self) -> std::result::Result<String, &'static str> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or("response contained no choices")?;
        choice
            .message
            .content
            .ok_or("first choice has no message content")
    }
}

/// One chat-completions endpoint bound to a credential and default model
#[derive(Clone, Debug)]
pub struct ChatCompletionsClient {
    label: &'static str,
    http: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl ChatCompletionsClient {
    pub fn new(
        label: &'static str,
        base_url: &str,
        api_key: String,
        model: String,
        timeout_secs: u64,
    ) -> Result<Self> {
        Ok(Self {
            label,
            http: http::client(timeout_secs)?,
            url: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key,
            model,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `prompt` as a single user message and return the reply text
    pub async fn complete(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        let model = options.model.as_deref().unwrap_or(&self.model);
        let request = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: Role::User,
                content: prompt,
            }],
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        tracing::debug!(provider = self.label, model, url = %self.url, "chat completion request");

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AgentError::generation(self.label, e))?;

        if !response.status().is_success() {
            let reason = http::status_reason(response).await;
            return Err(AgentError::generation(self.label, reason));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AgentError::generation(self.label, e))?;
        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| AgentError::generation(self.label, format!("malformed response: {e}")))?;

        parsed
            .into_text()
            .map_err(|reason| {
                AgentError::generation(self.label, format!("malformed response: {reason}"))
            })
    }
}
