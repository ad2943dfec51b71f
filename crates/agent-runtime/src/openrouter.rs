//! OpenRouter Engine
//!
//! `LlmEngine` over OpenRouter's chat-completions API.

use agent_core::{
    config::{Provider, Settings},
    engine::{GenerationOptions, LlmEngine},
    error::Result,
};
use async_trait::async_trait;

use crate::chat_completions::ChatCompletionsClient;
use crate::http::{self, EnvLookup};

pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// OpenRouter LLM engine
#[derive(Clone, Debug)]
pub struct OpenRouterEngine {
    client: ChatCompletionsClient,
}

impl OpenRouterEngine {
    /// Create with an explicit key, model and endpoint
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<Self> {
        Ok(Self {
            client: ChatCompletionsClient::new(
                "OpenRouter",
                base_url,
                api_key.into(),
                model.into(),
                timeout_secs,
            )?,
        })
    }

    /// Create from settings, reading the key from the environment
    pub fn from_env(settings: &Settings) -> Result<Self> {
        Self::from_lookup(settings, &http::process_env)
    }

    /// Create from settings with an arbitrary variable lookup
    pub fn from_lookup(settings: &Settings, lookup: EnvLookup<'_>) -> Result<Self> {
        let api_key = http::credential(lookup, &[API_KEY_VAR])?;
        Self::new(
            api_key,
            settings.model_for(Provider::OpenRouter),
            DEFAULT_BASE_URL,
            settings.request_timeout_secs,
        )
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }
}

#[async_trait]
impl LlmEngine for OpenRouterEngine {
    fn name(&self) -> &str {
        Provider::OpenRouter.as_str()
    }

    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        self.client.complete(prompt, options).await
    }
}
