//! OpenAI Engine

use agent_core::{
    config::{Provider, Settings},
    engine::{GenerationOptions, LlmEngine},
    error::Result,
};
use async_trait::async_trait;

use crate::chat_completions::ChatCompletionsClient;
use crate::http::{self, EnvLookup};

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI LLM engine (same wire format as OpenRouter)
#[derive(Clone, Debug)]
pub struct OpenAiEngine {
    client: ChatCompletionsClient,
}

impl OpenAiEngine {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<Self> {
        Ok(Self {
            client: ChatCompletionsClient::new(
                "OpenAI",
                base_url,
                api_key.into(),
                model.into(),
                timeout_secs,
            )?,
        })
    }

    pub fn from_env(settings: &Settings) -> Result<Self> {
        Self::from_lookup(settings, &http::process_env)
    }

    pub fn from_lookup(settings: &Settings, lookup: EnvLookup<'_>) -> Result<Self> {
        let api_key = http::credential(lookup, &[API_KEY_VAR])?;
        Self::new(
            api_key,
            settings.model_for(Provider::OpenAi),
            DEFAULT_BASE_URL,
            settings.request_timeout_secs,
        )
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }
}

#[async_trait]
impl LlmEngine for OpenAiEngine {
    fn name(&self) -> &str {
        Provider::OpenAi.as_str()
    }

    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        self.client.complete(prompt, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_missing_key_names_variable() {
        let err = OpenAiEngine::from_lookup(&Settings::default(), &|_| None).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: OPENAI_API_KEY not set");
    }

    #[test]
    fn test_uses_openai_default_model() {
        let engine =
            OpenAiEngine::from_lookup(&Settings::default(), &|_| Some("k".into())).unwrap();
        assert_eq!(engine.model(), "gpt-4.1");
    }

    #[tokio::test]
    async fn test_generate_against_mock() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "from openai"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let engine = OpenAiEngine::new("sk-test", "gpt-4.1", &server.uri(), 30).unwrap();
        let text = engine.generate("hello", &GenerationOptions::default()).await.unwrap();
        assert_eq!(text, "from openai");
    }

    #[tokio::test]
    async fn test_errors_carry_openai_label() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let engine = OpenAiEngine::new("sk-test", "gpt-4.1", &server.uri(), 30).unwrap();
        let err = engine.generate("hello", &GenerationOptions::default()).await.unwrap_err();
        assert!(err.to_string().starts_with("OpenAI generation failed: HTTP 500"));
    }
}
