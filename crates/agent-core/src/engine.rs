//! LLM Engine Strategy
//!
//! Defines the interface every text-generation backend implements
//! (OpenRouter, OpenAI, Gemini) so agents stay provider-agnostic.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agent_core::engine::{GenerationOptions, LlmEngine};
//!
//! let engine = OpenRouterEngine::from_env(&settings)?;
//! let text = engine.generate("Summarize this", &GenerationOptions::default()).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AgentError, Result};

/// Provider-specific generation knobs. Engines ignore what they do not support.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model identifier override (e.g., "openai/gpt-4o-mini", "gemini-1.5-flash")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl GenerationOptions {
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            ..Self::default()
        }
    }
}

/// Strategy trait for text-generation backends
#[async_trait]
pub trait LlmEngine: Send + Sync {
    /// Provider label recorded in response metadata
    fn name(&self) -> &str;

    /// Perform exactly one provider call and return its text
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String>;

    /// Structured tool invocation. No engine provides this yet.
    async fn call_tools(&self, _prompt: &str, _tools: &[Value]) -> Result<Value> {
        Err(AgentError::NotImplemented(format!(
            "{} engine does not support tool calls",
            self.name()
        )))
    }
}

/// Builds a fresh engine for each agent run
pub trait EngineFactory: Send + Sync {
    fn build(&self) -> Result<Box<dyn LlmEngine>>;
}

impl<F> EngineFactory for F
where
    F: Fn() -> Result<Box<dyn LlmEngine>> + Send + Sync,
{
    fn build(&self) -> Result<Box<dyn LlmEngine>> {
        self()
    }
}
