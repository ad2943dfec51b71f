//! # agent-runtime
//!
//! Engine implementations for the agent system.
//!
//! ## Engines
//!
//! - **OpenRouter** (default): chat-completions over `openrouter.ai`
//! - **OpenAI**: the same wire format against `api.openai.com`
//! - **Gemini**: Generative Language `generateContent`
//!
//! Each engine resolves its API key from the environment when constructed
//! and performs one request per `generate` call, with a fixed timeout and no
//! retry.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agent_runtime::ProviderEngineFactory;
//!
//! let factory = ProviderEngineFactory::new(Settings::from_env()?);
//! let engine = factory.build()?;
//! let text = engine.generate("Hello", &GenerationOptions::default()).await?;
//! ```

mod chat_completions;
mod http;

pub mod factory;
pub mod gemini;
pub mod openai;
pub mod openrouter;

pub use chat_completions::ChatCompletionsClient;
pub use factory::ProviderEngineFactory;
pub use gemini::GeminiEngine;
pub use openai::OpenAiEngine;
pub use openrouter::OpenRouterEngine;

// Re-export core types for convenience
pub use agent_core::{AgentError, EngineFactory, GenerationOptions, LlmEngine, Result, Settings};
