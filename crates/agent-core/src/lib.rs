//! # agent-core
//!
//! Agent contract, message history and provider-agnostic LLM engine abstraction.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                         Agent                             │
//! │  ┌─────────────┐  ┌─────────────┐  ┌──────────────────┐  │
//! │  │   History   │  │  Lifecycle  │  │  EngineFactory   │  │
//! │  │ (user/asst) │  │ (log/count) │──│  → LlmEngine     │  │
//! │  └─────────────┘  └─────────────┘  └──────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//!                     AgentResponse { output, steps, metadata }
//! ```
//!
//! The `LlmEngine` trait lets agents swap between OpenRouter, OpenAI or
//! Gemini without changing agent logic.

pub mod agent;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod lifecycle;
pub mod message;
pub mod response;

pub use agent::{Agent, AgentDeps, History};
pub use config::{Provider, Settings};
pub use engine::{EngineFactory, GenerationOptions, LlmEngine};
pub use error::{AgentError, Result};
pub use event::Event;
pub use lifecycle::Lifecycle;
pub use message::{Message, Role};
pub use response::AgentResponse;
