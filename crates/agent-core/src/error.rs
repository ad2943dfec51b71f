//! Error Types

use thiserror::Error;

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Agent error types
#[derive(Error, Debug)]
pub enum AgentError {
    /// Missing credential, bad setting or invalid registry entry
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Registry pointed at a module or class that is not compiled in
    #[error("{0}")]
    Resolution(String),

    /// Provider call failed or returned an unexpected shape
    #[error("{0}")]
    Generation(String),

    /// Capability reserved but not provided by this engine
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AgentError {
    /// Build a generation error carrying the provider label
    pub fn generation(provider: &str, reason: impl std::fmt::Display) -> Self {
        Self::Generation(format!("{provider} generation failed: {reason}"))
    }

    /// Build a configuration error for a missing environment variable
    pub fn missing_env(var: &str) -> Self {
        Self::Configuration(format!("{var} not set"))
    }
}
