//! Runtime Settings
//!
//! Explicit configuration passed to engines, agents and the CLI. Values come
//! from defaults overridden by `AGENT_*` environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AgentError, Result};

pub const DEFAULT_REGISTRY_PATH: &str = "config/agents.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Text-generation backend
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    OpenRouter,
    OpenAi,
    Gemini,
}

impl Provider {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenRouter => "openrouter",
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }

    /// Model used when no override is configured
    pub const fn default_model(self) -> &'static str {
        match self {
            Self::OpenRouter => "openai/gpt-4o-mini",
            Self::OpenAi => "gpt-4.1",
            Self::Gemini => "gemini-1.5-flash",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Provider {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openrouter" => Ok(Self::OpenRouter),
            "openai" => Ok(Self::OpenAi),
            "gemini" => Ok(Self::Gemini),
            _ => Err(AgentError::Configuration(format!("Unknown provider: {s}"))),
        }
    }
}

/// Process-wide settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Backend agents build their engine from
    pub provider: Provider,

    /// Model override; `None` uses the provider default
    pub model: Option<String>,

    /// Location of the agent registry JSON
    pub registry_path: PathBuf,

    /// Log lifecycle events
    pub enable_logging: bool,

    /// Count lifecycle events
    pub enable_metrics: bool,

    /// Per-request timeout for provider calls
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            model: None,
            registry_path: PathBuf::from(DEFAULT_REGISTRY_PATH),
            enable_logging: true,
            enable_metrics: true,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(provider) = var("AGENT_PROVIDER") {
            settings.provider = provider.parse()?;
        }
        settings.model = var("AGENT_MODEL");
        if let Some(path) = var("AGENT_REGISTRY") {
            settings.registry_path = PathBuf::from(path);
        }
        if let Some(flag) = var("AGENT_ENABLE_LOGGING") {
            settings.enable_logging = parse_flag("AGENT_ENABLE_LOGGING", &flag)?;
        }
        if let Some(flag) = var("AGENT_ENABLE_METRICS") {
            settings.enable_metrics = parse_flag("AGENT_ENABLE_METRICS", &flag)?;
        }

        Ok(settings)
    }

    /// Model to request from the configured provider
    pub fn model(&self) -> &str {
        self.model_for(self.provider)
    }

    /// Model for `provider`: the override applies only to the configured provider
    pub fn model_for(&self, provider: Provider) -> &str {
        match self.model.as_deref() {
            Some(model) if provider == self.provider => model,
            _ => provider.default_model(),
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AgentError::Configuration(format!(
            "{key} must be a boolean, got '{value}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.provider, Provider::OpenRouter);
        assert_eq!(settings.model(), "openai/gpt-4o-mini");
        assert_eq!(settings.registry_path, PathBuf::from("config/agents.json"));
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn test_default_models_per_provider() {
        assert_eq!(Provider::Gemini.default_model(), "gemini-1.5-flash");
        assert_eq!(Provider::OpenAi.default_model(), "gpt-4.1");
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let err = "llama".parse::<Provider>().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: Unknown provider: llama");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("AGENT_PROVIDER", "Gemini"),
            ("AGENT_MODEL", "gemini-2.0-flash"),
            ("AGENT_REGISTRY", "/etc/agents.json"),
            ("AGENT_ENABLE_METRICS", "off"),
        ]))
        .unwrap();

        assert_eq!(settings.provider, Provider::Gemini);
        assert_eq!(settings.model(), "gemini-2.0-flash");
        assert_eq!(settings.registry_path, PathBuf::from("/etc/agents.json"));
        assert!(settings.enable_logging);
        assert!(!settings.enable_metrics);
    }

    #[test]
    fn test_model_override_scoped_to_configured_provider() {
        let settings = Settings {
            provider: Provider::Gemini,
            model: Some("gemini-2.0-flash".into()),
            ..Settings::default()
        };
        assert_eq!(settings.model_for(Provider::Gemini), "gemini-2.0-flash");
        assert_eq!(settings.model_for(Provider::OpenRouter), "openai/gpt-4o-mini");
    }

    #[test]
    fn test_blank_values_ignored() {
        let settings = Settings::from_lookup(lookup(&[("AGENT_MODEL", "  ")])).unwrap();
        assert_eq!(settings.model, None);
    }

    #[test]
    fn test_invalid_flag_rejected() {
        let err = Settings::from_lookup(lookup(&[("AGENT_ENABLE_LOGGING", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("AGENT_ENABLE_LOGGING"));
    }
}
