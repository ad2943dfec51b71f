//! Engine selection from settings

use std::sync::Arc;

use agent_core::{
    config::{Provider, Settings},
    engine::{EngineFactory, LlmEngine},
    error::Result,
};

use crate::{GeminiEngine, OpenAiEngine, OpenRouterEngine, http};

type SharedLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Builds the engine named by `Settings::provider`, resolving its
/// credential at build time.
#[derive(Clone)]
pub struct ProviderEngineFactory {
    settings: Settings,
    lookup: SharedLookup,
}

impl ProviderEngineFactory {
    /// Factory reading credentials from the process environment
    pub fn new(settings: Settings) -> Self {
        Self::with_lookup(settings, Arc::new(http::process_env))
    }

    pub fn with_lookup(settings: Settings, lookup: SharedLookup) -> Self {
        Self { settings, lookup }
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl EngineFactory for ProviderEngineFactory {
    fn build(&self) -> Result<Box<dyn LlmEngine>> {
        let lookup = self.lookup.as_ref();
        let engine: Box<dyn LlmEngine> = match self.settings.provider {
            Provider::OpenRouter => {
                Box::new(OpenRouterEngine::from_lookup(&self.settings, lookup)?)
            }
            Provider::OpenAi => Box::new(OpenAiEngine::from_lookup(&self.settings, lookup)?),
            Provider::Gemini => Box::new(GeminiEngine::from_lookup(&self.settings, lookup)?),
        };
        tracing::debug!(provider = engine.name(), "engine built");
        Ok(engine)
    }
}

impl std::fmt::Debug for ProviderEngineFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderEngineFactory")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
