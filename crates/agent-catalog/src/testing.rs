//! Scripted engines for agent tests

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use agent_core::{
    AgentDeps, AgentError, EngineFactory, GenerationOptions, Lifecycle, LlmEngine, Result,
};
use async_trait::async_trait;

/// Replies with a fixed text (or error) and records prompts it was given
pub struct ScriptedEngine {
    reply: std::result::Result<String, String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl LlmEngine for ScriptedEngine {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, prompt: &str, _options: &GenerationOptions) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .map_err(|reason| AgentError::generation("Scripted", reason))
    }
}

/// Counts builds and hands out `ScriptedEngine`s sharing one prompt log
#[derive(Clone)]
pub struct ScriptedFactory {
    reply: std::result::Result<String, String>,
    pub builds: Arc<AtomicUsize>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedFactory {
    pub fn replying(text: &str) -> Self {
        Self::with(Ok(text.to_string()))
    }

    pub fn failing(reason: &str) -> Self {
        Self::with(Err(reason.to_string()))
    }

    fn with(reply: std::result::Result<String, String>) -> Self {
        Self {
            reply,
            builds: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }

    pub fn deps(&self) -> AgentDeps {
        AgentDeps::new(Arc::new(self.clone()), Lifecycle::silent())
    }
}

impl EngineFactory for ScriptedFactory {
    fn build(&self) -> Result<Box<dyn LlmEngine>> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedEngine {
            reply: self.reply.clone(),
            prompts: self.prompts.clone(),
        }))
    }
}
