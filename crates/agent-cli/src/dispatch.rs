//! Command dispatch
//!
//! The path from parsed arguments to an agent response. Every failure branch
//! maps to one [`DispatchError`] variant; the binary prints it and exits 1.

use std::path::PathBuf;

use agent_catalog::Catalog;
use agent_core::{AgentDeps, AgentError, AgentResponse};
use thiserror::Error;

use crate::registry::Registry;

pub const RUN_COMMAND: &str = "run";
pub const DEFAULT_AGENT: &str = "task";

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Registry unreadable or malformed
    #[error("{0}")]
    Registry(AgentError),

    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    #[error("Agent '{0}' is disabled")]
    Disabled(String),

    #[error("Agent '{agent}' registry entry is missing required key '{key}'")]
    MissingKey { agent: String, key: &'static str },

    #[error("Failed to load agent '{agent}': {source}")]
    Load { agent: String, source: AgentError },

    #[error("Agent '{agent}' failed: {source}")]
    Run { agent: String, source: AgentError },
}

/// A parsed command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub agent: String,
    pub input: String,
}

impl Invocation {
    /// Agent defaults to `task`; input words are joined with single spaces
    pub fn new(command: impl Into<String>, agent: Option<String>, input: &[String]) -> Self {
        Self {
            command: command.into(),
            agent: agent.unwrap_or_else(|| DEFAULT_AGENT.to_string()),
            input: input.join(" "),
        }
    }
}

pub struct Dispatcher {
    catalog: Catalog,
    deps: AgentDeps,
    registry_path: PathBuf,
}

impl Dispatcher {
    pub fn new(catalog: Catalog, deps: AgentDeps, registry_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            deps,
            registry_path: registry_path.into(),
        }
    }

    pub async fn dispatch(&self, invocation: &Invocation) -> Result<AgentResponse, DispatchError> {
        if invocation.command != RUN_COMMAND {
            return Err(DispatchError::UnknownCommand(invocation.command.clone()));
        }

        let registry = Registry::load(&self.registry_path).map_err(DispatchError::Registry)?;
        let name = invocation.agent.as_str();

        let Some(entry) = registry.get(name) else {
            tracing::debug!(agent = name, known = ?registry.names(), "agent not in registry");
            return Err(DispatchError::UnknownAgent(name.to_string()));
        };

        if !entry.enabled {
            tracing::debug!(agent = name, "agent disabled in registry");
            return Err(DispatchError::Disabled(name.to_string()));
        }

        let missing = |key| DispatchError::MissingKey {
            agent: name.to_string(),
            key,
        };
        let module = entry.module.as_deref().ok_or_else(|| missing("module"))?;
        let class = entry.class.as_deref().ok_or_else(|| missing("class"))?;

        let mut agent = self
            .catalog
            .instantiate(module, class, name, self.deps.clone())
            .map_err(|source| DispatchError::Load {
                agent: name.to_string(),
                source,
            })?;

        tracing::debug!(agent = name, module, class, "dispatching");

        agent
            .run(&invocation.input)
            .await
            .map_err(|source| DispatchError::Run {
                agent: name.to_string(),
                source,
            })
    }
}
