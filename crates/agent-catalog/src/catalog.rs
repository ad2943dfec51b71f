//! Agent Catalog
//!
//! Compile-time stand-in for loading agents by module path and class name.
//! Registry entries name a `module` and a `class`; the catalog maps that pair
//! to a constructor registered at startup.

use std::collections::BTreeMap;

use agent_core::{Agent, AgentDeps, AgentError, Result};

use crate::agents::{ReleaseQualityAgent, ResearchAgent, TaskAgent, TravelAgent};

/// Builds an agent registered under `name`
pub type Constructor = fn(String, AgentDeps) -> Box<dyn Agent>;

/// Table of known modules and the classes each exposes
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    modules: BTreeMap<String, BTreeMap<String, Constructor>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog containing the built-in agents
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register("agents.task_agent", "TaskAgent", |name, deps| {
            Box::new(TaskAgent::new(name, deps))
        });
        catalog.register("agents.research_agent", "ResearchAgent", |name, deps| {
            Box::new(ResearchAgent::new(name, deps))
        });
        catalog.register("agents.travel_agent", "TravelAgent", |name, deps| {
            Box::new(TravelAgent::new(name, deps))
        });
        catalog.register(
            "agents.release_quality_agent",
            "ReleaseQualityAgent",
            |name, deps| Box::new(ReleaseQualityAgent::new(name, deps)),
        );
        catalog
    }

    /// Register a constructor; a later registration for the same pair wins
    pub fn register(&mut self, module: &str, class: &str, constructor: Constructor) {
        self.modules
            .entry(module.to_string())
            .or_default()
            .insert(class.to_string(), constructor);
    }

    /// Look up the constructor for `module`/`class`
    pub fn resolve(&self, module: &str, class: &str) -> Result<Constructor> {
        let classes = self
            .modules
            .get(module)
            .ok_or_else(|| AgentError::Resolution(format!("No module named '{module}'")))?;
        classes.get(class).copied().ok_or_else(|| {
            AgentError::Resolution(format!("module '{module}' has no class '{class}'"))
        })
    }

    /// Resolve and construct in one step
    pub fn instantiate(
        &self,
        module: &str,
        class: &str,
        name: impl Into<String>,
        deps: AgentDeps,
    ) -> Result<Box<dyn Agent>> {
        let constructor = self.resolve(module, class)?;
        Ok(constructor(name.into(), deps))
    }

    /// Registered `(module, class)` pairs in sorted order
    pub fn entries(&self) -> Vec<(&str, &str)> {
        self.modules
            .iter()
            .flat_map(|(module, classes)| {
                classes.keys().map(move |class| (module.as_str(), class.as_str()))
            })
            .collect()
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.modules.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
