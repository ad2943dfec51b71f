//! Agent Registry
//!
//! JSON file keyed by agent name:
//!
//! ```json
//! {"task": {"module": "agents.task_agent", "class": "TaskAgent", "enabled": true}}
//! ```
//!
//! Read fresh on every invocation.

use std::collections::BTreeMap;
use std::path::Path;

use agent_core::{AgentError, Result};
use serde::Deserialize;

/// One registry entry. Key presence is checked at dispatch time so the
/// missing key can be named.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegistryEntry {
    #[serde(default)]
    pub module: Option<String>,

    #[serde(default)]
    pub class: Option<String>,

    /// Entries without the flag are enabled
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

const fn enabled_by_default() -> bool {
    true
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl Registry {
    /// Read and parse the registry at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AgentError::Configuration(format!(
                "cannot read agent registry {}: {e}",
                path.display()
            ))
        })?;
        Self::parse(&raw).map_err(|e| match e {
            AgentError::Json(e) => AgentError::Configuration(format!(
                "invalid agent registry {}: {e}",
                path.display()
            )),
            other => other,
        })
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let registry: Self = serde_json::from_str(raw)?;
        tracing::debug!(agents = registry.entries.len(), "agent registry loaded");
        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.get(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_entries() {
        let registry = Registry::parse(
            r#"{
                "task": {"module": "agents.task_agent", "class": "TaskAgent", "enabled": true},
                "travel": {"module": "agents.travel_agent", "class": "TravelAgent"}
            }"#,
        )
        .unwrap();

        assert_eq!(registry.names(), vec!["task", "travel"]);
        let task = registry.get("task").unwrap();
        assert_eq!(task.module.as_deref(), Some("agents.task_agent"));
        assert_eq!(task.class.as_deref(), Some("TaskAgent"));
        assert!(registry.get("travel").unwrap().enabled);
    }

    #[test]
    fn test_missing_keys_parse_as_none() {
        let registry = Registry::parse(r#"{"task": {"enabled": false}}"#).unwrap();
        let entry = registry.get("task").unwrap();
        assert_eq!(entry.module, None);
        assert_eq!(entry.class, None);
        assert!(!entry.enabled);
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert!(Registry::parse(r#"["task"]"#).is_err());
    }

    #[test]
    fn test_load_reports_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"task\": ").unwrap();

        let err = Registry::load(file.path()).unwrap_err();
        assert!(matches!(err, AgentError::Configuration(_)));
        assert!(err.to_string().contains("invalid agent registry"));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Registry::load(&dir.path().join("agents.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read agent registry"));
    }

    #[test]
    fn test_shipped_registry_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/agents.json");
        let registry = Registry::load(&path).unwrap();
        assert_eq!(
            registry.names(),
            vec!["release_quality", "research", "task", "travel"]
        );
    }
}
