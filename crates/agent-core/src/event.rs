//! Lifecycle Events

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the event emitted when an agent starts handling input
pub const AGENT_START: &str = "agent.start";

/// A lifecycle notification. Built at the point of emission and dropped after.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(default)]
    pub payload: Map<String, Value>,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: Map::new(),
        }
    }

    /// Add a payload entry
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Mapping form: `{"name": ..., "payload": {...}}`
    pub fn as_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".into(), Value::String(self.name.clone()));
        map.insert("payload".into(), Value::Object(self.payload.clone()));
        map
    }
}
