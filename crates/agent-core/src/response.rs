//! Agent Responses

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::message::Message;

/// Result of one `Agent::run` invocation.
///
/// `steps` is the agent's history at the moment of return; `metadata`
/// carries labels such as the engine and agent kind. Keys are sorted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    output: String,
    steps: Vec<Message>,
    #[serde(default)]
    metadata: Map<String, Value>,
}

impl AgentResponse {
    pub fn new(output: impl Into<String>, steps: Vec<Message>) -> Self {
        Self {
            output: output.into(),
            steps,
            metadata: Map::new(),
        }
    }

    /// Add a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn steps(&self) -> &[Message] {
        &self.steps
    }

    pub const fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }
}
