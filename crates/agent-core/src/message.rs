//! Conversation Messages
//!
//! Standard turn format shared by agents, engines and responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AgentError, Result};

/// Role of a message sender
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System prompt/instructions
    System,
    /// User input
    User,
    /// Assistant (LLM) response
    Assistant,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "system" => Ok(Self::System),
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            other => Err(AgentError::Configuration(format!("Unknown role: {other}"))),
        }
    }
}

/// A single conversational turn. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    /// Create a new message
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Mapping form: `{"role": ..., "content": ...}`
    pub fn as_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("role".into(), Value::String(self.role.as_str().into()));
        map.insert("content".into(), Value::String(self.content.clone()));
        map
    }

    /// Parse the mapping form produced by [`Message::as_map`]
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        let role = string_field(map, "role")?.parse()?;
        Ok(Self::new(role, string_field(map, "content")?))
    }
}

fn string_field<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    map.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            AgentError::Configuration(format!("message is missing string field '{key}'"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_creation() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role(), Role::User);
        assert_eq!(msg.content(), "Hello");
    }

    #[test]
    fn test_map_round_trip_preserves_role_and_content() {
        let original = Message::assistant("line one\nline \"two\" ✓");
        let map = original.as_map();

        assert_eq!(map.len(), 2);
        assert_eq!(map["role"], json!("assistant"));

        let parsed = Message::from_map(&map).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_from_map_rejects_unknown_role() {
        let value = json!({"role": "tool", "content": "x"});
        let err = Message::from_map(value.as_object().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Unknown role: tool"));
    }

    #[test]
    fn test_from_map_requires_content() {
        let value = json!({"role": "user"});
        let err = Message::from_map(value.as_object().unwrap()).unwrap_err();
        assert!(err.to_string().contains("'content'"));
    }

    #[test]
    fn test_serde_matches_map_form() {
        let msg = Message::system("be brief");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value, Value::Object(msg.as_map()));
    }
}
