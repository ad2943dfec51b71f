//! Agent Contract
//!
//! Every agent turns free-text input into one [`AgentResponse`]. Shared
//! history handling lives in [`History`], which agents own by composition.

use std::sync::Arc;

use async_trait::async_trait;

use crate::engine::EngineFactory;
use crate::error::Result;
use crate::lifecycle::Lifecycle;
use crate::message::{Message, Role};
use crate::response::AgentResponse;

/// A policy that turns input into a structured response
#[async_trait]
pub trait Agent: Send {
    /// Name the agent was registered under
    fn name(&self) -> &str;

    /// Handle one input.
    ///
    /// Implementations record the input as a user turn and any non-empty
    /// output as an assistant turn, and return the full history as `steps`.
    /// Engine errors are returned as-is.
    async fn run(&mut self, input: &str) -> Result<AgentResponse>;
}

/// Append-only, chronologically ordered turn history
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    messages: Vec<Message>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message
    pub fn add_message(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }

    pub fn user(&mut self, content: impl Into<String>) {
        self.add_message(Role::User, content);
    }

    pub fn assistant(&mut self, content: impl Into<String>) {
        self.add_message(Role::Assistant, content);
    }

    pub fn system(&mut self, content: impl Into<String>) {
        self.add_message(Role::System, content);
    }

    /// Get all messages
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Get the last message
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Copy of the history, used as response steps
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Collaborators handed to every agent at instantiation
#[derive(Clone)]
pub struct AgentDeps {
    pub engines: Arc<dyn EngineFactory>,
    pub lifecycle: Lifecycle,
}

impl AgentDeps {
    pub fn new(engines: Arc<dyn EngineFactory>, lifecycle: Lifecycle) -> Self {
        Self { engines, lifecycle }
    }
}

impl std::fmt::Debug for AgentDeps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentDeps")
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_preserves_order() {
        let mut history = History::new();
        history.system("You are helpful.");
        history.user("Hi");
        history.assistant("Hello!");

        let roles: Vec<Role> = history.messages().iter().map(Message::role).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant]);
        assert_eq!(history.last().unwrap().content(), "Hello!");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut history = History::new();
        history.user("first");
        let steps = history.snapshot();
        history.assistant("second");

        assert_eq!(steps.len(), 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_add_message_accepts_empty_content() {
        let mut history = History::new();
        history.add_message(Role::User, "");
        assert!(!history.is_empty());
    }
}
