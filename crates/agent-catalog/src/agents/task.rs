//! Executes a free-form task request.

use agent_core::{Agent, AgentDeps, AgentResponse, History, Result};
use async_trait::async_trait;

use crate::prompts::TASK_PROMPT;

pub const KIND: &str = "task";

pub struct TaskAgent {
    name: String,
    history: History,
    deps: AgentDeps,
}

impl TaskAgent {
    pub fn new(name: impl Into<String>, deps: AgentDeps) -> Self {
        Self {
            name: name.into(),
            history: History::new(),
            deps,
        }
    }

    pub const fn history(&self) -> &History {
        &self.history
    }
}

#[async_trait]
impl Agent for TaskAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&mut self, input: &str) -> Result<AgentResponse> {
        super::run_template(
            &self.name,
            KIND,
            &mut self.history,
            &self.deps,
            input,
            TASK_PROMPT,
        )
        .await
    }
}
