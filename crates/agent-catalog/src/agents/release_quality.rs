//! Assesses CI/CD release risk for a change.

use agent_core::{Agent, AgentDeps, AgentResponse, History, Result};
use async_trait::async_trait;

use crate::prompts::RELEASE_QUALITY_PROMPT;

pub const KIND: &str = "release_quality";

pub struct ReleaseQualityAgent {
    name: String,
    history: History,
    deps: AgentDeps,
}

impl ReleaseQualityAgent {
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
impl Agent for ReleaseQualityAgent {
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
            RELEASE_QUALITY_PROMPT,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::ScriptedFactory;

    #[tokio::test]
    async fn test_pipeline_context_interpolated_verbatim() {
        let context = "3 tests failed in payments/{refunds}; 2 skipped";
        let factory = ScriptedFactory::replying("## Risk Summary\n- Overall risk: High");
        let mut agent = ReleaseQualityAgent::new("rq", factory.deps());

        let response = agent.run(context).await.unwrap();

        assert!(factory.last_prompt().unwrap().contains(context));
        assert_eq!(response.metadata()["agent"], "release_quality");
        assert_eq!(agent.name(), "rq");
        assert_eq!(response.steps().last().unwrap().content(), response.output());
    }
}
