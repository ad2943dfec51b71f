//! Built-in agents
//!
//! Every agent renders one fixed template around the caller's input and makes
//! a single engine call.

mod release_quality;
mod research;
mod task;
mod travel;

pub use release_quality::ReleaseQualityAgent;
pub use research::ResearchAgent;
pub use task::TaskAgent;
pub use travel::TravelAgent;

use agent_core::{AgentDeps, AgentResponse, GenerationOptions, History, Result};

/// Shared run path: start event, user turn, one generation, assistant turn.
pub(crate) async fn run_template(
    name: &str,
    kind: &str,
    history: &mut History,
    deps: &AgentDeps,
    input: &str,
    template: &str,
) -> Result<AgentResponse> {
    deps.lifecycle.agent_started(name, input);
    history.user(input);

    let engine = deps.engines.build()?;
    let prompt = crate::prompts::render(template, input);
    let output = engine.generate(&prompt, &GenerationOptions::default()).await?;

    if !output.is_empty() {
        history.assistant(output.as_str());
    }
    tracing::debug!(
        agent = name,
        kind,
        engine = engine.name(),
        chars = output.len(),
        "agent run complete"
    );

    Ok(AgentResponse::new(output, history.snapshot())
        .with_metadata("engine", engine.name())
        .with_metadata("agent", kind))
}
