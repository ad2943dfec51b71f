//! Travel planning agent.
//!
//! The only agent that validates input: requests that mention none of the
//! trip keywords are answered locally with a request for details, before any
//! engine is built or event emitted.

use agent_core::{Agent, AgentDeps, AgentResponse, History, Result};
use async_trait::async_trait;

use crate::prompts::TRAVEL_PROMPT;

pub const KIND: &str = "travel";

/// Substrings (matched case-insensitively) that make a request plannable
pub const REQUIRED_KEYWORDS: [&str; 4] = ["origin", "budget", "day", "trip"];

pub const MORE_DETAILS_PROMPT: &str =
    "Please provide origin, travel window (days), budget range, and type of trip.";

pub struct TravelAgent {
    name: String,
    history: History,
    deps: AgentDeps,
}

impl TravelAgent {
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

    fn has_trip_details(input: &str) -> bool {
        let lowered = input.to_lowercase();
        REQUIRED_KEYWORDS.iter().any(|k| lowered.contains(k))
    }
}

#[async_trait]
impl Agent for TravelAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&mut self, input: &str) -> Result<AgentResponse> {
        if !Self::has_trip_details(input) {
            tracing::debug!(agent = %self.name, "travel request lacks trip details");
            return Ok(
                AgentResponse::new(MORE_DETAILS_PROMPT, Vec::new()).with_metadata("agent", KIND)
            );
        }

        super::run_template(
            &self.name,
            KIND,
            &mut self.history,
            &self.deps,
            input,
            TRAVEL_PROMPT,
        )
        .await
    }
}
