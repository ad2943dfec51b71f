//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::dispatch::Invocation;

/// Run a registered agent on free-text input
#[derive(Parser, Debug)]
#[command(name = "agent")]
#[command(version, about, long_about = None)]
#[command(override_usage = "agent run [AGENT] [INPUT]...")]
pub struct Args {
    /// Agent registry file
    #[arg(long, env = "AGENT_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Command to execute (`run`)
    pub command: String,

    /// Registered agent name [default: task]
    pub agent: Option<String>,

    /// Input text handed to the agent
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub input: Vec<String>,
}

impl Args {
    pub fn invocation(&self) -> Invocation {
        Invocation::new(self.command.clone(), self.agent.clone(), &self.input)
    }
}
