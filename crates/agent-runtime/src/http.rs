//! Shared HTTP plumbing for engines

use std::time::Duration;

use agent_core::error::{AgentError, Result};

/// Environment lookup used at engine construction
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Reads the real process environment
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Resolve the first non-empty variable among `vars`
pub fn credential(lookup: EnvLookup<'_>, vars: &[&str]) -> Result<String> {
    vars.iter()
        .find_map(|var| lookup(var).filter(|v| !v.trim().is_empty()))
        .ok_or_else(|| AgentError::missing_env(vars.first().copied().unwrap_or("API key")))
}

/// HTTP client with the fixed per-request timeout
pub fn client(timeout_secs: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| AgentError::Configuration(format!("failed to build HTTP client: {e}")))
}

/// Turn a non-success response into a readable reason
pub async fn status_reason(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {body}")
    }
}
