//! Plain-text rendering of an agent response

use std::fmt::Write;

use agent_core::AgentResponse;
use serde_json::Value;

pub fn render(response: &AgentResponse) -> String {
    let mut out = String::new();

    out.push_str("=== Agent Output ===\n");
    out.push_str(response.output());
    out.push_str("\n\n--- Steps ---\n");
    if response.steps().is_empty() {
        out.push_str("(none)\n");
    }
    for (i, step) in response.steps().iter().enumerate() {
        let _ = writeln!(out, "{}. [{}] {}", i + 1, step.role(), step.content());
    }

    out.push_str("\n--- Metadata ---\n");
    if response.metadata().is_empty() {
        out.push_str("(none)\n");
    }
    for (key, value) in response.metadata() {
        match value {
            Value::String(s) => {
                let _ = writeln!(out, "{key}: {s}");
            }
            other => {
                let _ = writeln!(out, "{key}: {other}");
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::Message;

    #[test]
    fn test_full_report() {
        let response = AgentResponse::new(
            "Done.",
            vec![Message::user("hello"), Message::assistant("Done.")],
        )
        .with_metadata("engine", "openrouter")
        .with_metadata("agent", "task");

        assert_eq!(
            render(&response),
            "=== Agent Output ===\n\
             Done.\n\
             \n\
             --- Steps ---\n\
             1. [user] hello\n\
             2. [assistant] Done.\n\
             \n\
             --- Metadata ---\n\
             agent: task\n\
             engine: openrouter\n"
        );
    }

    #[test]
    fn test_empty_steps_and_non_string_metadata() {
        let response = AgentResponse::new("Need details", Vec::new())
            .with_metadata("attempts", 1)
            .with_metadata("cached", false);

        let report = render(&response);
        assert!(report.contains("--- Steps ---\n(none)\n"));
        assert!(report.contains("attempts: 1\ncached: false\n"));
    }
}
