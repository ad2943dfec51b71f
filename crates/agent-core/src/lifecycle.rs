//! Lifecycle Notifications
//!
//! Agents report lifecycle points (currently only start) through a
//! [`Lifecycle`]. Depending on settings each event is logged through
//! `tracing` and counted through `metrics`.

use crate::config::Settings;
use crate::event::{AGENT_START, Event};

/// Counter incremented once per emitted event, labelled by event name
pub const EVENTS_COUNTER: &str = "agent_events_total";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lifecycle {
    logging: bool,
    metrics: bool,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Lifecycle {
    pub const fn new(logging: bool, metrics: bool) -> Self {
        Self { logging, metrics }
    }

    pub const fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.enable_logging, settings.enable_metrics)
    }

    /// Lifecycle that neither logs nor counts
    pub const fn silent() -> Self {
        Self::new(false, false)
    }

    /// Report an event
    pub fn emit(&self, event: &Event) {
        if self.logging {
            tracing::info!(
                event = %event.name,
                payload = %serde_json::Value::Object(event.payload.clone()),
                "lifecycle event"
            );
        }
        if self.metrics {
            metrics::counter!(EVENTS_COUNTER, "event" => event.name.clone()).increment(1);
        }
    }

    /// Build and emit the start event for an agent run
    pub fn agent_started(&self, agent: &str, input: &str) -> Event {
        let event = Event::new(AGENT_START)
            .with("agent", agent)
            .with("input_chars", input.chars().count());
        self.emit(&event);
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            enable_metrics: false,
            ..Settings::default()
        };
        assert_eq!(Lifecycle::from_settings(&settings), Lifecycle::new(true, false));
    }

    #[test]
    fn test_agent_started_payload() {
        let event = Lifecycle::silent().agent_started("travel", "héllo");
        assert_eq!(event.name, AGENT_START);
        assert_eq!(event.payload["agent"], "travel");
        assert_eq!(event.payload["input_chars"], 5);
    }

    use metrics_exporter_prometheus::PrometheusBuilder;

    fn rendered_after(lifecycle: Lifecycle, runs: usize) -> String {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        metrics::with_local_recorder(&recorder, || {
            for _ in 0..runs {
                lifecycle.agent_started("task", "hi");
            }
        });
        handle.render()
    }

    #[test]
    fn test_start_counted_once_per_run() {
        let rendered = rendered_after(Lifecycle::new(false, true), 2);
        assert!(
            rendered.contains(r#"agent_events_total{event="agent.start"} 2"#),
            "{rendered}"
        );
    }

    #[test]
    fn test_nothing_counted_when_metrics_disabled() {
        let rendered = rendered_after(Lifecycle::new(true, false), 3);
        assert!(!rendered.contains(EVENTS_COUNTER), "{rendered}");
    }

    #[test]
    fn test_emit_without_recorder_is_noop() {
        Lifecycle::new(true, true).agent_started("task", "hi");
    }
}
