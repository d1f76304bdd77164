//! Diagnostic tracing configuration.

use std::{collections::HashSet, fmt::Display};

use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Type of event to trace.
#[derive(Clone, Debug, Eq, Hash, PartialEq, clap::ValueEnum)]
pub enum TraceEvent {
    /// Traces suite lifecycle: case loading, setup, teardown, and per-case outcomes.
    #[clap(name = "suite")]
    Suite,
    /// Traces suite registration and selection in the runner.
    #[clap(name = "runner")]
    Runner,
}

impl Display for TraceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Suite => write!(f, "suite"),
            Self::Runner => write!(f, "runner"),
        }
    }
}

/// Tracks which trace events were enabled when tracing was initialized.
#[derive(Debug, Default)]
pub struct TraceEventConfig {
    enabled_trace_events: HashSet<TraceEvent>,
    initialized: bool,
}

impl TraceEventConfig {
    /// Installs a stderr subscriber with debug output for the given events.
    pub fn init(enabled_log_events: &[TraceEvent]) -> Self {
        let mut config = Self {
            enabled_trace_events: enabled_log_events.iter().cloned().collect(),
            ..Default::default()
        };

        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .with_filter(config.compose_filter());

        if tracing_subscriber::registry().with(layer).try_init().is_ok() {
            config.initialized = true;
        } else {
            // Something went wrong; proceed on anyway but complain audibly.
            eprintln!("warning: failed to initialize tracing.");
        }

        config
    }

    /// Returns the events enabled for debug tracing.
    pub const fn enabled_events(&self) -> &HashSet<TraceEvent> {
        &self.enabled_trace_events
    }

    /// Returns whether the subscriber was installed.
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn compose_filter(&self) -> tracing_subscriber::filter::Targets {
        let mut filter = tracing_subscriber::filter::Targets::new()
            .with_default(tracing_subscriber::filter::LevelFilter::INFO);

        for event in &self.enabled_trace_events {
            let target = match event {
                TraceEvent::Suite => "suite",
                TraceEvent::Runner => "runner",
            };

            filter = filter.with_target(target, tracing::Level::DEBUG);
        }

        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    fn config_for(events: &[TraceEvent]) -> TraceEventConfig {
        TraceEventConfig {
            enabled_trace_events: events.iter().cloned().collect(),
            initialized: false,
        }
    }

    #[test]
    fn filter_enables_debug_only_for_selected_targets() {
        let filter = config_for(&[TraceEvent::Suite]).compose_filter();

        assert!(filter.would_enable("suite", &tracing::Level::DEBUG));
        assert!(!filter.would_enable("runner", &tracing::Level::DEBUG));
        assert!(filter.would_enable("runner", &tracing::Level::INFO));
    }

    #[test]
    fn default_filter_is_info() {
        let filter = config_for(&[]).compose_filter();

        assert_eq!(filter.default_level(), Some(LevelFilter::INFO));
        assert!(!filter.would_enable("suite", &tracing::Level::DEBUG));
    }

    #[test]
    fn display_matches_cli_names() {
        assert_eq!(TraceEvent::Suite.to_string(), "suite");
        assert_eq!(TraceEvent::Runner.to_string(), "runner");
    }
}
