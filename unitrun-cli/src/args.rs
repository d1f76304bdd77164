//! Command-line arguments for running suites.

use std::collections::HashSet;

use clap::{Parser, builder::styling};

use crate::events::TraceEvent;

const SHORT_DESCRIPTION: &str = "Run registered unit-test suites";

const LONG_DESCRIPTION: &str = r"
Runs registered unit-test suites and reports a result line for every case.

With no suite names, every registered suite runs in lexical order. Names that do not match a
registered suite are ignored.
";

/// Parsed command-line arguments.
#[derive(Clone, Debug, Parser)]
#[clap(version,
       about = SHORT_DESCRIPTION,
       long_about = LONG_DESCRIPTION,
       disable_help_flag = true,
       styles = help_styles())]
#[allow(clippy::module_name_repetitions)]
pub struct CommandLineArgs {
    /// Display usage information.
    #[clap(long = "help", action = clap::ArgAction::HelpLong)]
    pub help: Option<bool>,

    /// List registered suites without running them.
    #[clap(long = "list")]
    pub list_suites_only: bool,

    /// Report per-suite tallies in addition to the overall summary.
    #[clap(short = 'v', long = "verbose", env = "UNITRUN_VERBOSE")]
    pub verbose: bool,

    /// Colorize the summary?
    #[clap(long = "color", env = "UNITRUN_COLOR", default_value_t = clap::ColorChoice::Auto)]
    pub color: clap::ColorChoice,

    /// Enable debug tracing for the given event categories.
    #[clap(long = "log-enable", value_name = "EVENT")]
    pub enabled_log_events: Vec<TraceEvent>,

    /// Names of suites to run; runs all suites if none are given.
    #[clap(value_name = "SUITE")]
    pub suites: Vec<String>,
}

impl CommandLineArgs {
    /// Returns whether every registered suite should run.
    pub fn runs_all_suites(&self) -> bool {
        self.suites.is_empty()
    }

    /// Returns the requested suite names in command-line order, each listed once.
    pub fn selected_suites(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.suites
            .iter()
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

fn help_styles() -> clap::builder::Styles {
    styling::Styles::styled()
        .header(
            styling::AnsiColor::Yellow.on_default()
                | styling::Effects::BOLD
                | styling::Effects::UNDERLINE,
        )
        .usage(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .literal(styling::AnsiColor::Magenta.on_default() | styling::Effects::BOLD)
        .placeholder(styling::AnsiColor::Cyan.on_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_suite_names_and_flags() -> anyhow::Result<()> {
        let args = CommandLineArgs::try_parse_from([
            "unitrun",
            "--verbose",
            "--log-enable",
            "suite",
            "--color",
            "never",
            "Arithmetic",
            "Strings",
        ])?;

        assert!(args.verbose);
        assert!(!args.list_suites_only);
        assert!(!args.runs_all_suites());
        assert_eq!(args.suites, vec!["Arithmetic", "Strings"]);
        assert_eq!(args.enabled_log_events, vec![TraceEvent::Suite]);
        assert!(matches!(args.color, clap::ColorChoice::Never));

        Ok(())
    }

    #[test]
    fn no_names_runs_everything() -> anyhow::Result<()> {
        let args = CommandLineArgs::try_parse_from(["unitrun"])?;

        assert!(args.runs_all_suites());
        assert!(matches!(args.color, clap::ColorChoice::Auto));

        Ok(())
    }

    #[test]
    fn repeated_suite_names_are_selected_once() -> anyhow::Result<()> {
        let args =
            CommandLineArgs::try_parse_from(["unitrun", "Strings", "Arithmetic", "Strings"])?;

        assert_eq!(args.selected_suites(), vec!["Strings", "Arithmetic"]);

        Ok(())
    }

    #[test]
    fn rejects_unknown_trace_event() {
        assert!(CommandLineArgs::try_parse_from(["unitrun", "--log-enable", "bogus"]).is_err());
    }
}
