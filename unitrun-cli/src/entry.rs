//! Entry point shared by binaries that run registered suites.

use std::io::IsTerminal;
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use colored::Colorize;
use unitrun_core::{RunSummary, Runner, StdoutSink, SuiteRegistry};

use crate::args::CommandLineArgs;
use crate::events::TraceEventConfig;

const SEPARATOR: &str =
    "================================================================================";

/// Parses the process's command line and runs the selected suites from `registry`.
///
/// Case results are written to stdout; the run summary goes to stderr. Exits with failure
/// when any case failed or errored.
pub fn run(registry: &SuiteRegistry) -> ExitCode {
    let args = match CommandLineArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let _trace_config = TraceEventConfig::init(&args.enabled_log_events);

    match run_with_args(registry, &args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Runs the suites selected by `args`, returning whether every case passed.
pub fn run_with_args(registry: &SuiteRegistry, args: &CommandLineArgs) -> anyhow::Result<bool> {
    if args.list_suites_only {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(true);
    }

    configure_color(args.color);

    let mut runner = Runner::new(Rc::new(StdoutSink));
    let summary = if args.runs_all_suites() {
        registry.install_all(&mut runner)?;
        runner.run()
    } else {
        let selected = args.selected_suites();
        registry.install_selected(&mut runner, &selected)?;

        let mut summary = RunSummary::default();
        for name in selected {
            if let Some(suite_summary) = runner.run_suite(name) {
                summary.push(suite_summary);
            }
        }
        summary
    };

    report_summary(&summary, args.verbose);

    Ok(summary.is_success())
}

fn configure_color(choice: clap::ColorChoice) {
    match choice {
        clap::ColorChoice::Always => colored::control::set_override(true),
        clap::ColorChoice::Never => colored::control::set_override(false),
        clap::ColorChoice::Auto => colored::control::set_override(std::io::stderr().is_terminal()),
    }
}

fn report_summary(summary: &RunSummary, verbose: bool) {
    if verbose {
        for suite in &summary.suites {
            let status = if suite.is_success() {
                "ok".green()
            } else {
                "FAILED".bright_red()
            };

            eprintln!(
                "* {}: [{}] {} passed, {} failed, {} errored... {status}",
                "Suite".bright_yellow(),
                suite.name.italic(),
                suite.passed,
                suite.failed,
                suite.errored,
            );
        }
    }

    let (passed, failed, errored) = (summary.passed(), summary.failed(), summary.errored());

    let formatted_failed = if failed > 0 {
        failed.to_string().red()
    } else {
        failed.to_string().green()
    };

    let formatted_errored = if errored > 0 {
        errored.to_string().magenta()
    } else {
        errored.to_string().green()
    };

    eprintln!("{SEPARATOR}");
    eprintln!(
        "{} test case(s) ran in {} suite(s): {} succeeded, {} failed, {} errored.",
        passed + failed + errored,
        summary.suites.len(),
        passed.to_string().green(),
        formatted_failed,
        formatted_errored,
    );

    let load_failures = summary.load_failures();
    if load_failures > 0 {
        eprintln!(
            "{} suite(s) could not load their cases.",
            load_failures.to_string().red()
        );
    }

    let hook_failures = summary.hook_failures();
    if hook_failures > 0 {
        eprintln!(
            "{} suite(s) panicked in setup or teardown.",
            hook_failures.to_string().red()
        );
    }
    eprintln!("{SEPARATOR}");
}
