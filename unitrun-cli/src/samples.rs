//! Sample suites bundled with the `unitrun-samples` binary.
//!
//! `Arithmetic` deliberately contains a failing case and `Faults` an erroring one, so a full
//! run shows every kind of result line.

use anyhow::Context;
use unitrun_core::{
    CaseContext, CaseList, CaseResult, SuiteDefinition, SuiteRegistry, TestCase, assert_equal,
    assert_false, assert_true, suite_registry,
};

/// Returns a registry holding every sample suite.
pub fn registry() -> SuiteRegistry {
    suite_registry!(Arithmetic, Faults, Lifecycle, Strings)
}

/// Integer arithmetic, including one case that fails on purpose.
#[derive(Debug, Default)]
pub struct Arithmetic;

impl SuiteDefinition for Arithmetic {
    fn load_cases(&mut self, cases: &mut CaseList) -> unitrun_core::Result<()> {
        cases
            .add_fn("AddsCorrectly", |_| {
                assert_equal(2 + 2, 4)?;
                Ok(true)
            })?
            .add_fn("SubtractsWrong", |_| {
                assert_equal(5 - 2, 4)?;
                Ok(true)
            })?;
        Ok(())
    }
}

/// String handling; every case passes.
#[derive(Debug, Default)]
pub struct Strings;

impl SuiteDefinition for Strings {
    fn load_cases(&mut self, cases: &mut CaseList) -> unitrun_core::Result<()> {
        cases
            .add_fn("Concatenates", |_| {
                let joined = ["uni", "trun"].concat();
                assert_equal(joined.as_str(), "unitrun")?;
                Ok(true)
            })?
            .add_fn("Uppercases", |_| {
                assert_equal("suite".to_uppercase().as_str(), "SUITE")?;
                Ok(true)
            })?
            .add_fn("FindsSubstrings", |_| {
                assert_true("Running AddsCorrectly".contains("Adds"))?;
                assert_false("Success".is_empty())?;
                Ok(true)
            })?;
        Ok(())
    }
}

/// Cases that raise faults other than assertion failures.
#[derive(Debug, Default)]
pub struct Faults;

impl SuiteDefinition for Faults {
    fn load_cases(&mut self, cases: &mut CaseList) -> unitrun_core::Result<()> {
        cases
            .add_fn("ReadsMissingFixture", |_| {
                let contents = std::fs::read_to_string("unitrun-samples/missing-fixture.txt")
                    .context("reading fixture")?;
                assert_false(contents.is_empty())?;
                Ok(true)
            })?
            .add_fn("ParsesNumber", |_| {
                let parsed: u32 = "42".parse().context("parsing number")?;
                assert_equal(parsed, 42)?;
                Ok(true)
            })?;
        Ok(())
    }
}

/// A case holding scratch state that lives exactly as long as the case.
#[derive(Debug, Default)]
struct ScratchBuffer {
    buffer: Option<Vec<u8>>,
}

impl TestCase for ScratchBuffer {
    fn init(&mut self, _context: &CaseContext) {
        self.buffer = Some(Vec::with_capacity(16));
    }

    fn run(&mut self, context: &CaseContext) -> CaseResult {
        let buffer = self
            .buffer
            .as_mut()
            .context("scratch buffer was not initialized")?;

        buffer.extend_from_slice(context.name().as_bytes());
        assert_equal(buffer.len(), context.name().len())?;

        buffer.clear();
        Ok(true)
    }

    fn cleanup(&mut self, _context: &CaseContext) {
        self.buffer = None;
    }
}

/// Exercises suite and case lifecycle hooks.
#[derive(Debug, Default)]
pub struct Lifecycle {
    setups: u32,
}

impl SuiteDefinition for Lifecycle {
    fn load_cases(&mut self, cases: &mut CaseList) -> unitrun_core::Result<()> {
        cases
            .add_default::<ScratchBuffer>("UsesScratchBuffer")?
            .add_fn("ReportsThroughSink", |context| {
                context.log_line(&format!("{} is logging", context.name()));
                Ok(true)
            })?;
        Ok(())
    }

    fn setup(&mut self) {
        self.setups += 1;
        tracing::debug!(target: "suite", setups = self.setups, "lifecycle setup");
    }

    fn teardown(&mut self) {
        tracing::debug!(target: "suite", setups = self.setups, "lifecycle teardown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;
    use unitrun_core::{MemorySink, Runner};

    fn run_sample(name: &str) -> (Vec<String>, unitrun_core::SuiteSummary) {
        let sink = Rc::new(MemorySink::new());
        let mut runner = Runner::new(sink.clone());
        registry()
            .install_selected(&mut runner, &[name])
            .unwrap();

        let summary = runner.run_suite(name).unwrap();
        (sink.lines(), summary)
    }

    #[test]
    fn registry_lists_all_samples() {
        assert_eq!(
            registry().names().collect::<Vec<_>>(),
            vec!["Arithmetic", "Faults", "Lifecycle", "Strings"]
        );
    }

    #[test]
    fn strings_pass() {
        let (lines, summary) = run_sample("Strings");

        assert_eq!(
            lines,
            vec![
                "Running Concatenates",
                "Success",
                "Running Uppercases",
                "Success",
                "Running FindsSubstrings",
                "Success",
            ]
        );
        assert!(summary.is_success());
    }

    #[test]
    fn faults_report_errored_case() {
        let (lines, summary) = run_sample("Faults");

        assert_eq!(lines[0], "Running ReadsMissingFixture");
        assert_eq!(
            lines[1],
            "An unhandled exception was caught while running ReadsMissingFixture"
        );
        assert!(lines[2].starts_with("reading fixture"));
        assert_eq!(lines[3], "Errored");
        assert_eq!(&lines[4..], ["Running ParsesNumber", "Success"]);
        assert_eq!((summary.passed, summary.errored), (1, 1));
    }

    #[test]
    fn lifecycle_cases_pass() {
        let (lines, summary) = run_sample("Lifecycle");

        assert_eq!(
            lines,
            vec![
                "Running UsesScratchBuffer",
                "Success",
                "Running ReportsThroughSink",
                "ReportsThroughSink is logging",
                "Success",
            ]
        );
        assert_eq!(summary.passed, 2);
    }
}
