//! Tallies of case outcomes, per suite and per run.

use std::fmt::Display;

use crate::case::CaseOutcome;

/// Results of one [`crate::Suite::run`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuiteSummary {
    /// Name of the suite.
    pub name: String,
    /// Number of cases that passed.
    pub passed: u32,
    /// Number of cases that failed.
    pub failed: u32,
    /// Number of cases that raised an unexpected fault.
    pub errored: u32,
    /// Whether the suite's cases could not be loaded.
    pub load_failed: bool,
    /// Whether the suite's setup hook panicked, so none of its cases ran.
    pub setup_failed: bool,
    /// Whether the suite's teardown hook panicked.
    pub teardown_failed: bool,
}

impl SuiteSummary {
    /// Creates an empty summary for the named suite.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Counts one case outcome.
    pub fn record(&mut self, outcome: &CaseOutcome) {
        match outcome {
            CaseOutcome::Passed => self.passed += 1,
            CaseOutcome::Failed(_) => self.failed += 1,
            CaseOutcome::Errored(_) => self.errored += 1,
        }
    }

    /// Returns the number of cases that ran.
    pub const fn ran(&self) -> u32 {
        self.passed + self.failed + self.errored
    }

    /// Returns whether a setup or teardown hook panicked.
    pub const fn hook_failed(&self) -> bool {
        self.setup_failed || self.teardown_failed
    }

    /// Returns whether every case passed and the suite loaded, set up and tore down cleanly.
    pub const fn is_success(&self) -> bool {
        !self.load_failed && !self.hook_failed() && self.failed == 0 && self.errored == 0
    }
}

/// Results of a [`crate::Runner`] run across one or more suites.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Per-suite results, in the order the suites ran.
    pub suites: Vec<SuiteSummary>,
}

impl RunSummary {
    /// Appends a suite's results.
    pub fn push(&mut self, suite: SuiteSummary) {
        self.suites.push(suite);
    }

    /// Total number of passing cases.
    pub fn passed(&self) -> u32 {
        self.suites.iter().map(|s| s.passed).sum()
    }

    /// Total number of failing cases.
    pub fn failed(&self) -> u32 {
        self.suites.iter().map(|s| s.failed).sum()
    }

    /// Total number of errored cases.
    pub fn errored(&self) -> u32 {
        self.suites.iter().map(|s| s.errored).sum()
    }

    /// Number of suites whose cases could not be loaded.
    pub fn load_failures(&self) -> usize {
        self.suites.iter().filter(|s| s.load_failed).count()
    }

    /// Number of suites whose setup or teardown hook panicked.
    pub fn hook_failures(&self) -> usize {
        self.suites.iter().filter(|s| s.hook_failed()).count()
    }

    /// Returns whether every suite succeeded.
    pub fn is_success(&self) -> bool {
        self.suites.iter().all(SuiteSummary::is_success)
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (passed, failed, errored) = (self.passed(), self.failed(), self.errored());
        write!(
            f,
            "{} test case(s) ran in {} suite(s): {passed} succeeded, {failed} failed, {errored} errored.",
            passed + failed + errored,
            self.suites.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn totals_across_suites() {
        let mut first = SuiteSummary::new("first");
        first.record(&CaseOutcome::Passed);
        first.record(&CaseOutcome::Failed(String::from("nope")));

        let mut second = SuiteSummary::new("second");
        second.record(&CaseOutcome::Passed);
        second.record(&CaseOutcome::Errored(String::from("boom")));

        let mut run = RunSummary::default();
        run.push(first);
        run.push(second);

        assert_eq!((run.passed(), run.failed(), run.errored()), (2, 1, 1));
        assert!(!run.is_success());
        assert_eq!(
            run.to_string(),
            "4 test case(s) ran in 2 suite(s): 2 succeeded, 1 failed, 1 errored."
        );
    }

    #[test]
    fn load_failure_is_not_success() {
        let mut summary = SuiteSummary::new("broken");
        assert!(summary.is_success());

        summary.load_failed = true;
        assert!(!summary.is_success());

        let run = RunSummary {
            suites: vec![summary],
        };
        assert_eq!(run.load_failures(), 1);
        assert!(!run.is_success());
    }

    #[test]
    fn hook_failure_is_not_success() {
        let mut summary = SuiteSummary::new("flaky");
        summary.record(&CaseOutcome::Passed);
        summary.teardown_failed = true;

        assert!(summary.hook_failed());
        assert!(!summary.is_success());

        let run = RunSummary {
            suites: vec![summary, SuiteSummary::new("fine")],
        };
        assert_eq!((run.hook_failures(), run.load_failures()), (1, 0));
        assert!(!run.is_success());
    }

    #[test]
    fn empty_run_succeeds() {
        assert!(RunSummary::default().is_success());
    }
}
