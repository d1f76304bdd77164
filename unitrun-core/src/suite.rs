//! Suites: ordered groups of cases sharing setup and teardown.

use std::panic::{self, AssertUnwindSafe};

use crate::case::{Case, CaseContext, CaseOutcome, CaseResult, TestCase, describe_panic};
use crate::error::{Error, Result};
use crate::sink::SharedSink;
use crate::sink_logf;
use crate::summary::SuiteSummary;

/// User-provided definition of a suite.
///
/// Only [`SuiteDefinition::load_cases`] is required; `setup` and `teardown` run exactly once
/// around each [`Suite::run`], regardless of how many cases the suite holds.
pub trait SuiteDefinition {
    /// Populates the suite's cases, in the order they should run.
    fn load_cases(&mut self, cases: &mut CaseList) -> Result<()>;

    /// Runs before the first case.
    fn setup(&mut self) {}

    /// Runs after the last case.
    fn teardown(&mut self) {}
}

/// Ordered, owned collection of cases being populated by [`SuiteDefinition::load_cases`].
pub struct CaseList {
    sink: SharedSink,
    slots: Vec<Option<Case>>,
}

impl CaseList {
    fn new(sink: SharedSink) -> Self {
        Self {
            sink,
            slots: vec![],
        }
    }

    /// Adds a case with the given name and body. The case's `init` hook runs immediately.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        body: impl TestCase + 'static,
    ) -> Result<&mut Self> {
        let case = Case::new(name, self.sink.clone(), Box::new(body), self.slots.len())?;
        self.slots.push(Some(case));
        Ok(self)
    }

    /// Adds a case whose body is a closure.
    pub fn add_fn<F>(&mut self, name: impl Into<String>, body: F) -> Result<&mut Self>
    where
        F: FnMut(&CaseContext) -> CaseResult + 'static,
    {
        self.add(name, body)
    }

    /// Adds a default-constructed case of type `T`.
    pub fn add_default<T>(&mut self, name: impl Into<String>) -> Result<&mut Self>
    where
        T: TestCase + Default + 'static,
    {
        self.add(name, T::default())
    }

    /// Returns the number of slots, including any vacated by [`Suite::take_case`].
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether no cases have been added.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// A named suite owning its definition and cases.
pub struct Suite {
    name: String,
    definition: Box<dyn SuiteDefinition>,
    sink: SharedSink,
    cases: CaseList,
    loaded: bool,
}

impl Suite {
    /// Creates a suite that logs through `sink`. Cases are loaded on the first [`Suite::run`].
    pub fn new(
        name: impl Into<String>,
        definition: Box<dyn SuiteDefinition>,
        sink: SharedSink,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptySuiteName);
        }

        Ok(Self {
            name,
            definition,
            cases: CaseList::new(sink.clone()),
            sink,
            loaded: false,
        })
    }

    /// Returns the suite's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of case slots.
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Returns the case at `index`, or `None` if its slot has been vacated.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`Suite::case_count`].
    pub fn case_at(&self, index: usize) -> Option<&Case> {
        self.cases.slots[index].as_ref()
    }

    /// Removes the case at `index`, leaving its slot empty so positions stay stable.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`Suite::case_count`].
    pub fn take_case(&mut self, index: usize) -> Option<Case> {
        self.cases.slots[index].take()
    }

    /// Runs every case in order, isolating failures to the case that raised them.
    pub fn run(&mut self) -> SuiteSummary {
        let mut summary = SuiteSummary::new(self.name.clone());

        if !self.loaded {
            let loaded = isolate(&self.sink, &self.name, "loading cases for", || {
                self.definition.load_cases(&mut self.cases)
            });

            match loaded {
                Some(Ok(())) => (),
                Some(Err(error)) => {
                    tracing::warn!(
                        target: "suite",
                        suite = %self.name,
                        "failed to load cases: {error}"
                    );
                    sink_logf!(self.sink, "Failed to load cases for {}: {error}\n", self.name);
                    self.cases.slots.clear();
                    summary.load_failed = true;
                    return summary;
                }
                None => {
                    self.cases.slots.clear();
                    summary.load_failed = true;
                    return summary;
                }
            }

            self.loaded = true;
            tracing::debug!(
                target: "suite",
                suite = %self.name,
                count = self.cases.len(),
                "loaded cases"
            );
        }

        tracing::debug!(target: "suite", suite = %self.name, "setup");
        if isolate(&self.sink, &self.name, "setting up", || self.definition.setup()).is_none() {
            summary.setup_failed = true;
        } else {
            self.run_cases(&mut summary);
        }

        tracing::debug!(target: "suite", suite = %self.name, "teardown");
        if isolate(&self.sink, &self.name, "tearing down", || self.definition.teardown()).is_none()
        {
            summary.teardown_failed = true;
        }

        summary
    }

    fn run_cases(&mut self, summary: &mut SuiteSummary) {
        for case in self.cases.slots.iter_mut().flatten() {
            sink_logf!(self.sink, "Running {}\n", case.name());

            let outcome = case.run();
            tracing::debug!(
                target: "suite",
                suite = %self.name,
                case = case.name(),
                ?outcome,
                "case finished"
            );

            match &outcome {
                CaseOutcome::Passed => sink_logf!(self.sink, "Success\n"),
                CaseOutcome::Failed(description) => {
                    sink_logf!(self.sink, "{description}\n");
                    sink_logf!(self.sink, "Failed\n");
                }
                CaseOutcome::Errored(description) => {
                    sink_logf!(
                        self.sink,
                        "An unhandled exception was caught while running {}\n",
                        case.name()
                    );
                    sink_logf!(self.sink, "{description}\n");
                    sink_logf!(self.sink, "Errored\n");
                }
            }

            summary.record(&outcome);
        }
    }
}

/// Runs a suite-level hook, reporting a panic through the sink instead of unwinding further.
fn isolate<T>(
    sink: &SharedSink,
    suite: &str,
    stage: &str,
    hook: impl FnOnce() -> T,
) -> Option<T> {
    match panic::catch_unwind(AssertUnwindSafe(hook)) {
        Ok(value) => Some(value),
        Err(payload) => {
            let description = describe_panic(payload.as_ref());
            tracing::warn!(target: "suite", suite, stage, "hook {description}");

            sink_logf!(sink, "An unhandled exception was caught while {stage} {suite}\n");
            sink_logf!(sink, "{description}\n");
            None
        }
    }
}

impl std::fmt::Debug for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Suite")
            .field("name", &self.name)
            .field("case_count", &self.case_count())
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}
