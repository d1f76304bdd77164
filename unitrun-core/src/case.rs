//! Individual test cases and the outcome of running one.

use std::panic::{self, AssertUnwindSafe};

use crate::assertion::AssertionFailure;
use crate::error::{Error, Result};
use crate::sink::{ResultSink, SharedSink};

/// Reason a case did not complete normally.
#[derive(thiserror::Error, Debug)]
pub enum CaseFailure {
    /// A controlled equality assertion failed.
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    /// Any other fault raised while the case was running.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl CaseFailure {
    /// Wraps an arbitrary error as an unexpected failure.
    pub fn unexpected(error: impl Into<anyhow::Error>) -> Self {
        Self::Unexpected(error.into())
    }
}

/// Result returned by a case body: `Ok(true)` passes, `Ok(false)` fails.
pub type CaseResult = std::result::Result<bool, CaseFailure>;

/// Final classification of one case execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseOutcome {
    /// The case completed and reported success.
    Passed,
    /// The case failed an assertion or reported failure; holds the description.
    Failed(String),
    /// The case raised an unexpected fault; holds the fault's description.
    Errored(String),
}

impl CaseOutcome {
    /// Returns whether this outcome counts as a pass.
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Identity and output channel handed to a case body.
pub struct CaseContext {
    name: String,
    sink: SharedSink,
}

impl CaseContext {
    /// Returns the name of the case.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sink shared with the rest of the run.
    pub const fn sink(&self) -> &SharedSink {
        &self.sink
    }

    /// Emits one line through the shared sink.
    pub fn log_line(&self, line: &str) {
        self.sink.log_line(line);
    }
}

/// Test logic for a single case.
///
/// Only [`TestCase::run`] is required. `init` runs once right after the case is added to its
/// suite, and `cleanup` runs once right before the case is dropped.
pub trait TestCase {
    /// Prepares per-case state.
    fn init(&mut self, _context: &CaseContext) {}

    /// Executes the test.
    fn run(&mut self, context: &CaseContext) -> CaseResult;

    /// Releases per-case state.
    fn cleanup(&mut self, _context: &CaseContext) {}
}

impl<F> TestCase for F
where
    F: FnMut(&CaseContext) -> CaseResult,
{
    fn run(&mut self, context: &CaseContext) -> CaseResult {
        self(context)
    }
}

/// A named case owned by a suite.
pub struct Case {
    context: CaseContext,
    body: Box<dyn TestCase>,
}

impl Case {
    pub(crate) fn new(
        name: impl Into<String>,
        sink: SharedSink,
        mut body: Box<dyn TestCase>,
        position: usize,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyCaseName(position));
        }

        let context = CaseContext { name, sink };

        // A case whose init panicked is never built, so its cleanup never runs.
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| body.init(&context))) {
            return Err(Error::CaseInitPanicked {
                name: context.name,
                message: describe_panic(payload.as_ref()),
            });
        }

        Ok(Self { context, body })
    }

    /// Returns the case's name.
    pub fn name(&self) -> &str {
        self.context.name()
    }

    /// Runs the case body, converting every way it can end into a [`CaseOutcome`].
    ///
    /// Panics raised by the body are caught and reported as [`CaseOutcome::Errored`].
    pub fn run(&mut self) -> CaseOutcome {
        let Self { context, body } = self;
        let result = panic::catch_unwind(AssertUnwindSafe(|| body.run(context)));

        match result {
            Ok(Ok(true)) => CaseOutcome::Passed,
            Ok(Ok(false)) => CaseOutcome::Failed(format!("{} reported failure", context.name())),
            Ok(Err(CaseFailure::Assertion(failure))) => CaseOutcome::Failed(failure.to_string()),
            Ok(Err(CaseFailure::Unexpected(error))) => CaseOutcome::Errored(format!("{error:#}")),
            Err(payload) => CaseOutcome::Errored(describe_panic(payload.as_ref())),
        }
    }
}

impl Drop for Case {
    fn drop(&mut self) {
        let Self { context, body } = self;
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| body.cleanup(context))) {
            let description = describe_panic(payload.as_ref());
            tracing::warn!(target: "suite", case = context.name(), "cleanup {description}");

            context.sink.log_fmt(format_args!(
                "An unhandled exception was caught while cleaning up {}\n",
                context.name()
            ));
            context.sink.log_fmt(format_args!("{description}\n"));
        }
    }
}

impl std::fmt::Debug for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Case").field("name", &self.name()).finish()
    }
}

pub(crate) fn describe_panic(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        String::from("panicked")
    }
}
