//! Execution and failure-isolation engine for the `unitrun` test framework.
//!
//! The framework is organized as a three-level hierarchy:
//!
//! 1. A [`Runner`] owns a set of uniquely named [`Suite`]s and runs all of them, or one by name.
//! 2. A [`Suite`] owns an ordered list of [`Case`]s, brackets them with its `setup` and
//!    `teardown` hooks, and isolates each case's failure so the remaining cases still run.
//! 3. A [`Case`] wraps user test logic ([`TestCase`]) whose run either passes, fails an
//!    equality assertion ([`AssertionFailure`]), or raises an unexpected fault.
//!
//! All result output flows through a [`ResultSink`] shared by the whole hierarchy; the engine
//! never knows where it ends up. Diagnostics are emitted separately through `tracing` under the
//! `suite` and `runner` targets.
//!
//! ```
//! use std::rc::Rc;
//! use unitrun_core::{assert_equal, CaseList, MemorySink, Runner, SuiteDefinition};
//!
//! #[derive(Default)]
//! struct Arithmetic;
//!
//! impl SuiteDefinition for Arithmetic {
//!     fn load_cases(&mut self, cases: &mut CaseList) -> unitrun_core::Result<()> {
//!         cases.add_fn("AddsCorrectly", |_| {
//!             assert_equal(2 + 2, 4)?;
//!             Ok(true)
//!         })?;
//!         Ok(())
//!     }
//! }
//!
//! let sink = Rc::new(MemorySink::new());
//! let mut runner = Runner::new(sink.clone());
//! runner.add_suite::<Arithmetic>("Arithmetic")?;
//! runner.run();
//!
//! assert_eq!(sink.lines(), vec!["Running AddsCorrectly", "Success"]);
//! # Ok::<(), unitrun_core::Error>(())
//! ```

mod assertion;
mod case;
mod error;
mod registry;
mod runner;
mod sink;
mod suite;
mod summary;

pub use assertion::{
    AssertionFailure, SourceLocation, assert_equal, assert_equal_at, assert_false, assert_true,
};
pub use case::{Case, CaseContext, CaseFailure, CaseOutcome, CaseResult, TestCase};
pub use error::{Error, Result};
pub use registry::{SuiteFactory, SuiteRegistry};
pub use runner::Runner;
pub use sink::{MemorySink, ResultSink, SharedSink, StdoutSink};
pub use suite::{CaseList, Suite, SuiteDefinition};
pub use summary::{RunSummary, SuiteSummary};
