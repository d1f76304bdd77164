//! The runner: a name-keyed set of suites that can be run together or one at a time.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::sink::SharedSink;
use crate::suite::{Suite, SuiteDefinition};
use crate::summary::{RunSummary, SuiteSummary};

/// Owns a set of uniquely named suites, all logging to one shared sink.
///
/// Suites run in lexical order of their names.
pub struct Runner {
    sink: SharedSink,
    suites: BTreeMap<String, Suite>,
}

impl Runner {
    /// Creates an empty runner whose suites will log through `sink`.
    pub fn new(sink: SharedSink) -> Self {
        Self {
            sink,
            suites: BTreeMap::new(),
        }
    }

    /// Returns the sink shared by every registered suite.
    pub const fn sink(&self) -> &SharedSink {
        &self.sink
    }

    /// Registers `definition` under `name`, dropping any suite previously registered there.
    ///
    /// Returns whether an existing suite was replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        definition: impl SuiteDefinition + 'static,
    ) -> Result<bool> {
        self.register_boxed(name, Box::new(definition))
    }

    /// Registers an already-boxed suite definition under `name`.
    pub fn register_boxed(
        &mut self,
        name: impl Into<String>,
        definition: Box<dyn SuiteDefinition>,
    ) -> Result<bool> {
        let suite = Suite::new(name, definition, self.sink.clone())?;
        let name = suite.name().to_owned();

        let replaced = self.suites.insert(name.clone(), suite).is_some();
        if replaced {
            tracing::debug!(
                target: "runner",
                suite = %name,
                "replaced previously registered suite"
            );
        }

        Ok(replaced)
    }

    /// Registers a default-constructed suite of type `T` under `name`.
    pub fn add_suite<T>(&mut self, name: impl Into<String>) -> Result<bool>
    where
        T: SuiteDefinition + Default + 'static,
    {
        self.register(name, T::default())
    }

    /// Drops the suite registered under `name`, returning whether one was present.
    pub fn release(&mut self, name: &str) -> bool {
        self.suites.remove(name).is_some()
    }

    /// Returns whether a suite is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.suites.contains_key(name)
    }

    /// Returns the suite registered under `name`.
    pub fn suite(&self, name: &str) -> Option<&Suite> {
        self.suites.get(name)
    }

    /// Returns the names of all registered suites, in run order.
    pub fn suite_names(&self) -> impl Iterator<Item = &str> {
        self.suites.keys().map(String::as_str)
    }

    /// Returns the number of registered suites.
    pub fn len(&self) -> usize {
        self.suites.len()
    }

    /// Returns whether no suites are registered.
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// Runs every registered suite.
    pub fn run(&mut self) -> RunSummary {
        let mut summary = RunSummary::default();

        for suite in self.suites.values_mut() {
            tracing::debug!(target: "runner", suite = suite.name(), "running suite");
            summary.push(suite.run());
        }

        summary
    }

    /// Runs the suite registered under `name`.
    ///
    /// Unknown names are tolerated: nothing is logged and `None` is returned.
    pub fn run_suite(&mut self, name: &str) -> Option<SuiteSummary> {
        let Some(suite) = self.suites.get_mut(name) else {
            tracing::debug!(target: "runner", suite = name, "no such suite; ignoring");
            return None;
        };

        tracing::debug!(target: "runner", suite = name, "running suite");
        Some(suite.run())
    }
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("suites", &self.suites.values().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Registers each named suite type with a runner, using the type's name as the suite name.
///
/// Each type must implement [`crate::SuiteDefinition`] and [`Default`]. Evaluates to
/// `unitrun_core::Result<()>`.
///
/// ```
/// use unitrun_core::{add_suites, CaseList, MemorySink, Runner, SuiteDefinition};
/// use std::rc::Rc;
///
/// #[derive(Default)]
/// struct Smoke;
///
/// impl SuiteDefinition for Smoke {
///     fn load_cases(&mut self, cases: &mut CaseList) -> unitrun_core::Result<()> {
///         cases.add_fn("Boots", |_| Ok(true))?;
///         Ok(())
///     }
/// }
///
/// let mut runner = Runner::new(Rc::new(MemorySink::new()));
/// add_suites!(runner, Smoke).unwrap();
/// assert!(runner.contains("Smoke"));
/// ```
#[macro_export]
macro_rules! add_suites {
    ($runner:expr, $($suite:ident),+ $(,)?) => {
        ::std::result::Result::<(), $crate::Error>::Ok(())
            $( .and_then(|()| $runner.add_suite::<$suite>(::std::stringify!($suite)).map(drop)) )+
    };
}
