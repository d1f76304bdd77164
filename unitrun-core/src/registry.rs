//! Name-keyed factories for suite definitions.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::runner::Runner;
use crate::suite::SuiteDefinition;

/// Produces a fresh, owned suite definition.
pub type SuiteFactory = fn() -> Box<dyn SuiteDefinition>;

fn construct<T>() -> Box<dyn SuiteDefinition>
where
    T: SuiteDefinition + Default + 'static,
{
    Box::new(T::default())
}

/// Maps suite names to factories, so an application can decide at startup which suites to
/// instantiate into a [`Runner`].
#[derive(Clone, Debug, Default)]
pub struct SuiteRegistry {
    factories: BTreeMap<String, SuiteFactory>,
}

impl SuiteRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the factory registered under `name`.
    pub fn register(&mut self, name: impl Into<String>, factory: SuiteFactory) -> &mut Self {
        self.factories.insert(name.into(), factory);
        self
    }

    /// Adds a factory that default-constructs `T`.
    #[must_use]
    pub fn with<T>(mut self, name: impl Into<String>) -> Self
    where
        T: SuiteDefinition + Default + 'static,
    {
        self.register(name, construct::<T>);
        self
    }

    /// Returns the registered names, in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Returns whether a factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Constructs a new definition from the factory registered under `name`.
    pub fn instantiate(&self, name: &str) -> Option<Box<dyn SuiteDefinition>> {
        self.factories.get(name).map(|factory| factory())
    }

    /// Instantiates every registered suite into `runner`.
    pub fn install_all(&self, runner: &mut Runner) -> Result<()> {
        for (name, factory) in &self.factories {
            runner.register_boxed(name.as_str(), factory())?;
        }
        Ok(())
    }

    /// Instantiates only the named suites into `runner`. Unknown names are skipped.
    pub fn install_selected<S>(&self, runner: &mut Runner, names: &[S]) -> Result<()>
    where
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if let Some(definition) = self.instantiate(name) {
                runner.register_boxed(name, definition)?;
            } else {
                tracing::debug!(target: "runner", suite = name, "no such suite registered");
            }
        }
        Ok(())
    }
}

/// Builds a [`SuiteRegistry`] from suite types, named after the types themselves.
///
/// ```
/// use unitrun_core::{suite_registry, CaseList, SuiteDefinition};
///
/// #[derive(Default)]
/// struct Parsing;
///
/// impl SuiteDefinition for Parsing {
///     fn load_cases(&mut self, _cases: &mut CaseList) -> unitrun_core::Result<()> {
///         Ok(())
///     }
/// }
///
/// let registry = suite_registry!(Parsing);
/// assert!(registry.contains("Parsing"));
/// ```
#[macro_export]
macro_rules! suite_registry {
    ($($suite:ident),* $(,)?) => {
        $crate::SuiteRegistry::new()
            $( .with::<$suite>(::std::stringify!($suite)) )*
    };
}
