/// Errors raised when a suite or case cannot be registered.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A suite was registered without a name.
    #[error("suite name must not be empty")]
    EmptySuiteName,

    /// A case was added to a suite without a name.
    #[error("case name must not be empty (suite position {0})")]
    EmptyCaseName(usize),

    /// A case's `init` hook panicked while the case was being added to its suite.
    #[error("case {name} could not be initialized: {message}")]
    CaseInitPanicked {
        /// Name of the case.
        name: String,
        /// Description of the panic.
        message: String,
    },
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
