//! Command-line entry point for running `unitrun` suites.
//!
//! Applications build a [`unitrun_core::SuiteRegistry`] naming the suites they provide and hand
//! it to [`entry::run`], which parses arguments, configures tracing, runs the selected suites
//! with results on stdout, and maps the outcome to a process exit code.

pub mod args;
pub mod entry;
pub mod events;
pub mod samples;
