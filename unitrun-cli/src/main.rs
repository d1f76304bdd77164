//! Runs the sample suites bundled with `unitrun`.

use std::process::ExitCode;

fn main() -> ExitCode {
    unitrun_cli::entry::run(&unitrun_cli::samples::registry())
}
