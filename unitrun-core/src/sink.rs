//! Destinations for test result output.

use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

/// Receives the textual results of a test run.
///
/// The engine is single-threaded; implementations are called synchronously and repeatedly from
/// one thread and therefore take `&self`, using interior mutability where they need state.
pub trait ResultSink {
    /// Emits one line of output.
    fn log_line(&self, line: &str);

    /// Emits one formatted message. No trailing newline is added beyond what the message holds.
    fn log_fmt(&self, args: fmt::Arguments<'_>);
}

/// Handle through which a runner, its suites, and their cases share one sink.
pub type SharedSink = Rc<dyn ResultSink>;

/// Logs a formatted message to a [`ResultSink`].
///
/// ```
/// use unitrun_core::{MemorySink, sink_logf};
///
/// let sink = MemorySink::new();
/// sink_logf!(sink, "Running {}\n", "AddsCorrectly");
/// assert_eq!(sink.lines(), vec!["Running AddsCorrectly"]);
/// ```
#[macro_export]
macro_rules! sink_logf {
    ($sink:expr, $($arg:tt)*) => {{
        use $crate::ResultSink as _;
        $sink.log_fmt(::std::format_args!($($arg)*))
    }};
}

/// Writes results to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl ResultSink for StdoutSink {
    fn log_line(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        // Result output has nowhere else to go if stdout is closed.
        let _ = writeln!(stdout, "{line}");
    }

    fn log_fmt(&self, args: fmt::Arguments<'_>) {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_fmt(args);
        let _ = stdout.flush();
    }
}

/// Captures results in memory, split into lines.
///
/// Formatted messages are buffered until a newline completes them, so `log_fmt("Success\n")`
/// and `log_line("Success")` capture identically.
#[derive(Debug, Default)]
pub struct MemorySink {
    state: RefCell<MemorySinkState>,
}

#[derive(Debug, Default)]
struct MemorySinkState {
    lines: Vec<String>,
    partial: String,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all completed lines captured so far.
    pub fn lines(&self) -> Vec<String> {
        self.state.borrow().lines.clone()
    }

    /// Returns any trailing text not yet terminated by a newline.
    pub fn pending(&self) -> String {
        self.state.borrow().partial.clone()
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.lines.clear();
        state.partial.clear();
    }
}

impl ResultSink for MemorySink {
    fn log_line(&self, line: &str) {
        let mut state = self.state.borrow_mut();
        let mut completed = std::mem::take(&mut state.partial);
        completed.push_str(line);
        state.lines.push(completed);
    }

    fn log_fmt(&self, args: fmt::Arguments<'_>) {
        let text = args.to_string();
        let mut state = self.state.borrow_mut();

        let mut pieces = text.split('\n').peekable();
        while let Some(piece) = pieces.next() {
            state.partial.push_str(piece);
            if pieces.peek().is_some() {
                let completed = std::mem::take(&mut state.partial);
                state.lines.push(completed);
            }
        }
    }
}

impl<S: ResultSink + ?Sized> ResultSink for Rc<S> {
    fn log_line(&self, line: &str) {
        (**self).log_line(line);
    }

    fn log_fmt(&self, args: fmt::Arguments<'_>) {
        (**self).log_fmt(args);
    }
}
