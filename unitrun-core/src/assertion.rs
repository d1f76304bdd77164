//! Equality assertions and the failure value they produce.

use std::fmt::{self, Display, Write};

/// Prefix used for every failed equality assertion.
const ASSERT_EQUAL_PREFIX: &str = "Assert equal failed: At ";

/// Identifies the place in source code where an assertion was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    /// Path of the source file.
    pub file: &'static str,
    /// 1-based line number.
    pub line: u32,
}

impl SourceLocation {
    /// Creates a new location from its parts.
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Returns the location of the caller of the function this is invoked from.
    #[track_caller]
    pub fn caller() -> Self {
        std::panic::Location::caller().into()
    }
}

impl From<&'static std::panic::Location<'static>> for SourceLocation {
    fn from(location: &'static std::panic::Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Describes a failed comparison.
///
/// The description is accumulated incrementally through [`AssertionFailure::append`]; once a
/// suite has logged it, the value is dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssertionFailure {
    info: String,
}

impl AssertionFailure {
    /// Creates a failure whose description starts with `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            info: initial.into(),
        }
    }

    /// Appends the textual rendering of `value` to the description.
    #[must_use]
    pub fn append(mut self, value: impl Display) -> Self {
        // Writing into a String cannot fail.
        let _ = write!(self.info, "{value}");
        self
    }

    /// Returns the accumulated description.
    pub fn info(&self) -> &str {
        &self.info
    }
}

impl Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info)
    }
}

impl std::error::Error for AssertionFailure {}

/// Compares `actual` against `expected`, recording `location` in the failure if they differ.
pub fn assert_equal_at<T>(
    actual: T,
    expected: T,
    location: SourceLocation,
) -> Result<(), AssertionFailure>
where
    T: PartialEq + Display,
{
    if actual == expected {
        return Ok(());
    }

    Err(AssertionFailure::new(ASSERT_EQUAL_PREFIX)
        .append(location)
        .append(" - Expected: ")
        .append(expected)
        .append(" Found: ")
        .append(actual))
}

/// Compares `actual` against `expected`, using the caller's location in any failure.
///
/// ```
/// use unitrun_core::assert_equal;
///
/// assert!(assert_equal(2 + 2, 4).is_ok());
/// assert!(assert_equal("left", "right").is_err());
/// ```
#[track_caller]
pub fn assert_equal<T>(actual: T, expected: T) -> Result<(), AssertionFailure>
where
    T: PartialEq + Display,
{
    assert_equal_at(actual, expected, SourceLocation::caller())
}

/// Asserts that `value` is `true`.
#[track_caller]
pub fn assert_true(value: bool) -> Result<(), AssertionFailure> {
    assert_equal_at(value, true, SourceLocation::caller())
}

/// Asserts that `value` is `false`.
#[track_caller]
pub fn assert_false(value: bool) -> Result<(), AssertionFailure> {
    assert_equal_at(value, false, SourceLocation::caller())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn equal_values_pass() {
        assert!(assert_equal(4, 4).is_ok());
        assert!(assert_equal("abc", "abc").is_ok());
        assert!(assert_equal_at(1.5, 1.5, SourceLocation::new("x.rs", 1)).is_ok());
    }

    #[test]
    fn unequal_values_describe_location_and_values() {
        let location = SourceLocation::new("tests/arith.rs", 42);
        let failure = assert_equal_at(3, 4, location).unwrap_err();

        assert_eq!(
            failure.info(),
            "Assert equal failed: At tests/arith.rs:42 - Expected: 4 Found: 3"
        );
    }

    #[test]
    fn caller_location_is_captured() {
        let line = line!() + 1;
        let failure = assert_equal("found", "wanted").unwrap_err();

        assert!(failure.info().contains(&format!("{}:{line}", file!())));
        assert!(failure.info().contains("Expected: wanted"));
        assert!(failure.info().contains("Found: found"));
    }

    #[test]
    fn boolean_helpers() {
        assert!(assert_true(true).is_ok());
        assert!(assert_false(false).is_ok());

        let failure = assert_true(false).unwrap_err();
        assert!(failure.info().ends_with("Expected: true Found: false"));

        let failure = assert_false(true).unwrap_err();
        assert!(failure.info().ends_with("Expected: false Found: true"));
    }

    #[test]
    fn append_accumulates() {
        let failure = AssertionFailure::new("a").append('b').append(3).append("d");
        assert_eq!(failure.to_string(), "ab3d");
    }
}
