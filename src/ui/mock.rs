//! Mock reporter for testing.
//!
//! `MockReporter` implements the `Reporter` trait and captures every line
//! and message for later assertion.
//!
//! # Example
//!
//! ```
//! use raikit::ui::{MockReporter, Reporter};
//!
//! let mut reporter = MockReporter::new();
//! reporter.line("Time taken: 0.0 min 1.5 sec");
//! reporter.success("Done!");
//!
//! assert!(reporter.has_line("Time taken"));
//! assert!(reporter.successes().contains(&"Done!".to_string()));
//! ```

use super::{OutputMode, Reporter};

/// Mock reporter implementation for testing.
///
/// Captures output regardless of the configured mode, so tests can assert on
/// exactly what a caller tried to write.
#[derive(Debug, Default)]
pub struct MockReporter {
    mode: OutputMode,
    lines: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockReporter {
    /// Create a new MockReporter with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockReporter with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured plain lines, in write order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if any captured line contains `text`.
    pub fn has_line(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l.contains(text))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl Reporter for MockReporter {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_lines_in_order() {
        let mut reporter = MockReporter::new();
        reporter.line("first");
        reporter.line("second");
        assert_eq!(reporter.lines(), ["first", "second"]);
    }

    #[test]
    fn captures_messages_by_kind() {
        let mut reporter = MockReporter::new();
        reporter.success("yes");
        reporter.warning("hmm");
        reporter.error("no");

        assert_eq!(reporter.successes(), ["yes"]);
        assert_eq!(reporter.warnings(), ["hmm"]);
        assert!(reporter.has_error("no"));
        assert!(reporter.lines().is_empty());
    }

    #[test]
    fn with_mode_sets_mode() {
        let reporter = MockReporter::with_mode(OutputMode::Verbose);
        assert_eq!(reporter.output_mode(), OutputMode::Verbose);
    }
}
