//! Output sinks for human-readable reporting.
//!
//! This module provides:
//! - [`Reporter`] trait, the injectable sink the timing wrapper writes to
//! - [`Output`] for writing to the terminal
//! - [`MockReporter`] for capturing output in tests
//! - [`Theme`] for styling CLI messages
//!
//! # Example
//!
//! ```
//! use raikit::ui::{MockReporter, Reporter};
//!
//! let mut reporter = MockReporter::new();
//! reporter.line("hello");
//! assert_eq!(reporter.lines(), ["hello"]);
//! ```

pub mod mock;
pub mod output;
pub mod theme;

pub use mock::MockReporter;
pub use output::{Output, OutputMode};
pub use theme::{should_use_colors, Theme};

/// Trait for human-readable output sinks.
///
/// This trait allows capturing output in tests instead of writing to stdout.
pub trait Reporter {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Write a plain line of text.
    fn line(&mut self, text: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn output_mode(&self) -> OutputMode {
        (**self).output_mode()
    }

    fn line(&mut self, text: &str) {
        (**self).line(text)
    }

    fn success(&mut self, msg: &str) {
        (**self).success(msg)
    }

    fn warning(&mut self, msg: &str) {
        (**self).warning(msg)
    }

    fn error(&mut self, msg: &str) {
        (**self).error(msg)
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn output_mode(&self) -> OutputMode {
        (**self).output_mode()
    }

    fn line(&mut self, text: &str) {
        (**self).line(text)
    }

    fn success(&mut self, msg: &str) {
        (**self).success(msg)
    }

    fn warning(&mut self, msg: &str) {
        (**self).warning(msg)
    }

    fn error(&mut self, msg: &str) {
        (**self).error(msg)
    }
}

/// Create a terminal reporter for the given mode.
pub fn create_reporter(mode: OutputMode, colors: bool) -> Box<dyn Reporter> {
    let theme = if colors { Theme::new() } else { Theme::plain() };
    Box::new(Output::with_theme(mode, theme))
}
