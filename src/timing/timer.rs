//! The timing wrapper itself.

use std::time::Instant;

use crate::ui::Reporter;

use super::elapsed::Elapsed;
use super::format::{separator, SEPARATOR_WIDTH};

/// Wraps operations so each call is bracketed by a timing report.
///
/// By default a call that fails (returns `Err` through
/// [`Timer::wrap_fallible`], or panics) writes only the opening separator.
/// With [`Timer::report_on_failure`] the report is written on every exit
/// path.
#[derive(Debug)]
pub struct Timer<S> {
    sink: S,
    report_on_failure: bool,
}

impl<S: Reporter> Timer<S> {
    /// Create a timer writing to `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            report_on_failure: false,
        }
    }

    /// Also report when the wrapped operation fails.
    pub fn report_on_failure(mut self, enabled: bool) -> Self {
        self.report_on_failure = enabled;
        self
    }

    /// Wrap an operation, forwarding its arguments and return value.
    pub fn wrap<A, R, F>(self, mut op: F) -> impl FnMut(A) -> R
    where
        F: FnMut(A) -> R,
    {
        let Timer {
            mut sink,
            report_on_failure,
        } = self;

        move |args| {
            let span = Span::begin(&mut sink, report_on_failure);
            let output = op(args);
            span.finish();
            output
        }
    }

    /// Wrap a fallible operation. An `Err` is returned unchanged.
    pub fn wrap_fallible<A, T, E, F>(self, mut op: F) -> impl FnMut(A) -> Result<T, E>
    where
        F: FnMut(A) -> Result<T, E>,
    {
        let Timer {
            mut sink,
            report_on_failure,
        } = self;

        move |args| {
            let span = Span::begin(&mut sink, report_on_failure);
            match op(args) {
                Ok(value) => {
                    span.finish();
                    Ok(value)
                }
                Err(err) => {
                    span.fail();
                    Err(err)
                }
            }
        }
    }
}

/// Wrap `op` so every call prints its elapsed time to `sink`.
///
/// # Example
///
/// ```
/// use raikit::timing::measure_time;
/// use raikit::ui::MockReporter;
///
/// let mut reporter = MockReporter::new();
/// let mut add = measure_time(|(a, b): (i32, i32)| a + b, &mut reporter);
/// assert_eq!(add((2, 3)), 5);
/// drop(add);
///
/// assert_eq!(reporter.lines().len(), 3);
/// assert!(reporter.lines()[1].starts_with("Time taken: 0.0 min "));
/// ```
pub fn measure_time<A, R, F, S>(op: F, sink: S) -> impl FnMut(A) -> R
where
    F: FnMut(A) -> R,
    S: Reporter,
{
    Timer::new(sink).wrap(op)
}

/// Like [`measure_time`] for operations returning `Result`.
///
/// An `Err` propagates unchanged and no timing line is written for it.
pub fn try_measure_time<A, T, E, F, S>(op: F, sink: S) -> impl FnMut(A) -> Result<T, E>
where
    F: FnMut(A) -> Result<T, E>,
    S: Reporter,
{
    Timer::new(sink).wrap_fallible(op)
}

/// One timed call: opening separator on begin, report on finish.
struct Span<'s, S: Reporter> {
    sink: &'s mut S,
    start: Instant,
    report_on_failure: bool,
    done: bool,
}

impl<'s, S: Reporter> Span<'s, S> {
    fn begin(sink: &'s mut S, report_on_failure: bool) -> Self {
        sink.line(&separator(SEPARATOR_WIDTH));
        Self {
            sink,
            start: Instant::now(),
            report_on_failure,
            done: false,
        }
    }

    fn finish(mut self) {
        self.report();
        self.done = true;
    }

    fn fail(mut self) {
        if self.report_on_failure {
            self.report();
        }
        self.done = true;
    }

    fn report(&mut self) {
        let duration = self.start.elapsed();
        tracing::debug!("timed call finished");
        self.sink.line(&Elapsed::from_duration(duration).to_string());
        self.sink.line(&separator(SEPARATOR_WIDTH));
    }
}

impl<S: Reporter> Drop for Span<'_, S> {
    // Only reached without `done` when the wrapped operation panicked.
    fn drop(&mut self) {
        if !self.done && self.report_on_failure {
            self.report();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockReporter;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::time::Duration;

    fn is_separator(line: &str) -> bool {
        line.len() == 80 && line.chars().all(|c| c == '=')
    }

    fn reported_parts(line: &str) -> (f64, f64) {
        let rest = line
            .strip_prefix("Time taken: ")
            .and_then(|r| r.strip_suffix(" sec"))
            .expect("timing line shape");
        let (minutes, seconds) = rest.split_once(" min ").expect("min separator");
        (minutes.parse().unwrap(), seconds.parse().unwrap())
    }

    #[test]
    fn forwards_positional_and_named_arguments() {
        let mut reporter = MockReporter::new();
        let mut seen = Vec::new();
        {
            let mut timed = measure_time(
                |(a, b, c): (i32, &str, Option<i32>)| {
                    seen.push((a, b.to_string(), c.unwrap_or(3)));
                },
                &mut reporter,
            );
            timed((1, "two", None));
            timed((4, "five", Some(6)));
        }

        assert_eq!(
            seen,
            vec![(1, "two".to_string(), 3), (4, "five".to_string(), 6)]
        );
    }

    #[test]
    fn forwards_return_value() {
        let mut reporter = MockReporter::new();
        let mut timed = measure_time(|x: u32| x * 2, &mut reporter);
        assert_eq!(timed(21), 42);
    }

    #[test]
    fn brackets_timing_line_with_two_separators() {
        let mut reporter = MockReporter::new();
        {
            let mut timed = measure_time(|()| {}, &mut reporter);
            timed(());
        }

        let lines = reporter.lines();
        assert_eq!(lines.len(), 3);
        assert!(is_separator(&lines[0]));
        assert!(lines[1].starts_with("Time taken: "));
        assert!(is_separator(&lines[2]));
        assert_eq!(lines[0], lines[2]);
    }

    #[test]
    fn each_call_gets_its_own_report() {
        let mut reporter = MockReporter::new();
        {
            let mut timed = measure_time(|()| {}, &mut reporter);
            timed(());
            timed(());
        }
        assert_eq!(reporter.lines().len(), 6);
    }

    #[test]
    fn reports_sleep_duration() {
        let mut reporter = MockReporter::new();
        {
            let mut timed = measure_time(
                |()| std::thread::sleep(Duration::from_millis(100)),
                &mut reporter,
            );
            timed(());
        }

        let (minutes, seconds) = reported_parts(&reporter.lines()[1]);
        assert_eq!(minutes, 0.0);
        assert!(reporter.lines()[1].starts_with("Time taken: 0.0 min "));
        assert!(seconds >= 0.1, "seconds = {}", seconds);
        assert!(seconds < 1.0, "seconds = {}", seconds);
    }

    #[test]
    fn err_propagates_without_report() {
        let mut reporter = MockReporter::new();
        let result: Result<(), String> = {
            let mut timed = try_measure_time(|()| Err("boom".to_string()), &mut reporter);
            timed(())
        };

        assert_eq!(result, Err("boom".to_string()));
        assert_eq!(reporter.lines().len(), 1);
        assert!(!reporter.has_line("Time taken"));
    }

    #[test]
    fn ok_from_fallible_is_reported() {
        let mut reporter = MockReporter::new();
        let result: Result<u8, String> = {
            let mut timed = try_measure_time(|()| Ok(7), &mut reporter);
            timed(())
        };

        assert_eq!(result, Ok(7));
        assert_eq!(reporter.lines().len(), 3);
    }

    #[test]
    fn panic_propagates_without_report() {
        let mut reporter = MockReporter::new();
        let outcome = {
            let mut timed = measure_time(|()| panic!("compute exploded"), &mut reporter);
            catch_unwind(AssertUnwindSafe(|| timed(())))
        };

        assert!(outcome.is_err());
        assert_eq!(reporter.lines().len(), 1);
        assert!(!reporter.has_line("Time taken"));
    }

    #[test]
    fn report_on_failure_reports_err() {
        let mut reporter = MockReporter::new();
        let result: Result<(), &str> = {
            let mut timed = Timer::new(&mut reporter)
                .report_on_failure(true)
                .wrap_fallible(|()| Err("nope"));
            timed(())
        };

        assert!(result.is_err());
        let lines = reporter.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Time taken: "));
        assert!(is_separator(&lines[2]));
    }

    #[test]
    fn report_on_failure_reports_panic() {
        let mut reporter = MockReporter::new();
        let outcome = {
            let mut timed = Timer::new(&mut reporter)
                .report_on_failure(true)
                .wrap(|()| panic!("compute exploded"));
            catch_unwind(AssertUnwindSafe(|| timed(())))
        };

        assert!(outcome.is_err());
        assert_eq!(reporter.lines().len(), 3);
        assert!(reporter.has_line("Time taken"));
    }
}
