//! Execution-time instrumentation for compute operations.
//!
//! Any operation can be wrapped so that each call writes:
//!
//! ```text
//! ================================================================================
//! Time taken: 0.0 min 1.234 sec
//! ================================================================================
//! ```
//!
//! to a [`Reporter`](crate::ui::Reporter). Output the operation itself
//! produces lands between the first separator and the timing line.
//!
//! - [`measure_time`] / [`try_measure_time`] - wrap with default behavior
//! - [`Timer`] - builder for opting into reports on failure
//! - [`Elapsed`] - minute/second split and timing line rendering
//! - [`format`] - separator and float rendering

pub mod elapsed;
pub mod format;
pub mod timer;

pub use elapsed::{divmod, Elapsed};
pub use format::{py_float, separator, SEPARATOR_MARKER, SEPARATOR_WIDTH};
pub use timer::{measure_time, try_measure_time, Timer};
