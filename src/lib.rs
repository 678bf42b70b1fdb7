//! raikit - timing and capability utilities for model analysis.
//!
//! Two small, independent pieces shared by the analysis managers of a
//! model-analysis toolkit:
//!
//! - a timing wrapper that brackets any compute operation with separator
//!   lines and a `Time taken: M min S sec` report
//! - a capability predicate that decides whether a model can be used as a
//!   probabilistic classifier
//!
//! # Modules
//!
//! - [`capability`] - Structural classifier detection
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//! - [`manager`] - Compute seam for analysis managers
//! - [`timing`] - Execution-time instrumentation
//! - [`ui`] - Output sinks
//!
//! # Example
//!
//! ```
//! use raikit::capability::is_classifier;
//! use raikit::timing::measure_time;
//! use raikit::ui::MockReporter;
//! use serde_json::json;
//!
//! let model = json!({ "predict_proba": "fn" });
//! let mut reporter = MockReporter::new();
//! let mut check = measure_time(|()| is_classifier(Some(&model)), &mut reporter);
//! assert!(check(()));
//! ```

pub mod capability;
pub mod cli;
pub mod config;
pub mod error;
pub mod manager;
pub mod timing;
pub mod ui;

pub use capability::{is_classifier, Inspect};
pub use error::{RaikitError, Result};
pub use manager::Manager;
pub use timing::{measure_time, try_measure_time, Timer};
