//! Capability detection for candidate models.
//!
//! Downstream analysis only treats a model as a classifier when it can
//! predict class probabilities. Models come from many frameworks, so the
//! check is structural: it asks the candidate for a `predict_proba` member
//! rather than requiring a particular type.
//!
//! - [`Inspect`] - structural member lookup
//! - [`ProbabilisticClassifier`] + [`Declared`] - explicit capability
//! - [`ModelManifest`] - YAML/JSON description of a third-party model
//! - [`is_classifier`] / [`classify_model`] - the predicate

pub mod detector;
pub mod inspect;
pub mod manifest;

pub use detector::{classify_model, is_classifier, CapabilityReport};
pub use inspect::{Declared, Inspect, Member, ProbabilisticClassifier};
pub use manifest::ModelManifest;

/// Member whose presence marks a probabilistic classifier.
pub const PREDICT_PROBA: &str = "predict_proba";
