//! Structural inspection of candidate models.
//!
//! Candidate models come from unrelated frameworks with no common base
//! type. [`Inspect`] asks a candidate about a member by name, and the
//! adapters here let different kinds of candidates answer.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// State of a named member on a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Member {
    /// The candidate has no such member.
    Missing,
    /// The member is declared but currently null.
    Null,
    /// The member is declared and usable.
    Present,
}

impl Member {
    /// Classify a looked-up value: absent, null, or anything else.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None => Self::Missing,
            Some(Value::Null) => Self::Null,
            Some(_) => Self::Present,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Missing => write!(f, "missing"),
            Member::Null => write!(f, "null"),
            Member::Present => write!(f, "present"),
        }
    }
}

/// Trait for candidates that can be asked about their members.
pub trait Inspect {
    /// Look up a member by name.
    ///
    /// Implementations may fail (for example, when resolving the member has
    /// to evaluate something that can error) and report it as `Err`; callers
    /// decide how to treat it. Implementations must not panic.
    fn member(&self, name: &str) -> Result<Member>;

    /// Human-readable name of the candidate, if it has one.
    fn label(&self) -> Option<&str> {
        None
    }
}

/// Models that declare probability prediction explicitly.
pub trait ProbabilisticClassifier {
    /// Predict class probabilities, one row of probabilities per input row.
    fn predict_proba(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>>;
}

/// Adapter exposing a [`ProbabilisticClassifier`] to structural inspection.
#[derive(Debug, Clone, Copy)]
pub struct Declared<'a, C: ?Sized>(pub &'a C);

impl<C: ProbabilisticClassifier + ?Sized> Inspect for Declared<'_, C> {
    fn member(&self, name: &str) -> Result<Member> {
        if name == super::PREDICT_PROBA {
            Ok(Member::Present)
        } else {
            Ok(Member::Missing)
        }
    }
}

/// JSON objects answer with their keys; any other value has no members.
impl Inspect for Value {
    fn member(&self, name: &str) -> Result<Member> {
        Ok(Member::from_value(
            self.as_object().and_then(|obj| obj.get(name)),
        ))
    }

    fn label(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }
}
