//! The classifier predicate.

use serde::Serialize;

use super::inspect::{Inspect, Member};
use super::PREDICT_PROBA;

/// Check whether a candidate model behaves as a probabilistic classifier.
///
/// True only when the candidate exists and its `predict_proba` member is
/// present and not null. Never fails: a lookup that returns an error counts
/// as "not a classifier".
///
/// # Example
///
/// ```
/// use raikit::capability::is_classifier;
/// use serde_json::json;
///
/// let svc = json!({ "predict": "fn", "predict_proba": "fn" });
/// assert!(is_classifier(Some(&svc)));
/// assert!(!is_classifier(None));
/// ```
pub fn is_classifier(model: Option<&dyn Inspect>) -> bool {
    match model {
        Some(model) => probe(model, PREDICT_PROBA) == Member::Present,
        None => false,
    }
}

/// Summary of a capability check, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityReport {
    /// Candidate label, if it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the candidate is a probabilistic classifier.
    pub classifier: bool,
    /// State of the `predict_proba` member.
    pub predict_proba: Member,
}

/// Run the capability check and keep the details.
pub fn classify_model(model: &dyn Inspect) -> CapabilityReport {
    let predict_proba = probe(model, PREDICT_PROBA);
    CapabilityReport {
        name: model.label().map(str::to_string),
        classifier: predict_proba == Member::Present,
        predict_proba,
    }
}

/// Look up `name`, resolving any failure to [`Member::Missing`].
fn probe(model: &dyn Inspect, name: &str) -> Member {
    model.member(name).unwrap_or_else(|err| {
        tracing::debug!("Inspecting '{}' failed, treating as missing: {}", name, err);
        Member::Missing
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{Declared, ModelManifest, ProbabilisticClassifier};
    use crate::error::{RaikitError, Result};
    use serde_json::json;

    struct Failing;

    impl Inspect for Failing {
        fn member(&self, name: &str) -> Result<Member> {
            Err(RaikitError::Inspection {
                member: name.to_string(),
                message: "property getter raised".to_string(),
            })
        }
    }

    /// Fails only on the member the detector asks about.
    struct BrokenGetter;

    impl Inspect for BrokenGetter {
        fn member(&self, name: &str) -> Result<Member> {
            if name == PREDICT_PROBA {
                Err(RaikitError::Inspection {
                    member: name.to_string(),
                    message: "getter raised".to_string(),
                })
            } else {
                Ok(Member::Present)
            }
        }

        fn label(&self) -> Option<&str> {
            Some("broken")
        }
    }

    struct Regressor;

    impl Inspect for Regressor {
        fn member(&self, name: &str) -> Result<Member> {
            Ok(if name == "predict" {
                Member::Present
            } else {
                Member::Missing
            })
        }
    }

    struct Logistic;

    impl ProbabilisticClassifier for Logistic {
        fn predict_proba(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
            Ok(rows.iter().map(|_| vec![0.3, 0.7]).collect())
        }
    }

    #[test]
    fn absent_model_is_not_classifier() {
        assert!(!is_classifier(None));
    }

    #[test]
    fn model_without_predict_proba_is_not_classifier() {
        assert!(!is_classifier(Some(&Regressor)));
        assert!(!is_classifier(Some(&json!({ "predict": "fn" }))));
    }

    #[test]
    fn model_with_predict_proba_is_classifier() {
        assert!(is_classifier(Some(&json!({ "predict_proba": "fn" }))));
        let manifest = ModelManifest::default().with_member("predict_proba", json!(true));
        assert!(is_classifier(Some(&manifest)));
    }

    #[test]
    fn null_predict_proba_is_not_classifier() {
        assert!(!is_classifier(Some(&json!({ "predict_proba": null }))));
        let manifest = ModelManifest::default().with_member("predict_proba", json!(null));
        assert!(!is_classifier(Some(&manifest)));
    }

    #[test]
    fn declared_classifier_is_classifier() {
        let model = Logistic;
        assert!(is_classifier(Some(&Declared(&model))));
    }

    #[test]
    fn inspection_error_is_not_classifier() {
        assert!(!is_classifier(Some(&Failing)));
    }

    #[test]
    fn failing_predict_proba_lookup_reports_missing() {
        assert!(!is_classifier(Some(&BrokenGetter)));

        let report = classify_model(&BrokenGetter);
        assert_eq!(report.name.as_deref(), Some("broken"));
        assert!(!report.classifier);
        assert_eq!(report.predict_proba, Member::Missing);
    }

    #[test]
    fn non_object_value_is_not_classifier() {
        assert!(!is_classifier(Some(&json!("predict_proba"))));
    }

    #[test]
    fn report_carries_label_and_member_state() {
        let manifest = ModelManifest {
            name: Some("churn-svc".to_string()),
            ..Default::default()
        }
        .with_member("predict_proba", json!(null));

        let report = classify_model(&manifest);
        assert_eq!(report.name.as_deref(), Some("churn-svc"));
        assert!(!report.classifier);
        assert_eq!(report.predict_proba, Member::Null);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = classify_model(&json!({ "predict_proba": "fn" }));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            json!({ "classifier": true, "predict_proba": "present" })
        );
    }
}
