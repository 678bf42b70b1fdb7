//! Inspect command implementation.
//!
//! The `raikit inspect` command loads a model manifest and reports whether
//! the model it describes can be used as a probabilistic classifier.

use crate::capability::{classify_model, CapabilityReport, Member, ModelManifest};
use crate::cli::args::InspectArgs;
use crate::error::{RaikitError, Result};
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandResult};

/// The inspect command implementation.
pub struct InspectCommand {
    args: InspectArgs,
}

impl InspectCommand {
    /// Create a new inspect command.
    pub fn new(args: InspectArgs) -> Self {
        Self { args }
    }

    fn describe(&self, report: &CapabilityReport) -> String {
        let name = report
            .name
            .clone()
            .unwrap_or_else(|| self.args.manifest.display().to_string());

        match report.predict_proba {
            Member::Present => format!("{} is a probabilistic classifier", name),
            Member::Null => format!(
                "{} is not a probabilistic classifier (predict_proba is null)",
                name
            ),
            Member::Missing => format!(
                "{} is not a probabilistic classifier (no predict_proba)",
                name
            ),
        }
    }
}

impl Command for InspectCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let manifest = match ModelManifest::load(&self.args.manifest) {
            Ok(m) => m,
            Err(RaikitError::ManifestParseError { path, message }) => {
                reporter.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let report = classify_model(&manifest);

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            reporter.line(&json);
        } else if report.classifier {
            reporter.success(&self.describe(&report));
        } else {
            reporter.warning(&self.describe(&report));
        }

        if report.classifier {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
