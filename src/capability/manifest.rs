//! Model manifests: structural descriptions of third-party models.
//!
//! A manifest lists the members a model exposes, so a model from any
//! framework can be checked without linking against that framework.
//!
//! ```yaml
//! name: churn-svc
//! framework: sklearn
//! members:
//!   predict: callable
//!   predict_proba: ~        # declared, but disabled (probability=False)
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RaikitError, Result};

use super::inspect::{Inspect, Member};

/// Structural description of a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelManifest {
    /// Model name (for display purposes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Originating framework, informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,

    /// Member name to current value; `null` means declared but unusable.
    pub members: BTreeMap<String, Value>,
}

impl ModelManifest {
    /// Load a manifest, choosing JSON or YAML by file extension.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RaikitError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("model manifest not found: {}", path.display()),
            )));
        }

        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        };

        parsed.map_err(|message| RaikitError::ManifestParseError {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse a YAML manifest.
    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Parse a JSON manifest.
    pub fn from_json_str(content: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    /// Add or replace a member.
    pub fn with_member(mut self, name: &str, value: Value) -> Self {
        self.members.insert(name.to_string(), value);
        self
    }
}

impl Inspect for ModelManifest {
    fn member(&self, name: &str) -> Result<Member> {
        Ok(Member::from_value(self.members.get(name)))
    }

    fn label(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
