//! Configuration schema definitions for raikit.
//!
//! These structs map to the YAML configuration file format.

use serde::{Deserialize, Serialize};

/// Root configuration structure for `.raikit/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaikitConfig {
    /// Global settings
    pub settings: Settings,

    /// Timing report behavior
    pub timing: TimingSettings,
}

/// Global settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent. Unset means normal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_output: Option<OutputMode>,
}

/// Timing report settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingSettings {
    /// Write the timing report even when the timed operation fails.
    #[serde(skip_serializing_if = "is_false")]
    pub report_on_failure: bool,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
    Silent,
}

fn is_false(v: &bool) -> bool {
    !v
}
