//! Error types for raikit operations.
//!
//! This module defines [`RaikitError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RaikitError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RaikitError::Other`) for unexpected errors
//! - The capability detector never returns these; it resolves failures to `false`
//! - The timing wrapper never creates these; it forwards the wrapped operation's

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for raikit operations.
#[derive(Debug, Error)]
pub enum RaikitError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to parse a model manifest.
    #[error("Failed to parse model manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// A candidate model could not be inspected.
    #[error("Cannot inspect member '{member}': {message}")]
    Inspection { member: String, message: String },

    /// A manager's compute step failed.
    #[error("Manager '{manager}' failed: {message}")]
    ComputeFailed { manager: String, message: String },

    /// External command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for raikit operations.
pub type Result<T> = std::result::Result<T, RaikitError>;
