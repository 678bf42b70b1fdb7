//! Configuration loading for raikit.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use raikit::config::load_merged_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".raikit");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "timing:\n  report_on_failure: true\n").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert!(config.timing.report_on_failure);
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    load_config, load_config_file, load_config_value, load_merged_config, parse_config,
    ConfigPaths,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{OutputMode, RaikitConfig, Settings, TimingSettings};
