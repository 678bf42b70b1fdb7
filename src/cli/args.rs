//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// raikit - timing and capability utilities for model analysis.
#[derive(Debug, Parser)]
#[command(name = "raikit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .raikit/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a program and report how long it took
    Time(TimeArgs),

    /// Check whether a model manifest describes a probabilistic classifier
    Inspect(InspectArgs),
}

/// Arguments for the `time` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TimeArgs {
    /// Print the timing report even if the program fails
    #[arg(long)]
    pub report_on_failure: bool,

    /// Program and arguments to run
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Arguments for the `inspect` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InspectArgs {
    /// Model manifest (YAML, or JSON with a .json extension)
    pub manifest: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
