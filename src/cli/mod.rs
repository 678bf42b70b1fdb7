//! Command-line interface for raikit.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, InspectArgs, TimeArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
