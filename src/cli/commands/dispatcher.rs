//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::RaikitConfig;
use crate::error::Result;
use crate::ui::Reporter;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing human-readable output to `reporter`.
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Exit code for the process. Failures always map into 1..=255, so a
    /// negative or oversized child status never reads as success.
    pub fn process_exit_code(&self) -> u8 {
        if self.success {
            return 0;
        }
        u8::try_from(self.exit_code)
            .ok()
            .filter(|code| *code != 0)
            .unwrap_or(1)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: RaikitConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher with the loaded configuration.
    pub fn new(config: RaikitConfig) -> Self {
        Self { config }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        match &cli.command {
            Commands::Time(args) => {
                let cmd = super::time::TimeCommand::new(args.clone(), &self.config.timing);
                cmd.execute(reporter)
            }
            Commands::Inspect(args) => {
                let cmd = super::inspect::InspectCommand::new(args.clone());
                cmd.execute(reporter)
            }
        }
    }
}
