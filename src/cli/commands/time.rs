//! Time command implementation.
//!
//! The `raikit time` command runs a program with inherited stdio, so its
//! output lands between the separators, and reports how long it took.

use std::process::Command as Process;

use crate::cli::args::TimeArgs;
use crate::config::TimingSettings;
use crate::error::{RaikitError, Result};
use crate::timing::Timer;
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandResult};

/// The time command implementation.
pub struct TimeCommand {
    args: TimeArgs,
    report_on_failure: bool,
}

impl TimeCommand {
    /// Create a new time command. The flag or the config can enable
    /// reports on failure.
    pub fn new(args: TimeArgs, settings: &TimingSettings) -> Self {
        let report_on_failure = args.report_on_failure || settings.report_on_failure;
        Self {
            args,
            report_on_failure,
        }
    }
}

impl Command for TimeCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let outcome = {
            let timer = Timer::new(&mut *reporter).report_on_failure(self.report_on_failure);
            let mut run = timer.wrap_fallible(|()| run_program(&self.args.command));
            run(())
        };

        match outcome {
            Ok(()) => Ok(CommandResult::success()),
            Err(RaikitError::CommandFailed { command, code }) => {
                reporter.error(&format!(
                    "'{}' exited with code {}",
                    command,
                    code.map_or_else(|| "none".to_string(), |c| c.to_string())
                ));
                Ok(CommandResult::failure(code.unwrap_or(1)))
            }
            Err(e) => Err(e),
        }
    }
}

/// Run a program to completion, failing on a non-zero exit.
pub fn run_program(argv: &[String]) -> Result<()> {
    let (program, rest) = argv
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("no program given"))?;

    tracing::debug!("Running {} {:?}", program, rest);
    let status = Process::new(program).args(rest).status()?;

    if status.success() {
        Ok(())
    } else {
        Err(RaikitError::CommandFailed {
            command: argv.join(" "),
            code: status.code(),
        })
    }
}
