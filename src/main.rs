//! raikit CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use raikit::cli::{Cli, CommandDispatcher};
use raikit::config::load_config;
use raikit::ui::{create_reporter, should_use_colors, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("raikit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("raikit=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("raikit starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let config = match load_config(&project_root, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let mut reporter = create_reporter(OutputMode::Normal, should_use_colors());
            reporter.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    // Flags win over the configured default
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        config
            .settings
            .default_output
            .map(OutputMode::from)
            .unwrap_or_default()
    };

    let mut reporter = create_reporter(output_mode, should_use_colors());
    let dispatcher = CommandDispatcher::new(config);

    match dispatcher.dispatch(&cli, reporter.as_mut()) {
        Ok(result) => ExitCode::from(result.process_exit_code()),
        Err(e) => {
            reporter.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
