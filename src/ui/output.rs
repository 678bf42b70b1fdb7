//! Output mode and terminal writer.

use std::io::Write;
use std::str::FromStr;

use super::theme::Theme;
use super::Reporter;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including debug-level notes.
    Verbose,
    /// Show timing reports and status.
    #[default]
    Normal,
    /// Show timing reports and errors only.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl From<crate::config::schema::OutputMode> for OutputMode {
    fn from(config_mode: crate::config::schema::OutputMode) -> Self {
        match config_mode {
            crate::config::schema::OutputMode::Verbose => Self::Verbose,
            crate::config::schema::OutputMode::Normal => Self::Normal,
            crate::config::schema::OutputMode::Quiet => Self::Quiet,
            crate::config::schema::OutputMode::Silent => Self::Silent,
        }
    }
}

impl OutputMode {
    /// Check if this mode shows plain lines such as timing reports.
    pub fn shows_lines(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Check if this mode shows success and warning messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}

/// Terminal writer that respects output mode.
///
/// Lines go to stdout; errors always go to stderr.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: Theme,
}

impl Output {
    /// Create a new output writer with a specific theme.
    pub fn with_theme(mode: OutputMode, theme: Theme) -> Self {
        Self { mode, theme }
    }
}

impl Reporter for Output {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn line(&mut self, text: &str) {
        if self.mode.shows_lines() {
            println!("{}", text);
            let _ = std::io::stdout().flush();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
