//! Error and exit code types shared by CLI commands.

use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::models::SiteContent;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid input: bad arguments, content or configuration
    ValidationError = 1,
    /// File system or network failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process status.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A failed CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Message printed to stderr
    pub message: String,
    /// Exit code of the process
    pub exit_code: ExitCode,
}

impl CliError {
    /// Invalid input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::ValidationError,
        }
    }

    /// File system or network failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Prints `value` as pretty JSON on stdout.
pub fn print_json(value: &impl serde::Serialize) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Loads the configuration file, or defaults when none exists.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Loads site content from `path`, or the built-in portfolio.
pub fn load_content(path: Option<&Path>) -> CliResult<SiteContent> {
    SiteContent::load_or_builtin(path)
        .map_err(|e| CliError::validation(format!("Failed to load content: {e:#}")))
}
