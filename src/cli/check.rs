//! `folio check`: validate site content.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::models::SiteContent;
use crate::site::missing_media;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate site content and report broken media references
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Site content file (TOML); the built-in portfolio when omitted
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Media directory to resolve asset paths against
    #[arg(long, value_name = "DIR")]
    media_dir: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    strict: bool,
}

/// Result of a content check.
#[derive(Debug, Serialize)]
struct CheckResponse {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    warnings: Vec<String>,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let content_path = self.content.clone().or(config.paths.content);
        let media_dir = self.media_dir.clone().or(config.paths.media_dir);

        let content = match &content_path {
            Some(path) => {
                let source = std::fs::read_to_string(path).map_err(|e| {
                    CliError::io(format!(
                        "Failed to read content file {}: {e}",
                        path.display()
                    ))
                })?;
                SiteContent::from_toml(&source)
                    .map_err(|e| CliError::validation(format!("{e:#}")))?
            }
            None => SiteContent::builtin()
                .map_err(|e| CliError::validation(format!("{e:#}")))?,
        };

        let mut warnings = content.asset_warnings();
        if let Some(media_dir) = &media_dir {
            warnings.extend(
                missing_media(&content, media_dir)
                    .into_iter()
                    .map(|path| format!("Media file '{path}' not found in {}", media_dir.display())),
            );
        }

        let error = content.validate().err().map(|e| format!("{e:#}"));
        let response = CheckResponse {
            valid: error.is_none(),
            error,
            warnings,
        };

        if self.json {
            print_json(&response)?;
        } else {
            if response.valid {
                println!("✓ Content is valid");
            } else {
                println!("✗ Content is invalid");
            }
            if let Some(error) = &response.error {
                println!("  ✗ {error}");
            }
            for warning in &response.warnings {
                println!("  ⚠ {warning}");
            }
        }

        if !response.valid {
            return Err(CliError::validation("Content check failed"));
        }
        if self.strict && !response.warnings.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}
