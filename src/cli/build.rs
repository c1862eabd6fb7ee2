//! `folio build`: render the site into a static directory.

use crate::cli::common::{load_config, load_content, print_json, CliError, CliResult};
use crate::render::PageOptions;
use crate::site::BuildPlan;
use clap::Args;
use std::path::PathBuf;

/// Render the portfolio into a deployable directory
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Output directory (defaults to the configured build directory)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Site content file (TOML)
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Media directory copied to the site root
    #[arg(long, value_name = "DIR")]
    media_dir: Option<PathBuf>,

    /// wasm-pack output copied to pkg/
    #[arg(long, value_name = "DIR")]
    wasm_dir: Option<PathBuf>,

    /// Output the build report as JSON
    #[arg(long)]
    json: bool,
}

impl BuildArgs {
    /// Execute the build command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        let content_path = self.content.as_ref().or(config.paths.content.as_ref());
        let content = load_content(content_path.map(PathBuf::as_path))?;

        let plan = BuildPlan {
            content: &content,
            options: PageOptions {
                reveal_threshold: config.viewport.reveal_threshold,
                ..PageOptions::default()
            },
            output_dir: self
                .output
                .clone()
                .unwrap_or_else(|| config.build.output_dir.clone()),
            media_dir: self.media_dir.clone().or(config.paths.media_dir),
            wasm_dir: self.wasm_dir.clone().or(config.paths.wasm_dir),
        };

        let report = plan
            .execute()
            .map_err(|e| CliError::io(format!("Build failed: {e:#}")))?;

        if self.json {
            print_json(&report)?;
        } else {
            println!(
                "Built {} ({} bytes, {} assets, {} media files, {} runtime files)",
                report.output_dir.join("index.html").display(),
                report.page_bytes,
                report.assets_written,
                report.media_copied,
                report.runtime_copied
            );
            for path in &report.missing_media {
                println!("  missing: {path}");
            }
        }

        Ok(())
    }
}
