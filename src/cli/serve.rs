//! `folio serve`: preview the portfolio over HTTP.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::web;
use clap::Args;
use std::path::PathBuf;

/// Serve the portfolio locally
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Site content file (TOML)
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Media directory served at the site root
    #[arg(long, value_name = "DIR")]
    media_dir: Option<PathBuf>,

    /// wasm-pack output served under /pkg
    #[arg(long, value_name = "DIR")]
    wasm_dir: Option<PathBuf>,
}

impl ServeArgs {
    /// Execute the serve command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = load_config()?;

        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.content.is_some() {
            config.paths.content.clone_from(&self.content);
        }
        if self.media_dir.is_some() {
            config.paths.media_dir.clone_from(&self.media_dir);
        }
        if self.wasm_dir.is_some() {
            config.paths.wasm_dir.clone_from(&self.wasm_dir);
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid server settings: {e:#}")))?;

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))?;
        runtime
            .block_on(web::run_server(config))
            .map_err(|e| CliError::io(format!("Server error: {e:#}")))
    }
}
