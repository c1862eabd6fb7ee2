//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Site content file (TOML)
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Media directory served at the site root
    #[arg(long, value_name = "DIR")]
    media_dir: Option<PathBuf>,

    /// wasm-pack output directory
    #[arg(long, value_name = "DIR")]
    wasm_dir: Option<PathBuf>,

    /// Server host
    #[arg(long)]
    host: Option<String>,

    /// Server port
    #[arg(long)]
    port: Option<u16>,

    /// Static build output directory
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Visible fraction (0 to 1) at which sections reveal
    #[arg(long)]
    threshold: Option<f64>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.media_dir.is_none()
            && self.wasm_dir.is_none()
            && self.host.is_none()
            && self.port.is_none()
            && self.output_dir.is_none()
            && self.threshold.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --content, --media-dir, \
                 --wasm-dir, --host, --port, --output-dir, or --threshold",
            ));
        }

        let mut config = load_config()?;

        if let Some(path) = &self.content {
            if !path.is_file() {
                return Err(CliError::validation(format!(
                    "Content file does not exist: {}",
                    path.display()
                )));
            }
            config.paths.content = Some(path.clone());
        }

        for (flag, dir) in [("media", &self.media_dir), ("wasm", &self.wasm_dir)] {
            if let Some(dir) = dir {
                if !dir.is_dir() {
                    return Err(CliError::validation(format!(
                        "The {flag} directory does not exist: {}",
                        dir.display()
                    )));
                }
            }
        }
        if self.media_dir.is_some() {
            config.paths.media_dir.clone_from(&self.media_dir);
        }
        if self.wasm_dir.is_some() {
            config.paths.wasm_dir.clone_from(&self.wasm_dir);
        }

        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = &self.output_dir {
            config.build.output_dir.clone_from(path);
        }
        if let Some(threshold) = self.threshold {
            config.viewport.reveal_threshold = threshold;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let show = |path: &Option<PathBuf>, unset: &str| {
        path.as_ref()
            .map_or_else(|| unset.to_string(), |p| p.display().to_string())
    };

    println!("Configuration:");
    println!();
    println!("Paths:");
    println!("  Content:     {}", show(&config.paths.content, "(built-in)"));
    println!("  Media:       {}", show(&config.paths.media_dir, "(not set)"));
    println!("  Wasm bundle: {}", show(&config.paths.wasm_dir, "(not set)"));
    println!();
    println!("Server:");
    println!("  Address:     {}", config.bind_address());
    println!();
    println!("Build:");
    println!("  Output:      {}", config.build.output_dir.display());
    println!();
    println!("Viewport:");
    println!("  Reveal at:   {}", config.viewport.reveal_threshold);
}
