//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::APP_DATA_DIR;
use crate::viewport::DEFAULT_REVEAL_THRESHOLD;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathConfig {
    /// Site content file (TOML); the built-in portfolio is used when unset
    pub content: Option<PathBuf>,
    /// Directory of media files (images, clips, résumé) served at the site root
    pub media_dir: Option<PathBuf>,
    /// Directory holding the wasm-pack output, served under `/pkg`
    pub wasm_dir: Option<PathBuf>,
}

/// Local HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Static build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory the rendered site is written to
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
        }
    }
}

/// Page behaviour settings baked into the rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Visible fraction at which a section counts as revealed
    pub reveal_threshold: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/folio/config.toml`
/// - macOS: `~/Library/Application Support/folio/config.toml`
/// - Windows: `%APPDATA%\folio\config.toml`
///
/// `FOLIO_CONFIG` overrides the location.
///
/// # Validation
///
/// - `reveal_threshold` must be a number in `[0, 1]`
/// - `host` and `output_dir` must not be empty
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// HTTP server settings
    pub server: ServerConfig,
    /// Static build settings
    pub build: BuildConfig,
    /// Page behaviour
    pub viewport: ViewportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.viewport.reveal_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            anyhow::bail!("viewport.reveal_threshold must be between 0 and 1, got {threshold}");
        }

        if self.server.host.trim().is_empty() {
            anyhow::bail!("server.host must not be empty");
        }

        if self.build.output_dir.as_os_str().is_empty() {
            anyhow::bail!("build.output_dir must not be empty");
        }

        Ok(())
    }

    /// Address the server binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
