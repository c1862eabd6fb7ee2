//! Branding and application identity configuration.
//!
//! Names, directories and URLs of the tool itself live here. Everything that
//! belongs to the portfolio owner (name, socials, contact details) lives in
//! the site content instead, see [`crate::models::SiteContent`].

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "Folio";

/// The binary/executable name (lowercase, no spaces).
///
/// Used in:
/// - Cargo.toml package name
/// - Binary executable name
/// - Command examples in help text
pub const APP_BINARY_NAME: &str = "folio";

/// The directory name for application data (config).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "folio";

/// Short description for help text.
pub const APP_DESCRIPTION: &str = "Portfolio site renderer and local server";

/// Path the browser runtime is loaded from when a wasm bundle is served.
pub const WASM_MODULE_PATH: &str = "/pkg/folio.js";

/// Path of the bundled stylesheet.
pub const STYLESHEET_PATH: &str = "/assets/site.css";

/// Path of the bundled favicon.
pub const FAVICON_PATH: &str = "/assets/favicon.svg";

/// Path the contact form falls back to when scripting is unavailable.
pub const CONTACT_FALLBACK_PATH: &str = "/contact";
