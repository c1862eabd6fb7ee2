//! CLI command handlers for folio.
//!
//! Each subcommand is an `Args` struct with an `execute` method returning a
//! [`CliResult`](common::CliResult); `main.rs` turns failures into exit codes.

pub mod build;
pub mod check;
pub mod common;
pub mod config;
pub mod mailto;
pub mod scene;
#[cfg(feature = "web")]
pub mod serve;

// Re-export types used by main.rs and tests
pub use build::BuildArgs;
pub use check::CheckArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use mailto::MailtoArgs;
pub use scene::SceneArgs;
#[cfg(feature = "web")]
pub use serve::ServeArgs;
