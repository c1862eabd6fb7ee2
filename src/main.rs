//! Folio - portfolio site renderer and local server
//!
//! Renders the portfolio to a static directory, serves it for preview,
//! validates content and exercises the page components from the command line.

use clap::{Parser, Subcommand};
use folio::branding::APP_DESCRIPTION;
use folio::cli::{
    BuildArgs, CheckArgs, CliResult, ConfigArgs, ExitCode, MailtoArgs, SceneArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Folio - portfolio site renderer and local server
#[derive(Parser, Debug)]
#[command(author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the site into a static directory
    Build(BuildArgs),
    /// Serve the site locally
    #[cfg(feature = "web")]
    Serve(folio::cli::ServeArgs),
    /// Validate site content
    Check(CheckArgs),
    /// Compose the contact form's mail link
    Mailto(MailtoArgs),
    /// Run the ambient scene headlessly
    Scene(SceneArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Build(args) => args.execute(),
            #[cfg(feature = "web")]
            Self::Serve(args) => args.execute(),
            Self::Check(args) => args.execute(),
            Self::Mailto(args) => args.execute(),
            Self::Scene(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command.execute() {
        Ok(()) => ExitCode::Success,
        Err(error) => {
            eprintln!("Error: {error}");
            error.exit_code
        }
    };

    std::process::exit(code.code());
}
