//! qtsdk CLI - verified Qt build-dependency installer
//!
//! Entry point for the qtsdk command-line application.

use anyhow::Result;
use clap::Parser;

use qtsdk::cli::output::display_error;
use qtsdk::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber; --quiet/--verbose set the default
    // level, RUST_LOG still takes precedence.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(cli.log_level().into()),
        )
        .init();

    // Any fatal pipeline error terminates the run with a non-zero status.
    match cli.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
