//! Testlens - contributor test-authorship attribution for git repositories

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging; diagnostics go to stderr so stdout stays clean
    // for the rendered report.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = testlens::cli::Cli::parse();
    testlens::cli::run(cli)
}
