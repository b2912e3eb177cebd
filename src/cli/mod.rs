//! CLI command definitions and handlers

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use crate::attribution;
use crate::config::AnalysisConfig;
use crate::reporters;

/// Testlens - contributor test-authorship attribution
///
/// Counts the lines a contributor added in a date window and the test
/// cases (`test`/`it` blocks) they added or modified.
#[derive(Parser, Debug)]
#[command(name = "testlens")]
#[command(
    version,
    about = "Attribute added lines and test-case authorship in a git repository to one contributor",
    after_help = "\
Examples:
  testlens . --author 'Jane Doe' --since 2025-06-01 --until 2025-06-30
  testlens /path/to/repo --format json          JSON output for scripting
  testlens .                                    Use author/window from testlens.toml

Configuration precedence: flags > TESTLENS_* environment > testlens.toml"
)]
pub struct Cli {
    /// Path to repository (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Contributor display name to attribute (e.g. "Jane Doe")
    #[arg(long, env = "TESTLENS_AUTHOR")]
    pub author: Option<String>,

    /// First day of the window, inclusive (YYYY-MM-DD)
    #[arg(long, env = "TESTLENS_SINCE")]
    pub since: Option<String>,

    /// Last day of the window, inclusive (YYYY-MM-DD)
    #[arg(long, env = "TESTLENS_UNTIL")]
    pub until: Option<String>,

    /// Output format: text, json
    #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Output file path (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Resolve configuration, run the pipeline, and emit the report.
pub fn run(cli: Cli) -> Result<()> {
    let config = AnalysisConfig::resolve(
        &cli.path,
        cli.author.as_deref(),
        cli.since.as_deref(),
        cli.until.as_deref(),
    )?;

    let report = attribution::run_analysis(&config)?;
    let rendered = reporters::render(&report, &cli.format)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} Report written to {}", style("✓").green(), path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["testlens"]);
        assert_eq!(cli.path, PathBuf::from("."));
        assert_eq!(cli.format, "text");
        assert!(cli.author.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_parses_window_flags() {
        let cli = Cli::parse_from([
            "testlens",
            "/repo",
            "--author",
            "Jane Doe",
            "--since",
            "2025-06-01",
            "--until",
            "2025-06-30",
            "--format",
            "json",
        ]);
        assert_eq!(cli.path, PathBuf::from("/repo"));
        assert_eq!(cli.author.as_deref(), Some("Jane Doe"));
        assert_eq!(cli.since.as_deref(), Some("2025-06-01"));
        assert_eq!(cli.until.as_deref(), Some("2025-06-30"));
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["testlens", "--format", "sarif"]).is_err());
    }
}
