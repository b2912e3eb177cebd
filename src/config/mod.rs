//! Analysis configuration for testlens
//!
//! Resolution order: CLI flags, then environment (handled by clap), then
//! a `testlens.toml` at the repository root, then built-in defaults for
//! the test-file patterns. The resolved [`AnalysisConfig`] is passed into
//! every component explicitly; there is no ambient global state.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Test-file naming patterns recognized by default.
pub const DEFAULT_TEST_FILE_PATTERNS: [&str; 5] = [
    "**/*.spec.js",
    "**/*.test.js",
    "**/*.test.tsx",
    "**/*.test.jsx",
    "**/*.test.ts",
];

/// Inclusive calendar-date window filtering commits by authorship date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub since: NaiveDate,
    pub until: NaiveDate,
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Root of the repository working tree.
    pub repo_path: PathBuf,
    /// Contributor display name to attribute.
    pub author: String,
    pub window: DateWindow,
    pub test_file_patterns: Vec<String>,
}

/// On-disk shape of `testlens.toml`.
#[derive(Debug, Default, Deserialize, Serialize)]
struct FileConfig {
    author: Option<String>,
    #[serde(default)]
    window: FileWindow,
    test_file_patterns: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct FileWindow {
    since: Option<String>,
    until: Option<String>,
}

impl AnalysisConfig {
    /// Resolve configuration from CLI-provided values plus the repo's
    /// `testlens.toml`. Missing author or window, an invalid repository
    /// path, or a backwards window is a fatal configuration error.
    pub fn resolve(
        repo_path: &Path,
        author: Option<&str>,
        since: Option<&str>,
        until: Option<&str>,
    ) -> Result<Self> {
        if !repo_path.is_dir() {
            bail!(
                "repository path {} is not a directory",
                repo_path.display()
            );
        }
        if !crate::git::is_git_repo(repo_path) {
            bail!(
                "{} is not a git repository (no .git entry found)",
                repo_path.display()
            );
        }

        let file = FileConfig::load(repo_path)?;

        let author = author
            .map(str::to_string)
            .or(file.author)
            .filter(|a| !a.trim().is_empty());
        let Some(author) = author else {
            bail!("no author configured; pass --author or set `author` in testlens.toml");
        };

        let since = resolve_date("since", since, file.window.since.as_deref())?;
        let until = resolve_date("until", until, file.window.until.as_deref())?;
        if until < since {
            bail!("window until ({}) is before since ({})", until, since);
        }

        let test_file_patterns = file.test_file_patterns.unwrap_or_else(|| {
            DEFAULT_TEST_FILE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect()
        });

        Ok(Self {
            repo_path: repo_path.to_path_buf(),
            author,
            window: DateWindow { since, until },
            test_file_patterns,
        })
    }
}

impl FileConfig {
    /// Load `testlens.toml` from the repository root if present.
    fn load(repo_path: &Path) -> Result<Self> {
        let path = repo_path.join("testlens.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

fn resolve_date(field: &str, flag: Option<&str>, file: Option<&str>) -> Result<NaiveDate> {
    let Some(raw) = flag.or(file) else {
        bail!(
            "no {field} date configured; pass --{field} or set `window.{field}` in testlens.toml"
        );
    };
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid {field} date '{raw}' (expected YYYY-MM-DD)"))
}
