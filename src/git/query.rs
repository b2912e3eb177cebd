//! Subprocess wrapper around the git binary.

use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a single git query produced no usable output.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to spawn git: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("git {args} exited with {status}: {stderr}")]
    NonZero {
        args: String,
        status: i32,
        stderr: String,
    },
}

/// Issues blocking git queries against one repository.
///
/// Every query is attempted exactly once. A failure is logged and degrades
/// to an empty string so callers treat it as "no contribution"; the log
/// level separates real failures (`warn`) from legitimately empty output
/// (`debug`).
pub struct GitQuery {
    repo_path: PathBuf,
}

impl GitQuery {
    pub fn new(repo_path: &Path) -> Self {
        Self {
            repo_path: repo_path.to_path_buf(),
        }
    }

    /// Run a git subcommand, degrading any failure to an empty string.
    pub fn run(&self, args: &[&str]) -> String {
        match self.try_run(args) {
            Ok(stdout) => {
                if stdout.trim().is_empty() {
                    debug!(args = %args.join(" "), "git query returned no output");
                }
                stdout
            }
            Err(err) => {
                warn!(args = %args.join(" "), %err, "git query failed, treating as empty");
                String::new()
            }
        }
    }

    /// Run a git subcommand, reporting failure explicitly.
    fn try_run(&self, args: &[&str]) -> Result<String, QueryError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()?;

        if !output.status.success() {
            return Err(QueryError::NonZero {
                args: args.join(" "),
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_outside_a_repo_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let git = GitQuery::new(dir.path());
        assert_eq!(git.run(&["log", "--format=%H"]), "");
    }

    #[test]
    fn test_try_run_reports_nonzero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let git = GitQuery::new(dir.path());
        let err = git.try_run(&["log"]).unwrap_err();
        match err {
            QueryError::NonZero { status, .. } => assert_ne!(status, 0),
            QueryError::Spawn(_) => panic!("expected a nonzero exit, not a spawn failure"),
        }
    }
}
