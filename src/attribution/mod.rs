//! Attribution engine
//!
//! Ties the pipeline together: commits in the window, files they
//! touched, the subset matching test-file naming patterns, and for each
//! of those the intersection of its test-block ranges with the added
//! line numbers. Also tallies the author's total added lines, which is
//! independent of the test-file filter.

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, info, warn};

use crate::config::AnalysisConfig;
use crate::git::{numstat, ChangeSetResolver, CommitCollector, GitQuery};
use crate::models::{AttributionReport, FileAttribution, LineRange, SkippedFile};
use crate::parsers;

/// Compiled test-file naming patterns.
pub struct TestFileFilter {
    set: GlobSet,
}

impl TestFileFilter {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob =
                Glob::new(pattern).with_context(|| format!("Invalid glob: {}", pattern))?;
            builder.add(glob);
        }
        let set = builder.build().context("Failed to build glob set")?;
        Ok(Self { set })
    }

    /// Whether a repository-relative path counts as a test file.
    pub fn is_test_file(&self, path: &str) -> bool {
        self.set.is_match(path)
    }
}

/// A test case is updated iff any changed line falls inside its range,
/// bounds inclusive.
pub fn count_updated_cases(ranges: &[LineRange], changed_lines: &[u32]) -> usize {
    ranges
        .iter()
        .filter(|range| changed_lines.iter().any(|line| range.contains(*line)))
        .count()
}

/// Run the full attribution pipeline for one resolved configuration.
pub fn run_analysis(config: &AnalysisConfig) -> Result<AttributionReport> {
    let git = GitQuery::new(&config.repo_path);

    let commits = CommitCollector::new(&git).collect(&config.author, &config.window);
    if commits.is_empty() {
        info!(author = %config.author, "no commits in window, nothing to analyze");
        return Ok(AttributionReport::empty(
            &config.author,
            config.window.since,
            config.window.until,
        ));
    }
    debug!(count = commits.len(), "collected commits");

    let total_added_lines = numstat::total_added_lines(&git, &commits);

    let resolver = ChangeSetResolver::new(&git);
    let filter = TestFileFilter::new(&config.test_file_patterns)?;
    let test_files: Vec<String> = resolver
        .files_changed(&commits)
        .into_iter()
        .filter(|path| filter.is_test_file(path))
        .collect();

    let mut files = Vec::new();
    let mut skipped_files = Vec::new();
    for path in test_files {
        match parsers::extract_test_blocks(&config.repo_path.join(&path)) {
            Ok(ranges) => {
                let changed = resolver.changed_lines(&path, &commits);
                let updated = count_updated_cases(&ranges, &changed);
                files.push(FileAttribution {
                    path,
                    total_cases: ranges.len(),
                    updated_cases: updated,
                });
            }
            Err(err) => {
                warn!(%path, %err, "skipping unparseable test file");
                skipped_files.push(SkippedFile {
                    path,
                    reason: format!("{:#}", err),
                });
            }
        }
    }

    let updated_test_cases = files.iter().map(|f| f.updated_cases).sum();

    Ok(AttributionReport {
        author: config.author.clone(),
        since: config.window.since,
        until: config.window.until,
        commits_analyzed: commits.len(),
        total_added_lines,
        updated_test_cases,
        files,
        skipped_files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TEST_FILE_PATTERNS;

    fn default_filter() -> TestFileFilter {
        let patterns: Vec<String> = DEFAULT_TEST_FILE_PATTERNS
            .iter()
            .map(|p| p.to_string())
            .collect();
        TestFileFilter::new(&patterns).unwrap()
    }

    #[test]
    fn test_filter_accepts_recognized_patterns() {
        let filter = default_filter();
        assert!(filter.is_test_file("src/foo.test.ts"));
        assert!(filter.is_test_file("src/bar.spec.js"));
        assert!(filter.is_test_file("deep/nested/dir/baz.test.jsx"));
        assert!(filter.is_test_file("widget.test.tsx"));
        assert!(filter.is_test_file("a.test.js"));
    }

    #[test]
    fn test_filter_rejects_non_test_paths() {
        let filter = default_filter();
        assert!(!filter.is_test_file("src/foo.ts"));
        assert!(!filter.is_test_file("src/foo.testx.js"));
        assert!(!filter.is_test_file("src/spec.js"));
        assert!(!filter.is_test_file("src/foo.test.rs"));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(TestFileFilter::new(&["[".to_string()]).is_err());
    }

    #[test]
    fn test_updated_iff_changed_line_in_range() {
        let ranges = [LineRange::new(10, 20)];
        assert_eq!(count_updated_cases(&ranges, &[19]), 1);
        assert_eq!(count_updated_cases(&ranges, &[21]), 0);
        assert_eq!(count_updated_cases(&ranges, &[10]), 1);
        assert_eq!(count_updated_cases(&ranges, &[20]), 1);
        assert_eq!(count_updated_cases(&ranges, &[9]), 0);
    }

    #[test]
    fn test_duplicate_changed_lines_count_a_case_once() {
        let ranges = [LineRange::new(1, 5)];
        assert_eq!(count_updated_cases(&ranges, &[2, 2, 3]), 1);
    }

    #[test]
    fn test_each_case_judged_independently() {
        let ranges = [LineRange::new(1, 5), LineRange::new(10, 15)];
        assert_eq!(count_updated_cases(&ranges, &[3, 12]), 2);
        assert_eq!(count_updated_cases(&ranges, &[7]), 0);
    }

    #[test]
    fn test_no_changed_lines_means_no_updates() {
        let ranges = [LineRange::new(1, 5)];
        assert_eq!(count_updated_cases(&ranges, &[]), 0);
    }
}
