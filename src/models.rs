//! Core data models for Testlens
//!
//! These models are used throughout the codebase for representing
//! test-block locations and the final attribution report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A contiguous source region, 1-based and inclusive on both ends.
///
/// Every test block is represented by the range spanning its full call
/// expression, from the `test(`/`it(` token through the closing paren of
/// the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

impl LineRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether `line` falls within the range, bounds included.
    pub fn contains(&self, line: u32) -> bool {
        line >= self.start && line <= self.end
    }
}

/// Per-file attribution outcome for one qualifying test file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAttribution {
    /// Repository-relative path.
    pub path: String,
    /// Test blocks found in the file's current contents.
    pub total_cases: usize,
    /// Test blocks with at least one added line inside their range.
    pub updated_cases: usize,
}

/// A test file that could not be analyzed and was skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// Full result of one attribution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributionReport {
    pub author: String,
    pub since: NaiveDate,
    pub until: NaiveDate,
    /// De-duplicated commits matched to the author inside the window.
    pub commits_analyzed: usize,
    /// Added lines across all files and commits, any file type.
    pub total_added_lines: u64,
    /// Headline metric: test cases the author added or modified.
    pub updated_test_cases: usize,
    pub files: Vec<FileAttribution>,
    pub skipped_files: Vec<SkippedFile>,
}

impl AttributionReport {
    /// An empty report for a run that found nothing to analyze.
    pub fn empty(author: &str, since: NaiveDate, until: NaiveDate) -> Self {
        Self {
            author: author.to_string(),
            since,
            until,
            commits_analyzed: 0,
            total_added_lines: 0,
            updated_test_cases: 0,
            files: Vec::new(),
            skipped_files: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive_on_both_bounds() {
        let range = LineRange::new(10, 20);
        assert!(range.contains(10));
        assert!(range.contains(19));
        assert!(range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));
    }

    #[test]
    fn test_single_line_range() {
        let range = LineRange::new(5, 5);
        assert!(range.contains(5));
        assert!(!range.contains(4));
        assert!(!range.contains(6));
    }

    #[test]
    fn test_empty_report_has_zero_totals() {
        let since = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let until = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let report = AttributionReport::empty("Jane Doe", since, until);
        assert_eq!(report.commits_analyzed, 0);
        assert_eq!(report.total_added_lines, 0);
        assert_eq!(report.updated_test_cases, 0);
        assert!(report.files.is_empty());
    }
}
