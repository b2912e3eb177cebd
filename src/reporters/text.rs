//! Text (terminal) reporter with colors and formatting

use crate::models::AttributionReport;
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Render the report as formatted terminal output.
pub fn render(report: &AttributionReport) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Testlens Attribution{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Author: {BOLD}{}{RESET}  Window: {}..{}  Commits: {}\n\n",
        report.author, report.since, report.until, report.commits_analyzed
    ));

    out.push_str(&format!(
        "Added lines:        {BOLD}{}{RESET}\n",
        report.total_added_lines
    ));
    out.push_str(&format!(
        "Updated test cases: {BOLD}{GREEN}{}{RESET}\n",
        report.updated_test_cases
    ));

    if !report.files.is_empty() {
        out.push_str(&format!("\n{BOLD}TEST FILES{RESET}\n"));
        out.push_str(&format!("{DIM}  UPDATED  TOTAL  FILE{RESET}\n"));
        for file in &report.files {
            out.push_str(&format!(
                "  {:>7}  {:>5}  {}\n",
                file.updated_cases, file.total_cases, file.path
            ));
        }
    }

    if !report.skipped_files.is_empty() {
        out.push_str(&format!(
            "\n{YELLOW}Skipped (parse errors):{RESET}\n"
        ));
        for skipped in &report.skipped_files {
            out.push_str(&format!(
                "  {}  {DIM}{}{RESET}\n",
                skipped.path, skipped.reason
            ));
        }
    }

    if report.commits_analyzed == 0 {
        out.push_str(&format!(
            "\n{DIM}No commits by this author in the window.{RESET}\n"
        ));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileAttribution, SkippedFile};
    use chrono::NaiveDate;

    fn report_with_files() -> AttributionReport {
        let mut report = AttributionReport::empty(
            "Jane Doe",
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        );
        report.commits_analyzed = 2;
        report.total_added_lines = 42;
        report.updated_test_cases = 3;
        report.files.push(FileAttribution {
            path: "src/a.test.ts".to_string(),
            total_cases: 5,
            updated_cases: 3,
        });
        report.skipped_files.push(SkippedFile {
            path: "src/broken.test.js".to_string(),
            reason: "source contains syntax errors".to_string(),
        });
        report
    }

    #[test]
    fn test_render_includes_totals_and_files() {
        let out = render(&report_with_files()).unwrap();
        assert!(out.contains("Jane Doe"));
        assert!(out.contains("42"));
        assert!(out.contains("src/a.test.ts"));
        assert!(out.contains("src/broken.test.js"));
    }

    #[test]
    fn test_render_notes_empty_window() {
        let report = AttributionReport::empty(
            "Jane Doe",
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        );
        let out = render(&report).unwrap();
        assert!(out.contains("No commits"));
    }
}
