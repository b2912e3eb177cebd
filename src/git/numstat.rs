//! Added-line totals from git's numstat summaries.
//!
//! Independent of the test-file filter: this counts every added line by
//! the author in the window, across any file type.

use super::query::GitQuery;

/// Sum the added column of `--numstat` output.
///
/// Each line is `added<TAB>removed<TAB>path`. Binary files report `-` in
/// the numeric columns; those and any otherwise malformed lines
/// contribute nothing.
pub fn added_from_numstat(text: &str) -> u64 {
    text.lines()
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let added = fields.next()?;
            fields.next()?;
            fields.next()?;
            added.trim().parse::<u64>().ok()
        })
        .sum()
}

/// Total added lines across `commits`.
pub fn total_added_lines(git: &GitQuery, commits: &[String]) -> u64 {
    commits
        .iter()
        .map(|hash| added_from_numstat(&git.run(&["show", "--numstat", "--format=", hash])))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sums_added_column() {
        let text = "3\t1\tsrc/a.ts\n10\t0\tsrc/b.ts\n";
        assert_eq!(added_from_numstat(text), 13);
    }

    #[test]
    fn test_binary_marker_contributes_zero() {
        let text = "-\t-\tassets/logo.png\n2\t0\tsrc/a.ts\n";
        assert_eq!(added_from_numstat(text), 2);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let text = "not a numstat line\n\n5\t2\tsrc/a.ts\n";
        assert_eq!(added_from_numstat(text), 5);
    }

    #[test]
    fn test_empty_output_sums_to_zero() {
        assert_eq!(added_from_numstat(""), 0);
    }
}
