//! Change-set resolution across a set of commits.
//!
//! Two views of the same commits: which files they touched, and which
//! new-file line numbers they added to one file. Both tolerate failed
//! queries per commit by treating them as "no contribution".

use std::collections::HashSet;

use crate::diff;

use super::query::GitQuery;

/// Resolves file lists and added-line numbers for a commit set.
pub struct ChangeSetResolver<'a> {
    git: &'a GitQuery,
}

impl<'a> ChangeSetResolver<'a> {
    pub fn new(git: &'a GitQuery) -> Self {
        Self { git }
    }

    /// Union of file paths touched by `commits`, de-duplicated in
    /// first-seen order, blank entries trimmed.
    pub fn files_changed(&self, commits: &[String]) -> Vec<String> {
        let mut files = Vec::new();
        let mut seen = HashSet::new();

        for hash in commits {
            let out = self.git.run(&["show", "--name-only", "--format=", hash]);
            for line in out.lines() {
                let path = line.trim();
                if path.is_empty() {
                    continue;
                }
                if seen.insert(path.to_string()) {
                    files.push(path.to_string());
                }
            }
        }

        files
    }

    /// New-file line numbers added to `file` across `commits`.
    ///
    /// Concatenated per commit, not de-duplicated; callers only ever test
    /// membership. Each diff is parent-to-commit with zero context lines
    /// (`git show -U0` also covers root commits).
    pub fn changed_lines(&self, file: &str, commits: &[String]) -> Vec<u32> {
        let mut lines = Vec::new();

        for hash in commits {
            let out = self
                .git
                .run(&["show", "-U0", "--format=", hash, "--", file]);
            lines.extend(diff::added_line_numbers(&out));
        }

        lines
    }
}
