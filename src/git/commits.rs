//! Commit collection with author-name fallback strategies.
//!
//! Matching a display name against recorded git author metadata is
//! unreliable (name-order variations, extra initials), so the collector
//! runs an ordered list of strategies and unions their results.

use std::collections::HashSet;

use crate::config::DateWindow;

use super::query::GitQuery;

/// One way of matching the configured display name against recorded
/// author metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorStrategy {
    /// The display name verbatim, as git's `--author` substring filter.
    Exact(String),
    /// Name tokens reordered as `"Last, First"`, git's other common
    /// convention.
    Reversed(String),
    /// First name-token alone as a loose filter; results are then
    /// post-filtered to authors containing both the first and last
    /// tokens, rejecting accidental matches.
    FirstToken {
        filter: String,
        first: String,
        last: String,
    },
}

/// Build the ordered strategy list for a display name.
///
/// Single-token names get only the exact strategy; the reordered and
/// loose variants need at least a first and last token to work with.
pub fn strategies_for(author: &str) -> Vec<AuthorStrategy> {
    let tokens: Vec<&str> = author.split_whitespace().collect();
    let mut strategies = vec![AuthorStrategy::Exact(author.trim().to_string())];

    if tokens.len() >= 2 {
        let last = tokens[tokens.len() - 1];
        let rest = tokens[..tokens.len() - 1].join(" ");
        strategies.push(AuthorStrategy::Reversed(format!("{}, {}", last, rest)));
        strategies.push(AuthorStrategy::FirstToken {
            filter: tokens[0].to_string(),
            first: tokens[0].to_string(),
            last: last.to_string(),
        });
    }

    strategies
}

/// Whether a recorded author string contains both name tokens,
/// case-insensitively.
fn contains_tokens(recorded: &str, first: &str, last: &str) -> bool {
    let lower = recorded.to_lowercase();
    lower.contains(&first.to_lowercase()) && lower.contains(&last.to_lowercase())
}

/// Collects the commit hashes authored by one contributor in a date
/// window.
pub struct CommitCollector<'a> {
    git: &'a GitQuery,
}

impl<'a> CommitCollector<'a> {
    pub fn new(git: &'a GitQuery) -> Self {
        Self { git }
    }

    /// De-duplicated commit hashes from all strategies, no guaranteed
    /// order. Empty means "nothing to analyze", never an error.
    pub fn collect(&self, author: &str, window: &DateWindow) -> Vec<String> {
        let since = format!("--since={} 00:00:00", window.since);
        let until = format!("--until={} 23:59:59", window.until);

        let mut commits = Vec::new();
        let mut seen = HashSet::new();
        for strategy in strategies_for(author) {
            for hash in self.run_strategy(&strategy, &since, &until) {
                if seen.insert(hash.clone()) {
                    commits.push(hash);
                }
            }
        }
        commits
    }

    fn run_strategy(&self, strategy: &AuthorStrategy, since: &str, until: &str) -> Vec<String> {
        match strategy {
            AuthorStrategy::Exact(name) | AuthorStrategy::Reversed(name) => {
                let author = format!("--author={}", name);
                let out = self
                    .git
                    .run(&["log", &author, since, until, "--format=%H"]);
                out.lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(String::from)
                    .collect()
            }
            AuthorStrategy::FirstToken {
                filter,
                first,
                last,
            } => {
                let author = format!("--author={}", filter);
                let out = self
                    .git
                    .run(&["log", &author, since, until, "--format=%H%x09%an"]);
                out.lines()
                    .filter_map(|line| {
                        let (hash, recorded) = line.split_once('\t')?;
                        contains_tokens(recorded, first, last).then(|| hash.trim().to_string())
                    })
                    .filter(|h| !h.is_empty())
                    .collect()
            }
        }
    }
}
