//! Testlens - contributor test-authorship attribution for git repositories
//!
//! Answers two questions about one author over a calendar-date window:
//! how many lines did they add, and how many test cases (`test`/`it`
//! blocks, including `.skip`/`.only` variants) did they add or modify.
//!
//! The pipeline: collect the author's commits in the window, resolve the
//! files those commits touched, keep the ones matching test-file naming
//! patterns, parse each into a syntax tree to recover test-block line
//! ranges, and intersect those ranges with the per-commit added-line
//! numbers recovered from zero-context diffs.

pub mod attribution;
pub mod cli;
pub mod config;
pub mod diff;
pub mod git;
pub mod models;
pub mod parsers;
pub mod reporters;
