//! Test-block extraction using tree-sitter
//!
//! Extracts the source span of every recognized test-declaring call
//! expression: bare `test(...)`/`it(...)`, and member calls
//! `test.skip/only(...)`/`it.skip/only(...)`. The span covers the whole
//! call including the callback body, so intersecting it with changed
//! line numbers decides whether the test was touched.

use crate::models::LineRange;
use anyhow::{bail, Context, Result};
use std::path::Path;
use tree_sitter::{Language, Node, Parser};

/// Extract test-block line ranges from a file's current contents.
///
/// A missing file is an empty result, not an error (the file may have
/// been deleted after the analysis window). Malformed syntax is an error
/// for this file.
pub fn extract_test_blocks(path: &Path) -> Result<Vec<LineRange>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    extract_from_source(&source)
        .with_context(|| format!("Failed to parse file: {}", path.display()))
}

/// Extract test-block line ranges from source text.
///
/// The TSX grammar accepts plain JavaScript, JSX, and typed syntax, so
/// every supported extension goes through the same parse.
pub fn extract_from_source(source: &str) -> Result<Vec<LineRange>> {
    let mut parser = Parser::new();
    let language: Language = tree_sitter_typescript::LANGUAGE_TSX.into();
    parser
        .set_language(&language)
        .context("Failed to set TSX language")?;

    let tree = parser.parse(source, None).context("Failed to parse source")?;
    let root = tree.root_node();
    if root.has_error() {
        bail!("source contains syntax errors");
    }

    let mut ranges = Vec::new();
    collect_test_calls(&root, source.as_bytes(), &mut ranges);
    Ok(ranges)
}

/// Walk the tree recording every call expression whose callee is a
/// recognized test declaration.
fn collect_test_calls(node: &Node, source: &[u8], ranges: &mut Vec<LineRange>) {
    if node.kind() == "call_expression" {
        if let Some(callee) = node.child_by_field_name("function") {
            if is_test_callee(&callee, source) {
                ranges.push(LineRange::new(
                    node.start_position().row as u32 + 1,
                    node.end_position().row as u32 + 1,
                ));
            }
        }
    }

    for child in node.children(&mut node.walk()) {
        collect_test_calls(&child, source, ranges);
    }
}

/// `test`/`it` as a bare identifier, or `test.skip/only`/`it.skip/only`
/// as a member access.
fn is_test_callee(node: &Node, source: &[u8]) -> bool {
    match node.kind() {
        "identifier" => matches!(node.utf8_text(source), Ok("test") | Ok("it")),
        "member_expression" => {
            let object_matches = node
                .child_by_field_name("object")
                .is_some_and(|obj| {
                    obj.kind() == "identifier"
                        && matches!(obj.utf8_text(source), Ok("test") | Ok("it"))
                });
            let property_matches = node
                .child_by_field_name("property")
                .is_some_and(|prop| matches!(prop.utf8_text(source), Ok("skip") | Ok("only")));
            object_matches && property_matches
        }
        _ => false,
    }
}
