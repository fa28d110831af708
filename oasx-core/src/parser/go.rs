//! Go comment-group extractor using tree-sitter.
//!
//! Recovers comment groups the way `go/ast` attaches them: adjacent
//! comments separated by a single newline and no intervening code form
//! one group, and a group's text is the marker-stripped join of its
//! comments. Joined text keeps interior whitespace (tabs included)
//! exactly as written, drops per-line trailing whitespace and
//! leading/trailing blank lines, and carries no trailing newline.

use std::path::Path;

use tree_sitter::{Node, Parser};

use crate::error::{ExtractError, Result};
use crate::types::{CommentGroup, SourceFile};

use super::helpers::{find_child_by_type, get_node_text};

/// Parse Go source and recover its comment groups.
pub fn parse(source: &str, file_name: &str) -> Result<SourceFile> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| ExtractError::ParseError {
            path: file_name.to_string(),
            message: format!("Failed to set Go language: {}", e),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ExtractError::ParseError {
            path: file_name.to_string(),
            message: "Failed to parse Go source".to_string(),
        })?;
    let root = tree.root_node();

    // Package name from the package clause, or the file stem.
    let package = extract_package_name(&root, source).unwrap_or_else(|| {
        Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string()
    });

    let mut comment_nodes = Vec::new();
    collect_comment_nodes(root, &mut comment_nodes);

    let comments = group_comments(&comment_nodes, source)
        .into_iter()
        .map(CommentGroup::new)
        .collect();

    Ok(SourceFile::new(file_name.to_string(), package, comments))
}

/// Extract package name from the package clause.
fn extract_package_name(root: &Node, source: &str) -> Option<String> {
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        if child.kind() == "package_clause" {
            if let Some(id) = find_child_by_type(&child, "package_identifier") {
                return Some(get_node_text(&id, source).to_string());
            }
        }
    }
    None
}

/// Collect comment nodes in document order. Comments are extra nodes
/// scattered through the tree, so every subtree is visited.
fn collect_comment_nodes<'a>(node: Node<'a>, out: &mut Vec<Node<'a>>) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "comment" {
            out.push(child);
        } else {
            collect_comment_nodes(child, out);
        }
    }
}

/// Group adjacent comment nodes and join each group into one blob.
///
/// Two comments belong to the same group when only whitespace with
/// exactly one newline separates them; a blank line or any code
/// between them starts a new group.
fn group_comments(nodes: &[Node], source: &str) -> Vec<String> {
    let mut groups = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut prev_end = 0usize;

    for node in nodes {
        if !current.is_empty() {
            let gap = &source[prev_end..node.start_byte()];
            if !is_group_gap(gap) {
                groups.push(join_group(&current));
                current.clear();
            }
        }

        current.extend(comment_lines(get_node_text(node, source)));
        prev_end = node.end_byte();
    }

    if !current.is_empty() {
        groups.push(join_group(&current));
    }

    groups
}

/// Whether the text between two comments keeps them in one group:
/// whitespace only, with exactly one newline.
fn is_group_gap(gap: &str) -> bool {
    gap.chars().all(char::is_whitespace) && gap.matches('\n').count() == 1
}

/// Split one raw comment into its content lines, markers stripped.
///
/// `//` comments lose the marker and at most one following space;
/// `/* */` comments lose the delimiters and split on interior
/// newlines. Trailing whitespace is removed per line.
fn comment_lines(raw: &str) -> Vec<String> {
    if let Some(content) = raw.strip_prefix("//") {
        let content = content.strip_prefix(' ').unwrap_or(content);
        return vec![content.trim_end().to_string()];
    }

    let content = raw
        .strip_prefix("/*")
        .and_then(|c| c.strip_suffix("*/"))
        .unwrap_or(raw);
    content
        .split('\n')
        .map(|line| line.trim_end().to_string())
        .collect()
}

/// Join a group's lines, dropping leading and trailing blank lines.
fn join_group(lines: &[String]) -> String {
    let end = match lines.iter().rposition(|l| !l.is_empty()) {
        Some(i) => i + 1,
        None => return String::new(),
    };
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(0);
    lines[start..end].join("\n")
}
