//! Data models for parsed comment groups and extraction state.
//!
//! These types carry the output of the parsing front end into the
//! extraction engine. All of them are created fresh per run and
//! discarded once the output has been written; nothing persists
//! across runs.

use serde::{Deserialize, Serialize};

/// One group of adjacent comment lines, already joined into a single
/// text blob with comment markers stripped.
///
/// Interior whitespace (including tabs) is preserved exactly as it
/// appeared in source. The blob carries no trailing newline.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CommentGroup {
    pub text: String,
}

impl CommentGroup {
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

/// A parsed source file: its base file name, the package it declares,
/// and its comment groups in top-to-bottom source order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SourceFile {
    /// Base file name, e.g. "doc.go". Identity within one directory.
    pub name: String,

    /// Declared package name, or the file stem when no package clause
    /// was found.
    pub package: String,

    /// Comment groups in source order.
    pub comments: Vec<CommentGroup>,
}

impl SourceFile {
    pub fn new(name: String, package: String, comments: Vec<CommentGroup>) -> Self {
        Self {
            name,
            package,
            comments,
        }
    }
}

/// Accumulators filled by one extraction run.
///
/// Security-scheme bodies are kept as an ordered list and joined only
/// at assembly time, so the indent transform and the join stay
/// independently testable.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Extraction {
    /// Plain pass-through fragments, in encounter order.
    pub fragments: Vec<String>,

    /// Indented security-scheme bodies, in encounter order.
    pub security_schemes: Vec<String>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty() && self.security_schemes.is_empty()
    }
}
