//! Source-file discovery using the `ignore` crate.
//!
//! Finds Go source files directly inside one directory. The walk is
//! non-recursive: only files whose parent is the source directory are
//! considered, matching how a single Go package directory is laid out.
//! `.gitignore` rules are honored at all levels.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{ExtractError, Result};

/// Extension of the source files we extract from.
const GO_EXTENSION: &str = "go";

/// Discover `.go` files in `root`, sorted by base name for a stable
/// starting point. Returns an error when the directory is missing;
/// an empty directory is a legitimate empty result.
pub fn scan_directory(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ExtractError::SourceDirNotFound {
            path: root.display().to_string(),
        });
    }

    let walker = WalkBuilder::new(root)
        .max_depth(Some(1))
        .hidden(false) // Include hidden files, let gitignore handle it
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .require_git(false) // Apply ignore rules outside a git checkout too
        .follow_links(false)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| ExtractError::ScanError {
            path: root.display().to_string(),
            message: e.to_string(),
        })?;

        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }

        let path = entry.into_path();
        let is_go = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e == GO_EXTENSION)
            .unwrap_or(false);
        if is_go {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
