//! End-to-end extraction pipeline.
//!
//! Wires the front end (scanner + parser) to the core (extract +
//! assemble): discover `.go` files, parse each into its comment
//! groups, group files by declared package, and run one extraction
//! per package. Packages are processed in ascending name order so
//! reruns over an unchanged tree produce byte-identical output.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::types::SourceFile;
use crate::{assemble, extract, parser, scanner};

/// Extract every tagged comment under `source_dir` into the final
/// ordered fragment sequence. A directory with no `.go` files yields
/// an empty sequence.
pub fn run(source_dir: &Path) -> Result<Vec<String>> {
    let paths = scanner::scan_directory(source_dir)?;

    let mut packages: BTreeMap<String, Vec<SourceFile>> = BTreeMap::new();
    for path in paths {
        let source = fs::read_to_string(&path).map_err(|e| ExtractError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        let file = parser::go::parse(&source, &name)?;
        packages.entry(file.package.clone()).or_default().push(file);
    }

    let mut fragments = Vec::new();
    for (package, files) in packages {
        debug!(package = %package, files = files.len(), "extracting package");
        fragments.extend(assemble::assemble(extract::extract(files)));
    }

    Ok(fragments)
}
