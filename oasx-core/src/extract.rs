//! The extraction engine.
//!
//! Walks files in orderer order and comment groups in source order,
//! classifies each group, and routes extractable bodies into the
//! per-category accumulators with their text transforms applied.
//! Performs no I/O and cannot fail: empty input legitimately yields
//! empty accumulators.

use tracing::debug;

use crate::marker::{self, MarkerCategory};
use crate::order;
use crate::types::{Extraction, SourceFile};

/// Replacement for one horizontal tab in extracted bodies.
const TAB_REPLACEMENT: &str = "  ";

/// Appended in place of each newline of a security-scheme body,
/// pushing continuation lines under the `securitySchemes:` heading.
const SECURITY_NEWLINE: &str = "\n    ";

/// Extract tagged comment bodies from a set of parsed files.
///
/// Every comment group is classified exactly once and contributes to
/// at most one accumulator. Groups with an unrecognized first line,
/// and groups carrying one of the inert marker variants, are dropped
/// silently.
pub fn extract(files: Vec<SourceFile>) -> Extraction {
    let mut extraction = Extraction::default();

    for file in order::order(files) {
        for group in &file.comments {
            let (body, category) = marker::classify(&group.text);
            if !category.is_extractable() {
                debug!(file = %file.name, ?category, "skipping comment group");
                continue;
            }

            // Tabs are rewritten before the category switch, so the
            // rule covers both extractable categories.
            let body = body.replace('\t', TAB_REPLACEMENT);
            match category {
                MarkerCategory::Default => {
                    extraction.fragments.push(body);
                }
                MarkerCategory::SecuritySchemes => {
                    extraction
                        .security_schemes
                        .push(body.replace('\n', SECURITY_NEWLINE));
                }
                _ => {}
            }
        }
    }

    extraction
}
