//! Final output assembly.
//!
//! The output sequence is a fixed structural contract: every plain
//! fragment in encounter order, then exactly one trailing components
//! block carrying the aggregated security schemes. No validation of
//! the assembled text is performed; downstream well-formedness is out
//! of scope.

use crate::types::Extraction;

/// First line of the trailing components block.
pub const COMPONENTS_HEADER: &str = "components:";

/// Second line of the trailing components block.
pub const SECURITY_SCHEMES_HEADER: &str = "  securitySchemes:";

/// Merge the accumulators into the final ordered fragment sequence.
/// The caller writes each fragment followed by one line terminator.
pub fn assemble(extraction: Extraction) -> Vec<String> {
    let mut output = extraction.fragments;

    let mut block = vec![
        COMPONENTS_HEADER.to_string(),
        SECURITY_SCHEMES_HEADER.to_string(),
    ];
    block.extend(extraction.security_schemes);
    output.push(block.join("\n"));

    output
}
