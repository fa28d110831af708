//! Go source parsing module.
//!
//! Recovers the comment groups attached to each file using the
//! tree-sitter Go grammar. The extractor converts the raw comment
//! nodes into the [`crate::types::SourceFile`] structure the
//! extraction engine consumes.

pub mod go;

mod helpers;
