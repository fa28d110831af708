//! oasx core - comment extraction and ordering engine.
//!
//! Pulls specially-tagged comment blocks out of Go source files and
//! assembles them, in a deterministic order, into a single OpenAPI/
//! YAML fragment document. API-spec fragments stay colocated with the
//! code they describe instead of living in a separate file.
//!
//! # How it works
//!
//! - **Scanner** discovers `.go` files in one directory
//! - **Parser** recovers each file's comment groups via tree-sitter
//! - **Marker classifier** matches a group's first line against the
//!   `+extract` token family
//! - **Extraction engine** routes matched bodies into per-category
//!   accumulators, files ordered `doc.go`-first then lexicographic
//! - **Assembler** emits plain fragments followed by one aggregated
//!   components/securitySchemes block
//!
//! The core components perform no I/O and cannot fail; all fatal
//! conditions surface at the scanner/parser boundaries.

pub mod assemble;
pub mod error;
pub mod extract;
pub mod marker;
pub mod order;
pub mod parser;
pub mod pipeline;
pub mod scanner;
pub mod types;

pub use error::{ExtractError, Result};
pub use types::{CommentGroup, Extraction, SourceFile};
