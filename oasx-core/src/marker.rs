//! Marker classification for comment groups.
//!
//! A comment group opts into extraction by carrying a recognized
//! marker token, alone, as its trimmed first line. The token set is
//! closed: anything that does not match exactly classifies as
//! [`MarkerCategory::Unrecognized`] and is skipped by callers.

use once_cell::sync::Lazy;

/// Base marker token.
pub const TOKEN_DEFAULT: &str = "+extract";
/// Component-scoped variant for security schemes.
pub const TOKEN_SECURITY_SCHEMES: &str = "+extract:component:securitySchemes";
/// Path-scoped variant. Recognized but not yet routed to output.
pub const TOKEN_PATH: &str = "+extract:path";
/// Schema-scoped variant. Recognized but not yet routed to output.
pub const TOKEN_SCHEMA: &str = "+extract:schema";

/// Classification of one comment group by its first line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerCategory {
    /// Plain pass-through fragment.
    Default,
    /// Security-scheme fragment, aggregated into the components block.
    SecuritySchemes,
    /// Path fragment. Parses as a well-formed marker but is inert:
    /// the assembler has no aggregation for it yet.
    Path,
    /// Schema fragment. Same inert status as `Path`.
    Schema,
    /// First line matched no token; the group is not extracted.
    Unrecognized,
}

/// Token table, built once. Order is irrelevant; matching is exact.
static MARKER_TOKENS: Lazy<Vec<(&'static str, MarkerCategory)>> = Lazy::new(|| {
    vec![
        (TOKEN_DEFAULT, MarkerCategory::Default),
        (TOKEN_SECURITY_SCHEMES, MarkerCategory::SecuritySchemes),
        (TOKEN_PATH, MarkerCategory::Path),
        (TOKEN_SCHEMA, MarkerCategory::Schema),
    ]
});

impl MarkerCategory {
    /// Map a trimmed first line to its category.
    pub fn from_first_line(line: &str) -> Self {
        for (token, category) in MARKER_TOKENS.iter() {
            if line == *token {
                return *category;
            }
        }
        MarkerCategory::Unrecognized
    }

    /// Whether the assembler consumes this category. `Path` and
    /// `Schema` parse but are not directly usable output categories.
    pub fn is_extractable(&self) -> bool {
        matches!(self, MarkerCategory::Default | MarkerCategory::SecuritySchemes)
    }
}

/// Classify one comment group's joined text.
///
/// Splits off the first line, trims it, and matches it against the
/// token table. For an extractable category the returned body is
/// everything after the first line break (empty when the marker is the
/// whole group); otherwise the body is empty and the caller must skip
/// the group entirely. Pure function, no side effects.
pub fn classify(text: &str) -> (&str, MarkerCategory) {
    let (first, rest) = match text.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (text, ""),
    };

    let category = MarkerCategory::from_first_line(first.trim());
    if category.is_extractable() {
        (rest, category)
    } else {
        ("", category)
    }
}
