//! Deterministic file ordering for extraction.
//!
//! Files are visited in ascending, case-sensitive lexicographic order
//! of their base names, except that a file named `doc.go` always comes
//! first. That lets an author keep a fixed preamble in `doc.go` and
//! rely on it leading the assembled output, while every other fragment
//! lands in a predictable, diff-friendly position.

use std::cmp::Ordering;

use crate::types::SourceFile;

/// File that is always ordered first when present.
pub const HEADER_FILE_NAME: &str = "doc.go";

/// Sort files into extraction order. Total and stable: the same name
/// set always yields the same order, and names within one directory
/// are unique so ties cannot occur.
pub fn order(mut files: Vec<SourceFile>) -> Vec<SourceFile> {
    files.sort_by(|a, b| compare_names(&a.name, &b.name));
    files
}

fn compare_names(a: &str, b: &str) -> Ordering {
    match (a == HEADER_FILE_NAME, b == HEADER_FILE_NAME) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<SourceFile> {
        names
            .iter()
            .map(|n| SourceFile {
                name: n.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn names(files: &[SourceFile]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_header_file_first() {
        let sorted = order(files(&["z.go", "a.go", "doc.go", "paths.go", "testdata.go"]));
        assert_eq!(
            names(&sorted),
            vec!["doc.go", "a.go", "paths.go", "testdata.go", "z.go"]
        );
    }

    #[test]
    fn test_lexicographic_without_header() {
        let sorted = order(files(&["z.go", "b.go", "a.go"]));
        assert_eq!(names(&sorted), vec!["a.go", "b.go", "z.go"]);
    }

    #[test]
    fn test_case_sensitive() {
        // Uppercase sorts before lowercase in byte order.
        let sorted = order(files(&["b.go", "A.go", "a.go"]));
        assert_eq!(names(&sorted), vec!["A.go", "a.go", "b.go"]);
    }

    #[test]
    fn test_header_file_already_first_is_stable() {
        let sorted = order(files(&["doc.go", "a.go"]));
        assert_eq!(names(&sorted), vec!["doc.go", "a.go"]);
    }

    #[test]
    fn test_single_file() {
        let sorted = order(files(&["main.go"]));
        assert_eq!(names(&sorted), vec!["main.go"]);
    }

    #[test]
    fn test_empty() {
        assert!(order(Vec::new()).is_empty());
    }
}
