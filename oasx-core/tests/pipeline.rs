//! End-to-end extraction over a real directory of Go fixtures.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tempfile::TempDir;

use oasx_core::pipeline;

fn write_file(dir: &Path, name: &str, content: &str) {
    File::create(dir.join(name))
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
}

fn create_package_dir() -> TempDir {
    let dir = TempDir::new().unwrap();

    write_file(
        dir.path(),
        "doc.go",
        "// Package testdata holds the spec fragments.\npackage testdata\n\n//+extract\n// openapi: 3.0.0\n// info:\n//\ttitle: Petstore\n",
    );

    write_file(
        dir.path(),
        "a.go",
        "package testdata\n\n//+extract\n// paths: {}\n\n// +extract:component:securitySchemes\n// basicAuth:\n//\ttype: http\n",
    );

    write_file(
        dir.path(),
        "paths.go",
        "package testdata\n\n//+extract:path\n// /pet/{petId}:\n//   get: {}\n",
    );

    write_file(
        dir.path(),
        "testdata.go",
        "package testdata\n\n// Ordinary documentation comment, not extracted.\n",
    );

    write_file(
        dir.path(),
        "z.go",
        "package testdata\n\n/* +extract\nservers:\n  - url: http://localhost:8000 */\n",
    );

    dir
}

#[test]
fn extracts_package_in_header_first_order() {
    let dir = create_package_dir();
    let fragments = pipeline::run(dir.path()).unwrap();

    assert_eq!(
        fragments,
        vec![
            // doc.go leads even though it is not lexicographically first.
            "openapi: 3.0.0\ninfo:\n  title: Petstore",
            // a.go's plain fragment; its security comment is aggregated below.
            "paths: {}",
            // z.go's block comment; paths.go's inert marker contributed nothing.
            "servers:\n  - url: http://localhost:8000",
            // The components block is always last.
            "components:\n  securitySchemes:\nbasicAuth:\n      type: http",
        ]
    );
}

#[test]
fn rerun_is_byte_identical() {
    let dir = create_package_dir();
    let first = pipeline::run(dir.path()).unwrap();
    let second = pipeline::run(dir.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn single_default_fragment_and_empty_security_block() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "a.go",
        "package single\n\n//+extract\n// foo: bar\n",
    );

    let fragments = pipeline::run(dir.path()).unwrap();
    assert_eq!(
        fragments,
        vec!["foo: bar", "components:\n  securitySchemes:"]
    );
}

#[test]
fn marker_on_later_line_contributes_nothing() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.go", "package single\n\n/* foo\n+extract */\n");

    let fragments = pipeline::run(dir.path()).unwrap();
    assert_eq!(fragments, vec!["components:\n  securitySchemes:"]);
}

#[test]
fn empty_directory_yields_empty_output() {
    let dir = TempDir::new().unwrap();
    let fragments = pipeline::run(dir.path()).unwrap();
    assert!(fragments.is_empty());
}

#[test]
fn missing_directory_is_an_error() {
    let result = pipeline::run(Path::new("/nonexistent/path/that/does/not/exist"));
    assert!(result.is_err());
}

#[test]
fn packages_extracted_in_ascending_name_order() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "b.go",
        "package zebra\n\n//+extract\n// from: zebra\n",
    );
    write_file(
        dir.path(),
        "a.go",
        "package alpha\n\n//+extract\n// from: alpha\n",
    );

    let fragments = pipeline::run(dir.path()).unwrap();
    assert_eq!(
        fragments,
        vec![
            "from: alpha",
            "components:\n  securitySchemes:",
            "from: zebra",
            "components:\n  securitySchemes:",
        ]
    );
}
