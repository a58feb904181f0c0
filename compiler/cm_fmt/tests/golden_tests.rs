//! Golden tests for the class file generator.
//!
//! Each `.php` file in `tests/fmt/` is parsed and regenerated. If a matching
//! `.php.expected` file exists, the output must equal it; otherwise the file
//! is already canonical and the output must equal the input.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::fs;
use std::path::{Path, PathBuf};

use cm_fmt::generate;

/// Parse source code and regenerate it.
fn parse_and_generate(source: &str) -> Result<String, String> {
    let file = cm_parse::parse(source).map_err(|e| format!("Parse error: {e}"))?;
    Ok(generate(&file))
}

/// Find all .php files in a directory recursively.
fn find_php_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir() {
        if let Ok(entries) = fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    files.extend(find_php_files(&path));
                } else if path.extension().is_some_and(|e| e == "php") {
                    files.push(path);
                }
            }
        }
    }

    files.sort();
    files
}

/// Get the path to the tests/fmt directory.
fn golden_tests_dir() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fmt")
}

/// Run a single golden test file.
fn run_golden_test(path: &Path) -> Result<(), String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let generated = parse_and_generate(&source)?;

    let expected_path = path.with_extension("php.expected");
    let expected = if expected_path.exists() {
        fs::read_to_string(&expected_path)
            .map_err(|e| format!("Failed to read {}: {}", expected_path.display(), e))?
    } else {
        source
    };

    if generated != expected {
        return Err(format!(
            "Generation mismatch for {}:\n\n--- Expected ---\n{}\n--- Got ---\n{}\n",
            path.display(),
            expected,
            generated
        ));
    }
    Ok(())
}

#[test]
fn golden_fixtures() {
    let files = find_php_files(&golden_tests_dir());
    assert!(!files.is_empty(), "no golden fixtures found");

    let failures: Vec<String> = files
        .iter()
        .filter_map(|path| run_golden_test(path).err())
        .collect();

    assert!(
        failures.is_empty(),
        "{} of {} golden tests failed:\n\n{}",
        failures.len(),
        files.len(),
        failures.join("\n")
    );
}

#[test]
fn golden_minimal() {
    let path = golden_tests_dir().join("minimal.php");
    run_golden_test(&path).unwrap();
}

#[test]
fn golden_reorder() {
    let path = golden_tests_dir().join("reorder.php");
    run_golden_test(&path).unwrap();
}

/// A complete class in the canonical layout: doc comments, every member
/// kind, promoted constructor parameters and multi-line bodies.
#[test]
fn golden_full_class() {
    let path = golden_tests_dir().join("TestClass.php");
    run_golden_test(&path).unwrap();
}

#[test]
fn golden_full_class_keeps_non_ascii_comments() {
    let source = fs::read_to_string(golden_tests_dir().join("TestClass.php")).unwrap();
    let file = cm_parse::parse(&source).unwrap();
    let comment = file.namespace.comment_before.as_deref().unwrap();
    assert!(comment.contains("Sébastien"));
    assert_eq!(file.content.methods().len(), 7);
    assert!(generate(&file).ends_with("    }\n\n}"));
}
