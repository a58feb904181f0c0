#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn source_line_finds_enclosing_line() {
    let source = "line1\nline2\r\nline3";
    assert_eq!(source_line(source, 0), Some("line1"));
    assert_eq!(source_line(source, 8), Some("line2"));
    assert_eq!(source_line(source, source.len()), Some("line3"));
    assert_eq!(source_line(source, 100), None);
}

#[test]
fn syntax_error_shows_caret_under_column() {
    let source = "<?php\nnamespace App;\nclass {\n}\n";
    let error = CliError::from(ClassFileError::Syntax {
        message: "expected class name".to_owned(),
        offset: 27,
        line: 3,
        column: 7,
    });

    let output = render_error_with("a.php", source, &error, false);
    assert_eq!(
        output,
        "error: expected class name\n  --> a.php:3:7\n    |\n  3 | class {\n    |       ^\n"
    );
}

#[test]
fn other_errors_are_one_line() {
    let error = CliError::from(ClassFileError::NotAClassFile);
    let output = render_error_with("a.php", "", &error, false);
    assert_eq!(
        output,
        "error: a.php: not a class file: missing `<?php` open tag\n"
    );
}

#[test]
fn colors_wrap_the_error_label() {
    let error = CliError::from(ClassFileError::NotAClassFile);
    let output = render_error_with("a.php", "", &error, true);
    assert!(output.starts_with("\x1b[1;31merror\x1b[0m: "));
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.php");
    let err = read_file(&path).unwrap_err();
    assert!(matches!(
        err,
        CliError::ClassFile(ClassFileError::NotFound { ref what }) if what.contains("missing.php")
    ));
}

#[test]
fn reading_a_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_file(dir.path()).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
}
