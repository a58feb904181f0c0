//! Parser tests.
//!
//! - `header`: open tag, namespace, imports, class signature and clauses
//! - `members`: member classification and each member parser
//! - `errors`: syntax and duplicate errors
//! - `scenarios`: whole-file parses of realistic classes

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]


use cm_ir::ClassFile;

/// Parse, panicking with the error on failure.
fn parse_ok(text: &str) -> ClassFile {
    crate::parse(text).unwrap_or_else(|e| panic!("parse failed: {e}\n---\n{text}"))
}

/// Wrap a class body in a minimal file.
fn class_with_body(body: &str) -> String {
    format!("<?php\n\nnamespace App;\n\nclass Foo\n{{\n{body}\n}}\n")
}
