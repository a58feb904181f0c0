#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

// === skip_comments_and_whitespace ===

#[test]
fn skip_plain_whitespace() {
    let (pos, comments) = skip_comments_and_whitespace("  \n\t x", 0).unwrap();
    assert_eq!(pos, 5);
    assert_eq!(comments, "");
}

#[test]
fn skip_block_comment_collects_interior() {
    let text = "/** doc */\nconst";
    let (pos, comments) = skip_comments_and_whitespace(text, 0).unwrap();
    assert_eq!(&text[pos..], "const");
    assert_eq!(comments, "* doc \n");
}

#[test]
fn skip_consecutive_comments_in_order() {
    let text = "// first\n/* second */\n  // third\r\nclass";
    let (pos, comments) = skip_comments_and_whitespace(text, 0).unwrap();
    assert_eq!(&text[pos..], "class");
    assert_eq!(comments, " first\n second \n third\n");
}

#[test]
fn skip_line_comment_at_eof() {
    let text = "// only";
    let (pos, comments) = skip_comments_and_whitespace(text, 0).unwrap();
    assert_eq!(pos, text.len());
    assert_eq!(comments, " only\n");
}

#[test]
fn skip_unterminated_block_comment() {
    let err = skip_comments_and_whitespace("  /* never closed", 0).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::UnterminatedBlockComment);
    assert_eq!(err.offset, 2);
}

#[test]
fn skip_stops_at_lone_slash() {
    let (pos, comments) = skip_comments_and_whitespace(" / 2", 0).unwrap();
    assert_eq!(pos, 1);
    assert_eq!(comments, "");
}

// === trailing_comment_after ===

#[test]
fn trailing_comment_same_line() {
    let text = "; // note\nnext";
    let (pos, comment) = trailing_comment_after(text, 1);
    assert_eq!(comment, " note");
    assert_eq!(&text[pos..], "\nnext");
}

#[test]
fn trailing_comment_not_on_next_line() {
    let text = "  \n// next line";
    let (pos, comment) = trailing_comment_after(text, 0);
    assert_eq!(comment, "");
    assert_eq!(pos, 2);
}

#[test]
fn trailing_block_comment_is_not_trailing() {
    let (pos, comment) = trailing_comment_after(" /* x */", 0);
    assert_eq!(comment, "");
    assert_eq!(pos, 1);
}

// === find_terminator ===

#[test]
fn terminator_simple() {
    assert_eq!(find_terminator("1 + 2;", 0, b';', true).unwrap(), 5);
}

#[test]
fn terminator_inside_string_is_skipped() {
    let text = r#""a;b";"#;
    assert_eq!(find_terminator(text, 0, b';', true).unwrap(), 5);
}

#[test]
fn terminator_inside_string_not_skipped_when_unaware() {
    let text = r#""a;b";"#;
    assert_eq!(find_terminator(text, 0, b';', false).unwrap(), 2);
}

#[test]
fn terminator_honors_escaped_quote() {
    let text = r"'it\'s;' ;";
    assert_eq!(find_terminator(text, 0, b';', true).unwrap(), 9);
}

#[test]
fn terminator_inside_brackets_is_skipped() {
    let text = "fn() { return 1; };";
    assert_eq!(find_terminator(text, 0, b';', true).unwrap(), 18);
}

#[test]
fn terminator_missing() {
    let err = find_terminator("no end", 0, b';', true).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::Expected(';'));
    assert_eq!(err.to_string(), "expected `;` at byte 6");
}

#[test]
fn terminator_unterminated_string() {
    let err = find_terminator("x = 'open;", 0, b';', true).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::UnterminatedString);
    assert_eq!(err.offset, 4);
}

// === find_matching_close ===

#[test]
fn matching_close_nested() {
    let text = "{ if (a[0]) { b(); } }";
    assert_eq!(find_matching_close(text, 0).unwrap(), text.len() - 1);
}

#[test]
fn matching_close_paren() {
    let text = "(array $a = [1, 2]) {";
    assert_eq!(find_matching_close(text, 0).unwrap(), 18);
}

#[test]
fn matching_close_skips_strings() {
    let text = r#"{ $s = "}"; $t = '{'; }"#;
    assert_eq!(find_matching_close(text, 0).unwrap(), text.len() - 1);
}

#[test]
fn matching_close_skips_comments() {
    let text = "{\n    // don't }\n    /* { */\n}";
    assert_eq!(find_matching_close(text, 0).unwrap(), text.len() - 1);
}

#[test]
fn matching_close_mismatch() {
    let err = find_matching_close("{ ( }", 0).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::Unexpected('}'));
    assert_eq!(err.offset, 4);
}

#[test]
fn matching_close_unterminated() {
    let err = find_matching_close("(string $a", 0).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::UnterminatedBlock);
    assert_eq!(err.offset, 0);
}

#[test]
fn matching_close_requires_opener() {
    let err = find_matching_close("abc", 0).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::Unexpected('a'));
}

// === split_top_level ===

#[test]
fn split_simple_list() {
    let text = "a, b ,c";
    assert_eq!(
        split_top_level(text, 0, text.len()).unwrap(),
        vec!["a", " b ", "c"]
    );
}

#[test]
fn split_respects_brackets_and_strings() {
    let text = "array $a = [1, 2], string $s = ',', $f = f(1, 2)";
    assert_eq!(
        split_top_level(text, 0, text.len()).unwrap(),
        vec!["array $a = [1, 2]", " string $s = ','", " $f = f(1, 2)"]
    );
}

#[test]
fn split_within_range() {
    let text = "f(a, b) + c, d";
    assert_eq!(split_top_level(text, 2, 6).unwrap(), vec!["a", " b"]);
}

#[test]
fn split_keeps_empty_segments() {
    let text = "a,";
    assert_eq!(split_top_level(text, 0, text.len()).unwrap(), vec!["a", ""]);
    assert_eq!(split_top_level("", 0, 0).unwrap(), vec![""]);
}

#[test]
fn split_skips_comments() {
    let text = "\n $a, // first, second\n $b /* c, d */, // don't\n $c\n";
    assert_eq!(
        split_top_level(text, 0, text.len()).unwrap(),
        vec![
            "\n $a",
            " // first, second\n $b /* c, d */",
            " // don't\n $c\n"
        ]
    );
}

#[test]
fn split_unterminated_comment() {
    let text = "$a, /* open";
    assert_eq!(
        split_top_level(text, 0, text.len()).unwrap_err().kind,
        ScanErrorKind::UnterminatedBlockComment
    );
}

// === strip_comments ===

#[test]
fn strip_comments_replaces_each_with_space() {
    assert_eq!(
        strip_comments(" // don't\n int/* x */$b\n").unwrap(),
        "  \n int $b\n"
    );
}

#[test]
fn strip_comments_leaves_strings_alone() {
    let text = "$url = 'http://x' /* y */";
    assert_eq!(strip_comments(text).unwrap(), "$url = 'http://x'  ");
    assert!(matches!(strip_comments("$a = 1 / 2").unwrap(), Cow::Borrowed(_)));
}

// === comment_text ===

#[test]
fn comment_text_strips_final_newline() {
    assert_eq!(comment_text(" a\n b\n"), Some(" a\n b".to_owned()));
}

#[test]
fn comment_text_empty_is_none() {
    assert_eq!(comment_text(""), None);
    assert_eq!(comment_text("   \n"), None);
}

// === Properties ===

#[allow(
    clippy::redundant_closure_for_method_calls,
    reason = "proptest macros generate code with these patterns"
)]
mod proptest_scanner {
    use super::super::{comment_text, find_matching_close, skip_comments_and_whitespace};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn skip_lands_on_significant_byte(
            chunks in proptest::collection::vec(
                prop_oneof![
                    Just(" ".to_owned()),
                    Just("\n".to_owned()),
                    Just("\t".to_owned()),
                    "[a-z ]{0,8}".prop_map(|s| format!("/*{s}*/")),
                    "[a-z ]{0,8}".prop_map(|s| format!("//{s}\n")),
                ],
                0..12,
            ),
            tail in "[a-z]{1,4}",
        ) {
            let text = format!("{}{tail}", chunks.concat());
            let (pos, _) = skip_comments_and_whitespace(&text, 0).unwrap();
            prop_assert_eq!(&text[pos..], tail.as_str());
        }

        #[test]
        fn collected_comments_count_matches(
            bodies in proptest::collection::vec("[a-z]{1,6}", 1..6),
        ) {
            let text: String = bodies.iter().map(|b| format!("/*{b}*/\n")).collect();
            let (_, acc) = skip_comments_and_whitespace(&text, 0).unwrap();
            let joined = comment_text(&acc).unwrap();
            prop_assert_eq!(joined, bodies.join("\n"));
        }

        #[test]
        fn balanced_nesting_closes_at_end(depth in 1usize..20) {
            let text = format!("{}{}", "({[".repeat(depth), "]})".repeat(depth));
            prop_assert_eq!(find_matching_close(&text, 0).unwrap(), text.len() - 1);
        }
    }
}
