//! Comment attachment and bracket/terminator search.
//!
//! These are the primitives the class-file parser is built from. Each takes
//! the full source text plus a byte position and returns a new position, so
//! the parser never has to re-slice or copy the source while scanning.

use std::borrow::Cow;

use crate::cursor::Cursor;
use crate::error::{ScanError, ScanErrorKind};

/// Skip whitespace and comments starting at `pos`.
///
/// Returns the position of the first significant byte and the accumulated
/// comment text. Each block comment contributes its interior (between `/*`
/// and `*/`) followed by `\n`; each line comment contributes the text after
/// `//` up to the end of the line, followed by `\n`. The accumulator is empty
/// when no comment was skipped.
///
/// Pass the accumulator through [`comment_text`] to get the value stored on
/// a model element.
pub fn skip_comments_and_whitespace(text: &str, pos: usize) -> Result<(usize, String), ScanError> {
    let mut cursor = Cursor::at(text, pos);
    let mut comments = String::new();

    loop {
        cursor.eat_blank();

        if cursor.starts_with("/*") {
            let opener = cursor.pos();
            cursor.advance_n(2);
            let interior_start = cursor.pos();
            let Some(close) = cursor.find("*/") else {
                return Err(ScanError::new(
                    ScanErrorKind::UnterminatedBlockComment,
                    opener,
                ));
            };
            comments.push_str(cursor.slice(interior_start, close));
            comments.push('\n');
            cursor.seek(close + 2);
        } else if cursor.starts_with("//") {
            cursor.advance_n(2);
            let start = cursor.pos();
            cursor.eat_until_newline_or_eof();
            comments.push_str(cursor.slice_from(start));
            comments.push('\n');
        } else {
            return Ok((cursor.pos(), comments));
        }
    }
}

/// Look for a line comment on the same physical line as `pos`.
///
/// Only spaces and tabs are skipped. If `//` follows, the comment is consumed
/// to the end of the line and its text (after `//`, line break excluded) is
/// returned. Otherwise the returned position is just past the blanks and the
/// text is empty.
pub fn trailing_comment_after(text: &str, pos: usize) -> (usize, String) {
    let mut cursor = Cursor::at(text, pos);
    cursor.eat_whitespace();

    if !cursor.eat_str("//") {
        return (cursor.pos(), String::new());
    }

    let start = cursor.pos();
    cursor.eat_until_newline_or_eof();
    (cursor.pos(), cursor.slice_from(start).to_owned())
}

/// Find the first top-level occurrence of `terminator` at or after `start`.
///
/// "Top-level" means outside any `(`, `[` or `{` opened after `start`, so a
/// `;` inside a closure or array initializer does not end the statement.
/// When `string_aware` is set, single- and double-quoted strings are skipped
/// whole, honoring backslash escapes.
pub fn find_terminator(
    text: &str,
    start: usize,
    terminator: u8,
    string_aware: bool,
) -> Result<usize, ScanError> {
    let mut cursor = Cursor::at(text, start);
    let mut depth = 0usize;

    while !cursor.is_eof() {
        let b = cursor.current();
        if string_aware && is_quote(b) {
            skip_string(&mut cursor)?;
            continue;
        }
        if depth == 0 && b == terminator {
            return Ok(cursor.pos());
        }
        match b {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        cursor.advance();
    }

    Err(ScanError::new(
        ScanErrorKind::Expected(char::from(terminator)),
        text.len(),
    ))
}

/// Find the bracket that closes the one at `open_pos`.
///
/// Handles `{}`, `[]` and `()` with a depth stack. Strings and comments are
/// skipped as opaque text, so a quote in `// don't` or a brace inside
/// `"{$x}"` does not disturb the count.
pub fn find_matching_close(text: &str, open_pos: usize) -> Result<usize, ScanError> {
    let mut cursor = Cursor::at(text, open_pos);
    let Some(first) = closer_for(cursor.current()) else {
        return Err(ScanError::new(
            ScanErrorKind::Unexpected(char::from(cursor.current())),
            open_pos,
        ));
    };

    let mut stack = vec![first];
    cursor.advance();

    while !cursor.is_eof() {
        let b = cursor.current();

        if is_quote(b) {
            skip_string(&mut cursor)?;
            continue;
        }
        if skip_comment(&mut cursor)? {
            continue;
        }

        if let Some(closer) = closer_for(b) {
            stack.push(closer);
        } else if matches!(b, b')' | b']' | b'}') {
            if stack.pop() != Some(b) {
                return Err(ScanError::new(
                    ScanErrorKind::Unexpected(char::from(b)),
                    cursor.pos(),
                ));
            }
            if stack.is_empty() {
                return Ok(cursor.pos());
            }
        }
        cursor.advance();
    }

    Err(ScanError::new(ScanErrorKind::UnterminatedBlock, open_pos))
}

/// Split `text[start..end]` on commas outside brackets, strings and comments.
///
/// Segments are returned untrimmed, comments included, and may be empty
/// (e.g. after a trailing comma); callers decide what an empty segment means.
pub fn split_top_level(text: &str, start: usize, end: usize) -> Result<Vec<&str>, ScanError> {
    let end = end.min(text.len());
    let mut cursor = Cursor::at(text, start);
    let mut segments = Vec::new();
    let mut segment_start = cursor.pos();
    let mut depth = 0usize;

    while cursor.pos() < end {
        let b = cursor.current();
        if is_quote(b) {
            skip_string(&mut cursor)?;
            continue;
        }
        if skip_comment(&mut cursor)? {
            continue;
        }
        match b {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                segments.push(cursor.slice_from(segment_start));
                segment_start = cursor.pos() + 1;
            }
            _ => {}
        }
        cursor.advance();
    }

    segments.push(cursor.slice(segment_start, end));
    Ok(segments)
}

/// Remove the comments from a fragment of code, leaving strings intact.
///
/// Each comment is replaced by one space so that the tokens around it stay
/// apart. Text without comments is returned borrowed.
pub fn strip_comments(text: &str) -> Result<Cow<'_, str>, ScanError> {
    if memchr::memchr(b'/', text.as_bytes()).is_none() {
        return Ok(Cow::Borrowed(text));
    }

    let mut cursor = Cursor::new(text);
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;

    while !cursor.is_eof() {
        if is_quote(cursor.current()) {
            skip_string(&mut cursor)?;
            continue;
        }
        let start = cursor.pos();
        if skip_comment(&mut cursor)? {
            out.push_str(cursor.slice(copied, start));
            out.push(' ');
            copied = cursor.pos();
            continue;
        }
        cursor.advance();
    }

    if copied == 0 {
        return Ok(Cow::Borrowed(text));
    }
    out.push_str(cursor.slice(copied, text.len()));
    Ok(Cow::Owned(out))
}

/// Convert a comment accumulator into the text stored on an element.
///
/// Drops the `\n` appended after the last comment. Returns `None` when the
/// accumulator holds nothing but whitespace.
pub fn comment_text(accumulated: &str) -> Option<String> {
    let text = accumulated.strip_suffix('\n').unwrap_or(accumulated);
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}

#[inline]
fn is_quote(b: u8) -> bool {
    b == b'"' || b == b'\''
}

#[inline]
fn closer_for(b: u8) -> Option<u8> {
    match b {
        b'(' => Some(b')'),
        b'[' => Some(b']'),
        b'{' => Some(b'}'),
        _ => None,
    }
}

/// Skip the comment starting at the cursor, if there is one. A line comment
/// stops before its line break.
fn skip_comment(cursor: &mut Cursor<'_>) -> Result<bool, ScanError> {
    if cursor.starts_with("/*") {
        let opener = cursor.pos();
        cursor.advance_n(2);
        let Some(close) = cursor.find("*/") else {
            return Err(ScanError::new(
                ScanErrorKind::UnterminatedBlockComment,
                opener,
            ));
        };
        cursor.seek(close + 2);
        Ok(true)
    } else if cursor.starts_with("//") {
        cursor.eat_until_newline_or_eof();
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Skip the quoted string starting at the cursor. Leaves the cursor just past
/// the closing quote.
fn skip_string(cursor: &mut Cursor<'_>) -> Result<(), ScanError> {
    let opener = cursor.pos();
    let quote = cursor.current();
    cursor.advance();

    while !cursor.is_eof() {
        match cursor.current() {
            b'\\' => cursor.advance_n(2),
            b if b == quote => {
                cursor.advance();
                return Ok(());
            }
            _ => cursor.advance(),
        }
    }

    Err(ScanError::new(ScanErrorKind::UnterminatedString, opener))
}

#[cfg(test)]
mod tests;
