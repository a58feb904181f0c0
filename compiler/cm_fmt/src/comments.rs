//! Comment Rendering
//!
//! Leading comments are stored as raw text (block interiors and line-comment
//! bodies, newline-joined). They are written back as one block comment,
//! `/*<text>*/`, which reparses to the same text. Text that itself contains
//! `*/` cannot live inside a block comment, so it is written as one `//`
//! comment per line instead.
//!
//! Trailing comments are always single `//` comments on the construct's line.

use crate::emitter::Emitter;

/// Write a leading comment at `level`, followed by a newline.
pub fn emit_leading<E: Emitter>(out: &mut E, text: &str, level: usize) {
    if text.contains("*/") {
        for line in text.lines() {
            out.emit_indent(level);
            out.emit("//");
            out.emit(line);
            out.emit_newline();
        }
    } else {
        out.emit_indent(level);
        out.emit("/*");
        out.emit(text);
        out.emit("*/");
        out.emit_newline();
    }
}

/// Returns `true` if a trailing comment would render anything.
pub fn has_text(text: Option<&str>) -> bool {
    text.is_some_and(|t| !t.trim().is_empty())
}

/// Write ` // <text>` if `text` has any content. Line breaks become spaces,
/// so the comment stays on one line.
pub fn emit_trailing<E: Emitter>(out: &mut E, text: Option<&str>) {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return;
    };
    out.emit(" // ");
    out.emit(&text.trim().replace(['\n', '\r'], " "));
}

/// Join comment fragments that render as a single leading comment.
pub fn join<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    let parts: Vec<&str> = parts.into_iter().flatten().collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}
