//! Parser state and shared helpers.

use cm_ir::ClassFileError;
use cm_scan::{
    comment_text, skip_comments_and_whitespace, trailing_comment_after, Cursor, ScanError,
    SourcePosition,
};

/// Parser state: the source and a byte position into it.
///
/// Grammar methods live in `header` and `members`, each extending this type.
pub(crate) struct Parser<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Parser { source, pos: 0 }
    }

    #[inline]
    pub(crate) fn source(&self) -> &'a str {
        self.source
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.source.len());
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// A cursor at the current position. Advancing it does not move the
    /// parser; commit with [`Parser::commit`].
    #[inline]
    pub(crate) fn cursor(&self) -> Cursor<'a> {
        Cursor::at(self.source, self.pos)
    }

    #[inline]
    pub(crate) fn commit(&mut self, cursor: Cursor<'a>) {
        self.pos = cursor.pos();
    }

    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.cursor().current()
    }

    /// Skip whitespace and comments, returning the comment text.
    pub(crate) fn skip_comments(&mut self) -> Result<Option<String>, ClassFileError> {
        let (pos, comments) =
            skip_comments_and_whitespace(self.source, self.pos).map_err(|e| self.scan_error(e))?;
        self.pos = pos;
        Ok(comment_text(&comments))
    }

    /// Consume a `//` comment on the current line, if there is one.
    pub(crate) fn trailing_comment(&mut self) -> Option<String> {
        let (pos, text) = trailing_comment_after(self.source, self.pos);
        self.pos = pos;
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_owned())
        }
    }

    /// Syntax error at `offset`.
    pub(crate) fn error_at(&self, offset: usize, message: impl Into<String>) -> ClassFileError {
        let position = SourcePosition::locate(self.source, offset);
        ClassFileError::Syntax {
            message: message.into(),
            offset,
            line: position.line,
            column: position.column,
        }
    }

    /// Syntax error at the current position.
    pub(crate) fn error_here(&self, message: impl Into<String>) -> ClassFileError {
        self.error_at(self.pos, message)
    }

    pub(crate) fn scan_error(&self, err: ScanError) -> ClassFileError {
        self.error_at(err.offset, err.kind.to_string())
    }
}

/// Bytes allowed in a type token: identifiers, namespace separators, and the
/// nullable/union markers.
#[inline]
pub(crate) fn is_type_byte(b: u8) -> bool {
    cm_scan::is_ident_byte(b) || matches!(b, b'\\' | b'?' | b'|')
}

/// Consume a type token (`int`, `?Foo`, `A|B`, `\Ns\C`, `A&B`).
///
/// `&` is only part of the type when another type name follows it, so the
/// by-reference marker in `array &$out` is left alone.
pub(crate) fn eat_type<'a>(cursor: &mut Cursor<'a>) -> &'a str {
    let start = cursor.pos();
    loop {
        cursor.eat_while(is_type_byte);
        if cursor.current() == b'&' && cm_scan::is_ident_byte(cursor.peek()) {
            cursor.advance();
        } else {
            break;
        }
    }
    cursor.slice_from(start)
}

/// Consume a qualified name (`Foo`, `\Foo\Bar`).
pub(crate) fn eat_qualified_name<'a>(cursor: &mut Cursor<'a>) -> &'a str {
    let start = cursor.pos();
    cursor.eat_while(|b| cm_scan::is_ident_byte(b) || b == b'\\');
    cursor.slice_from(start)
}
