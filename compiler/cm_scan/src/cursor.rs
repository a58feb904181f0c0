//! Byte cursor over class-file source text.
//!
//! The cursor advances through the source byte-by-byte. Reads at or past the
//! end of the source return `0x00`, which no scanning predicate accepts, so
//! `eat_*` loops terminate at EOF without explicit bounds checks.
//!
//! # Character Boundaries
//!
//! Every byte the scanner stops on (brackets, quotes, `;`, comment openers,
//! whitespace) is ASCII. Bytes `>= 0x80` only ever appear *inside* a run the
//! cursor is skipping, so positions handed to [`Cursor::slice`] always fall
//! on UTF-8 character boundaries.

use memchr::memmem;

/// Returns `true` for bytes that may continue an identifier.
///
/// Bytes `0x80..=0xFF` are accepted so that identifiers may contain any
/// non-ASCII character, matching the language's `[a-zA-Z0-9_\x80-\xff]` rule.
#[inline]
pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

/// Byte cursor over source text.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for lookahead:
/// recognizers copy the cursor, probe ahead, and throw the copy away.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Create a cursor at `pos`, clamped to the source length.
    pub fn at(source: &'a str, pos: usize) -> Self {
        Self {
            source,
            pos: pos.min(source.len()),
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current, or `0x00` past EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.source.as_bytes().get(pos).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// Move the cursor to an absolute position, clamped to the source length.
    #[inline]
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.source.len());
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Source text from the current position to the end.
    pub fn rest(&self) -> &'a str {
        self.slice(self.pos, self.source.len())
    }

    /// Extract a source substring.
    ///
    /// Out-of-range or non-boundary requests yield an empty string rather
    /// than panicking; see the module docs for why scanner positions are
    /// always valid boundaries.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source.get(start..end).unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Check if the upcoming bytes match `s`.
    #[inline]
    pub fn starts_with(&self, s: &str) -> bool {
        self.source.as_bytes()[self.pos..].starts_with(s.as_bytes())
    }

    /// Consume `s` if the upcoming bytes match it.
    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.starts_with(s) {
            self.advance_n(s.len());
            true
        } else {
            false
        }
    }

    /// Check for `keyword` as a whole word at the current position.
    ///
    /// The byte following the keyword must not continue an identifier, so
    /// `class` does not match the start of `classname`.
    pub fn check_keyword(&self, keyword: &str) -> bool {
        self.starts_with(keyword) && !is_ident_byte(self.byte_at(self.pos + keyword.len()))
    }

    /// Consume `keyword` if it appears as a whole word at the current position.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.check_keyword(keyword) {
            self.advance_n(keyword.len());
            true
        } else {
            false
        }
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must return `false` so that the loop stops at EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Consume an identifier and return it. Empty if none starts here.
    pub fn eat_ident(&mut self) -> &'a str {
        let start = self.pos;
        if !self.current().is_ascii_digit() {
            self.eat_while(is_ident_byte);
        }
        self.slice_from(start)
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| b == b' ' || b == b'\t');
    }

    /// Advance past all whitespace, line breaks included.
    #[inline]
    pub fn eat_blank(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
    }

    /// Advance to the next `\n` or `\r` byte, or to EOF if there is none.
    ///
    /// Used by the comment scanner to skip line-comment bodies.
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.source.as_bytes()[self.pos..];
        match memchr::memchr2(b'\n', b'\r', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Absolute position of the next occurrence of `needle` at or after the
    /// current position. The cursor does not move.
    pub fn find(&self, needle: &str) -> Option<usize> {
        memmem::find(&self.source.as_bytes()[self.pos..], needle.as_bytes())
            .map(|offset| self.pos + offset)
    }
}
