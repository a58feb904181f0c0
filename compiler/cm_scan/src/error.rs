//! Scanner error types.
//!
//! Scan failures carry the byte offset where the problem was detected. The
//! parser converts them into model-level syntax errors with line/column
//! information, so this crate stays independent of the model.

use thiserror::Error;

/// What went wrong while scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    /// A `/*` with no matching `*/` before end of text.
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    /// A quote with no matching unescaped closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// End of text reached with brackets still open.
    #[error("unterminated block")]
    UnterminatedBlock,
    /// A closing bracket that does not match the innermost open bracket.
    #[error("unexpected `{0}`")]
    Unexpected(char),
    /// A required character was never found.
    #[error("expected `{0}`")]
    Expected(char),
}

/// A scan failure at a byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{kind} at byte {offset}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub offset: usize,
}

impl ScanError {
    #[inline]
    pub fn new(kind: ScanErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}
