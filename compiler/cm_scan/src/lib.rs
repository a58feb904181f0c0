//! Class File Scanner Core
//!
//! Hand-written scanning primitives shared by the class-file parser:
//!
//! - [`Cursor`]: byte cursor with peek/advance semantics over UTF-8 source
//! - [`skip_comments_and_whitespace`] / [`trailing_comment_after`]: comment
//!   attachment (leading vs same-line trailing comments)
//! - [`find_terminator`]: string-literal-aware statement terminator search
//! - [`find_matching_close`]: bracket-depth matching for `{`, `[` and `(`
//! - [`split_top_level`] / [`strip_comments`]: comma splitting and comment
//!   removal for parameter lists
//! - [`SourcePosition`]: byte offset to line/column conversion for errors
//!
//! No token stream is produced. Callers drive the primitives directly and
//! slice the source themselves, so scanning never allocates except for the
//! accumulated comment text.

mod cursor;
mod error;
mod position;
mod scanner;

pub use cursor::{is_ident_byte, Cursor};
pub use error::{ScanError, ScanErrorKind};
pub use position::SourcePosition;
pub use scanner::{
    comment_text, find_matching_close, find_terminator, skip_comments_and_whitespace,
    split_top_level, strip_comments, trailing_comment_after,
};
