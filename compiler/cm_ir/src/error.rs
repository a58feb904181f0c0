//! Error taxonomy for parsing and model mutation.

use thiserror::Error;

use crate::MemberKind;

/// Every failure the class-file core can report.
///
/// Parsing never recovers: the first error aborts and no partial model is
/// returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClassFileError {
    /// The text has no `<?php` open tag.
    #[error("not a class file: missing `<?php` open tag")]
    NotAClassFile,

    /// A structural expectation was not met.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        message: String,
        /// Byte offset into the source.
        offset: usize,
        line: u32,
        column: u32,
    },

    /// Two members of the same kind share a name.
    #[error("duplicate {kind} `{name}`")]
    DuplicateMember { kind: MemberKind, name: String },

    /// Two parameters of one method share a name.
    #[error("duplicate parameter `{name}` in method `{method}`")]
    DuplicateParameter { method: String, name: String },

    /// A file or lookup key does not exist.
    #[error("not found: {what}")]
    NotFound { what: String },
}

impl ClassFileError {
    pub fn not_found(what: impl Into<String>) -> Self {
        ClassFileError::NotFound { what: what.into() }
    }

    /// Returns `true` for [`ClassFileError::Syntax`].
    pub fn is_syntax(&self) -> bool {
        matches!(self, ClassFileError::Syntax { .. })
    }
}
