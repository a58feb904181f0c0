//! Comment-carrying wrapper for model nodes.

/// A model node together with the comments attached to it.
///
/// `comment_before` holds every comment between the previous construct and
/// this one, newline-joined in source order (block comments contribute their
/// interior, line comments the text after `//`). `trailing_comment` holds the
/// text of a `//` comment on the same line, right after the construct.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Element<T> {
    pub comment_before: Option<String>,
    pub trailing_comment: Option<String>,
    pub payload: T,
}

impl<T> Element<T> {
    /// An element with no comments.
    #[inline]
    pub fn new(payload: T) -> Self {
        Element {
            comment_before: None,
            trailing_comment: None,
            payload,
        }
    }

    #[must_use]
    pub fn with_comment_before(mut self, comment: impl Into<String>) -> Self {
        self.comment_before = Some(comment.into());
        self
    }

    #[must_use]
    pub fn with_trailing_comment(mut self, comment: impl Into<String>) -> Self {
        self.trailing_comment = Some(comment.into());
        self
    }

    /// Returns `true` if either comment slot is filled.
    #[inline]
    pub fn has_comments(&self) -> bool {
        self.comment_before.is_some() || self.trailing_comment.is_some()
    }

    /// Replace the payload, keeping the comments.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Element<U> {
        Element {
            comment_before: self.comment_before,
            trailing_comment: self.trailing_comment,
            payload: f(self.payload),
        }
    }
}

impl<T> From<T> for Element<T> {
    fn from(payload: T) -> Self {
        Element::new(payload)
    }
}
