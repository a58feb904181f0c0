//! Class constants.

use crate::Scope;

/// `<scope> const NAME = value;`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConstantDecl {
    pub name: String,
    /// Raw expression text, trimmed.
    pub value: String,
    pub scope: Scope,
}

impl ConstantDecl {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        ConstantDecl {
            name: name.into(),
            value: value.into(),
            scope: Scope::Public,
        }
    }

    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Constants belong to the class, never to an instance.
    #[inline]
    #[allow(clippy::unused_self, reason = "mirrors TypedVar::is_static")]
    pub fn is_static(&self) -> bool {
        true
    }
}
