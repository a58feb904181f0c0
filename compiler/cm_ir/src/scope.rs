//! Member visibility.

use std::fmt;

/// Visibility of a class member or promoted constructor parameter.
///
/// Members without an explicit keyword are `Public`. Parameters store
/// `Option<Scope>` instead, since an unpromoted parameter has no scope.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scope {
    #[default]
    Public,
    Private,
    Protected,
}

impl Scope {
    /// The source keyword for this scope.
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Public => "public",
            Scope::Private => "private",
            Scope::Protected => "protected",
        }
    }

    /// Map a source keyword to a scope. Matching is exact (lowercase).
    pub fn from_keyword(keyword: &str) -> Option<Scope> {
        match keyword {
            "public" => Some(Scope::Public),
            "private" => Some(Scope::Private),
            "protected" => Some(Scope::Protected),
            _ => None,
        }
    }

    /// All scopes, in keyword-probe order.
    pub const ALL: [Scope; 3] = [Scope::Public, Scope::Private, Scope::Protected];
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
