//! Properties and method parameters.

use crate::Scope;

/// Type reported for properties and parameters declared without one.
pub const MIXED: &str = "mixed";

/// A `$`-named variable with an optional type, default and scope.
///
/// Used for class properties and for method parameters. The name keeps its
/// sigil and any `&` or `...` prefix (`$x`, `&$out`, `...$rest`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypedVar {
    pub name: String,
    pub ty: String,
    /// Raw initializer text, without the `=`.
    pub default_value: Option<String>,
    pub scope: Option<Scope>,
    pub is_static: bool,
}

impl TypedVar {
    /// An untyped variable (`mixed`) with no default and no scope.
    pub fn new(name: impl Into<String>) -> Self {
        TypedVar {
            name: name.into(),
            ty: MIXED.to_owned(),
            default_value: None,
            scope: None,
            is_static: false,
        }
    }

    #[must_use]
    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.ty = ty.into();
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Returns `true` unless the type is the `mixed` sentinel.
    pub fn is_typed(&self) -> bool {
        self.ty != MIXED
    }

    /// Returns `true` for `...$name` parameters.
    pub fn is_variadic(&self) -> bool {
        self.name.starts_with("...")
    }

    /// Returns `true` for `&$name` parameters.
    pub fn is_by_reference(&self) -> bool {
        self.name.starts_with('&')
    }

    /// Scope for a property: the explicit one, or `Public`.
    pub fn effective_scope(&self) -> Scope {
        self.scope.unwrap_or_default()
    }
}
