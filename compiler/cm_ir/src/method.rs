//! Method declarations.

use crate::{ClassFileError, OrderedMap, Scope, TypedVar};

/// A method: modifiers, ordered parameters, return type and verbatim body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    parameters: OrderedMap<TypedVar>,
    /// Raw body including the enclosing braces. Empty for declaration-only
    /// methods, whose signature ends in `;`.
    pub body: String,
    pub scope: Scope,
    pub is_static: bool,
    pub return_type: Option<String>,
    pub is_abstract: bool,
    pub is_final: bool,
}

impl MethodDecl {
    /// A public, non-static method with no parameters and an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        MethodDecl {
            name: name.into(),
            parameters: OrderedMap::new(),
            body: String::new(),
            scope: Scope::Public,
            is_static: false,
            return_type: None,
            is_abstract: false,
            is_final: false,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn with_return_type(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Append a parameter. Fails if one with the same name exists.
    pub fn add_parameter(&mut self, param: TypedVar) -> Result<(), ClassFileError> {
        let name = param.name.clone();
        self.parameters
            .insert(name, param)
            .map_err(|dup| ClassFileError::DuplicateParameter {
                method: self.name.clone(),
                name: dup.0,
            })
    }

    /// Remove a parameter by name, returning it.
    pub fn remove_parameter(&mut self, name: &str) -> Option<TypedVar> {
        self.parameters.remove(name)
    }

    pub fn parameter(&self, name: &str) -> Option<&TypedVar> {
        self.parameters.get(name)
    }

    pub fn parameter_mut(&mut self, name: &str) -> Option<&mut TypedVar> {
        self.parameters.get_mut(name)
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &OrderedMap<TypedVar> {
        &self.parameters
    }

    /// Returns `true` when the method has no body (`function f();`).
    pub fn is_declaration_only(&self) -> bool {
        self.body.is_empty()
    }
}
