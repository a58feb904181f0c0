//! The class body: four ordered member sections.

use crate::{
    ClassFileError, ConstantDecl, Element, Member, MemberKind, MethodDecl, OrderedMap, TypedVar,
};

/// Members of a class body, grouped by kind, each group in declaration order.
///
/// Keys are member names: the constant name, the property name with its `$`,
/// the method name, the trait name. Renaming a payload in place does not
/// re-key it; remove and re-add instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassContentStructure {
    constants: OrderedMap<Element<ConstantDecl>>,
    properties: OrderedMap<Element<TypedVar>>,
    methods: OrderedMap<Element<MethodDecl>>,
    traits: OrderedMap<Element<String>>,
    /// Comments between the last member and the closing `}`.
    pub closing_comment: Option<String>,
}

fn duplicate(kind: MemberKind, name: String) -> ClassFileError {
    ClassFileError::DuplicateMember { kind, name }
}

impl ClassContentStructure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_constant(&mut self, constant: Element<ConstantDecl>) -> Result<(), ClassFileError> {
        let name = constant.payload.name.clone();
        self.constants
            .insert(name, constant)
            .map_err(|dup| duplicate(MemberKind::Constant, dup.0))
    }

    pub fn add_property(&mut self, property: Element<TypedVar>) -> Result<(), ClassFileError> {
        let name = property.payload.name.clone();
        self.properties
            .insert(name, property)
            .map_err(|dup| duplicate(MemberKind::Property, dup.0))
    }

    pub fn add_method(&mut self, method: Element<MethodDecl>) -> Result<(), ClassFileError> {
        let name = method.payload.name.clone();
        self.methods
            .insert(name, method)
            .map_err(|dup| duplicate(MemberKind::Method, dup.0))
    }

    pub fn add_trait(&mut self, trait_use: Element<String>) -> Result<(), ClassFileError> {
        let name = trait_use.payload.clone();
        self.traits
            .insert(name, trait_use)
            .map_err(|dup| duplicate(MemberKind::TraitUse, dup.0))
    }

    /// Add a member to the section matching its kind.
    pub fn add(&mut self, member: Member) -> Result<(), ClassFileError> {
        match member {
            Member::Constant(c) => self.add_constant(c),
            Member::Property(p) => self.add_property(p),
            Member::Method(m) => self.add_method(m),
            Member::TraitUse(t) => self.add_trait(t),
        }
    }

    pub fn remove_constant(&mut self, name: &str) -> Option<Element<ConstantDecl>> {
        self.constants.remove(name)
    }

    pub fn remove_property(&mut self, name: &str) -> Option<Element<TypedVar>> {
        self.properties.remove(name)
    }

    pub fn remove_method(&mut self, name: &str) -> Option<Element<MethodDecl>> {
        self.methods.remove(name)
    }

    pub fn remove_trait(&mut self, name: &str) -> Option<Element<String>> {
        self.traits.remove(name)
    }

    pub fn constants(&self) -> &OrderedMap<Element<ConstantDecl>> {
        &self.constants
    }

    pub fn properties(&self) -> &OrderedMap<Element<TypedVar>> {
        &self.properties
    }

    pub fn methods(&self) -> &OrderedMap<Element<MethodDecl>> {
        &self.methods
    }

    pub fn traits(&self) -> &OrderedMap<Element<String>> {
        &self.traits
    }

    pub fn constant(&self, name: &str) -> Option<&Element<ConstantDecl>> {
        self.constants.get(name)
    }

    pub fn property(&self, name: &str) -> Option<&Element<TypedVar>> {
        self.properties.get(name)
    }

    pub fn method(&self, name: &str) -> Option<&Element<MethodDecl>> {
        self.methods.get(name)
    }

    pub fn constant_mut(&mut self, name: &str) -> Option<&mut Element<ConstantDecl>> {
        self.constants.get_mut(name)
    }

    pub fn property_mut(&mut self, name: &str) -> Option<&mut Element<TypedVar>> {
        self.properties.get_mut(name)
    }

    pub fn method_mut(&mut self, name: &str) -> Option<&mut Element<MethodDecl>> {
        self.methods.get_mut(name)
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.contains_key(name)
    }

    /// Total number of members across all sections.
    pub fn len(&self) -> usize {
        self.constants.len() + self.properties.len() + self.methods.len() + self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests;
