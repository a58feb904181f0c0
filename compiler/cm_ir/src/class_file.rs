//! The whole-file model.

use crate::{ClassContentStructure, ClassSignature, Element};

/// A parsed class file.
///
/// `raw_source` keeps the text the model was parsed from; the generator
/// never reads it. All other fields are freely mutable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassFile {
    pub raw_source: String,
    /// Namespace name without the keyword or `;`.
    pub namespace: Element<String>,
    /// `use` imports in source order. Duplicates are kept.
    pub imports: Vec<Element<String>>,
    pub class_signature: Element<ClassSignature>,
    pub extends: Option<Element<String>>,
    pub implements: Vec<String>,
    pub content: ClassContentStructure,
}

impl ClassFile {
    /// An empty class `name` in `namespace`.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        ClassFile {
            namespace: Element::new(namespace.into()),
            class_signature: Element::new(ClassSignature::new(name)),
            ..ClassFile::default()
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_signature.payload.name
    }

    /// `Namespace\ClassName`.
    pub fn fully_qualified_name(&self) -> String {
        let namespace = self.namespace.payload.trim_matches('\\');
        if namespace.is_empty() {
            self.class_name().to_owned()
        } else {
            format!("{namespace}\\{}", self.class_name())
        }
    }

    /// Parent class name, if any.
    pub fn parent(&self) -> Option<&str> {
        self.extends.as_ref().map(|e| e.payload.as_str())
    }

    pub fn set_extends(&mut self, parent: Option<String>) {
        self.extends = parent.map(Element::new);
    }

    pub fn add_import(&mut self, import: impl Into<String>) {
        self.imports.push(Element::new(import.into()));
    }

    pub fn has_import(&self, import: &str) -> bool {
        self.imports.iter().any(|i| i.payload == import)
    }

    pub fn implements_interface(&self, interface: &str) -> bool {
        self.implements.iter().any(|i| i == interface)
    }
}
