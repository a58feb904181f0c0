//! Class File Model
//!
//! The structured, mutable representation of a parsed class file:
//! - [`Element`]: a payload with its leading and trailing comments
//! - [`ClassFile`]: namespace, imports, class header and body
//! - [`ClassContentStructure`]: constants, properties, trait uses and methods
//! - [`OrderedMap`]: insertion-ordered, insert-or-fail storage for members
//! - [`ClassFileError`]: every failure the parser and model can report
//!
//! # Design Philosophy
//!
//! - **Owned Text**: names, types, values and bodies are owned `String`s
//!   copied out of the source, so a model outlives the text it came from.
//! - **Opaque Expressions**: initializers and method bodies are stored
//!   verbatim; nothing below the member level is parsed.
//! - **Single Entry Point**: members and parameters are only added through
//!   insert-or-fail operations, so names stay unique.

mod class_file;
mod class_signature;
mod constant;
mod content;
mod element;
mod error;
mod member;
mod method;
mod ordered;
mod scope;
mod typed_var;

pub use class_file::ClassFile;
pub use class_signature::{ClassKind, ClassSignature};
pub use constant::ConstantDecl;
pub use content::ClassContentStructure;
pub use element::Element;
pub use error::ClassFileError;
pub use member::{Member, MemberKind};
pub use method::MethodDecl;
pub use ordered::{DuplicateKey, OrderedMap};
pub use scope::Scope;
pub use typed_var::{TypedVar, MIXED};
