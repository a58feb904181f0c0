//! Class body members as a tagged union.

use std::fmt;

use crate::{ConstantDecl, Element, MethodDecl, TypedVar};

/// Which section of the class body a member belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Constant,
    Property,
    Method,
    TraitUse,
}

impl MemberKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberKind::Constant => "constant",
            MemberKind::Property => "property",
            MemberKind::Method => "method",
            MemberKind::TraitUse => "trait use",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed class body member, with its comments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Member {
    Constant(Element<ConstantDecl>),
    Property(Element<TypedVar>),
    Method(Element<MethodDecl>),
    /// The payload is the used trait's (possibly qualified) name.
    TraitUse(Element<String>),
}

impl Member {
    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Constant(_) => MemberKind::Constant,
            Member::Property(_) => MemberKind::Property,
            Member::Method(_) => MemberKind::Method,
            Member::TraitUse(_) => MemberKind::TraitUse,
        }
    }

    /// The key the member is stored under in its section.
    pub fn name(&self) -> &str {
        match self {
            Member::Constant(c) => &c.payload.name,
            Member::Property(p) => &p.payload.name,
            Member::Method(m) => &m.payload.name,
            Member::TraitUse(t) => &t.payload,
        }
    }

    pub fn comment_before(&self) -> Option<&str> {
        match self {
            Member::Constant(c) => c.comment_before.as_deref(),
            Member::Property(p) => p.comment_before.as_deref(),
            Member::Method(m) => m.comment_before.as_deref(),
            Member::TraitUse(t) => t.comment_before.as_deref(),
        }
    }
}
