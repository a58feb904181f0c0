//! Class body parsing.
//!
//! The body loop alternates between skipping comments and parsing one member.
//! Which parser runs is decided by [`RECOGNIZERS`], an ordered list of pure
//! predicates over the remaining text; the first that matches wins.
//!
//! # Module Structure
//!
//! - `property.rs`: `[static] [scope] [type] $name [= value];`
//! - `constant.rs`: `[scope] const NAME = value;`
//! - `method.rs`: modifiers, `function name(params)[: type]`, body or `;`;
//!   a comment before the body becomes the method's trailing comment
//! - `params.rs`: a single parameter from a parameter list
//! - `trait_use.rs`: `use Name;`

mod constant;
mod method;
mod params;
mod property;
mod trait_use;

use cm_ir::{ClassContentStructure, ClassFileError, Element, Member, MemberKind, Scope};
use cm_scan::Cursor;
use tracing::trace;

use crate::parser::Parser;

type Recognizer = fn(&str) -> bool;

/// Member recognizers in priority order.
const RECOGNIZERS: [(MemberKind, Recognizer); 4] = [
    (MemberKind::Property, property::recognize),
    (MemberKind::Constant, constant::recognize),
    (MemberKind::Method, method::recognize),
    (MemberKind::TraitUse, trait_use::recognize),
];

/// Which member kind the text at the start of `rest` declares, if any.
pub(crate) fn classify(rest: &str) -> Option<MemberKind> {
    RECOGNIZERS
        .iter()
        .find(|(_, recognize)| recognize(rest))
        .map(|(kind, _)| *kind)
}

impl Parser<'_> {
    /// Parse members until the `}` closing the class body.
    ///
    /// Text after the closing brace is ignored.
    pub(crate) fn parse_body(&mut self, content: &mut ClassContentStructure) -> Result<(), ClassFileError> {
        loop {
            let comment = self.skip_comments()?;
            if self.is_eof() {
                return Err(self.error_here("expected `}` to close class body"));
            }
            if self.current() == b'}' {
                content.closing_comment = comment;
                self.set_pos(self.pos() + 1);
                return Ok(());
            }
            let member = self.parse_member(comment)?;
            content.add(member)?;
        }
    }

    /// Classify and parse one member at the current position.
    pub(crate) fn parse_member(&mut self, comment_before: Option<String>) -> Result<Member, ClassFileError> {
        let start = self.pos();
        let Some(kind) = classify(self.cursor().rest()) else {
            return Err(self.error_here("unexpected content in class body"));
        };

        let member = match kind {
            MemberKind::Property => {
                let property = self.parse_property()?;
                Member::Property(self.element(property, comment_before))
            }
            MemberKind::Constant => {
                let constant = self.parse_constant()?;
                Member::Constant(self.element(constant, comment_before))
            }
            MemberKind::Method => {
                let (method, signature_comment) = self.parse_method()?;
                let mut element = self.element(method, comment_before);
                let after_body = element.trailing_comment.take();
                element.trailing_comment = match (signature_comment, after_body) {
                    (Some(signature), Some(after)) => Some(format!("{signature} {after}")),
                    (signature, after) => signature.or(after),
                };
                Member::Method(element)
            }
            MemberKind::TraitUse => {
                let name = self.parse_trait_use()?;
                Member::TraitUse(self.element(name, comment_before))
            }
        };

        trace!(kind = %member.kind(), name = member.name(), start, "member");
        Ok(member)
    }

    /// Wrap a parsed payload, picking up the comment on the rest of its line.
    fn element<T>(&mut self, payload: T, comment_before: Option<String>) -> Element<T> {
        Element {
            comment_before,
            trailing_comment: self.trailing_comment(),
            payload,
        }
    }
}

/// Member modifiers, in any order, each at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Modifiers {
    pub scope: Option<Scope>,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
}

/// Which modifier keywords a member accepts.
#[derive(Clone, Copy)]
pub(crate) struct Allowed {
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
}

impl Allowed {
    pub(crate) const SCOPE_ONLY: Allowed = Allowed {
        is_static: false,
        is_abstract: false,
        is_final: false,
    };
    pub(crate) const PROPERTY: Allowed = Allowed {
        is_static: true,
        is_abstract: false,
        is_final: false,
    };
    pub(crate) const METHOD: Allowed = Allowed {
        is_static: true,
        is_abstract: true,
        is_final: true,
    };
}

/// Consume modifier keywords and the whitespace after each.
///
/// Stops at the first word that is not an allowed, not-yet-seen modifier.
pub(crate) fn eat_modifiers(cursor: &mut Cursor<'_>, allowed: Allowed) -> Modifiers {
    let mut mods = Modifiers::default();
    loop {
        if mods.scope.is_none() {
            if let Some(scope) = Scope::ALL.into_iter().find(|s| cursor.check_keyword(s.as_str())) {
                cursor.eat_keyword(scope.as_str());
                mods.scope = Some(scope);
                cursor.eat_blank();
                continue;
            }
        }
        if allowed.is_static && !mods.is_static && cursor.eat_keyword("static") {
            mods.is_static = true;
        } else if allowed.is_abstract && !mods.is_abstract && cursor.eat_keyword("abstract") {
            mods.is_abstract = true;
        } else if allowed.is_final && !mods.is_final && cursor.eat_keyword("final") {
            mods.is_final = true;
        } else {
            return mods;
        }
        cursor.eat_blank();
    }
}
