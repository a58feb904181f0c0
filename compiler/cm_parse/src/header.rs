//! File header parsing: everything before the class body.
//!
//! The header is read in a fixed order: open tag, namespace, imports, class
//! signature, `extends`, `implements`, then the `{` opening the body. Each
//! step either advances or fails with a syntax error naming what it expected.

use cm_ir::{ClassFile, ClassFileError, ClassKind, ClassSignature, Element};
use cm_scan::find_terminator;
use tracing::{debug, trace};

use crate::parser::{eat_qualified_name, Parser};

const OPEN_TAG: &str = "<?php";

/// Comments collected while reading the class header.
#[derive(Default)]
struct HeaderComments {
    before_class: Vec<String>,
    trailing: Option<String>,
}

impl HeaderComments {
    fn push(&mut self, comment: Option<String>) {
        if let Some(comment) = comment {
            self.before_class.push(comment);
        }
    }

    fn trail(&mut self, comment: Option<String>) {
        if self.trailing.is_none() {
            self.trailing = comment;
        }
    }

    fn joined(&self) -> Option<String> {
        if self.before_class.is_empty() {
            None
        } else {
            Some(self.before_class.join("\n"))
        }
    }
}

impl Parser<'_> {
    /// Parse from the open tag through the `{` opening the class body.
    pub(crate) fn parse_header(&mut self) -> Result<ClassFile, ClassFileError> {
        self.expect_open_tag()?;
        let namespace = self.parse_namespace()?;
        debug!(namespace = %namespace.payload, "namespace");

        let (imports, pending) = self.parse_imports()?;
        debug!(count = imports.len(), "imports");

        let mut comments = HeaderComments::default();
        comments.push(pending);

        let signature = self.parse_class_signature()?;
        debug!(class = %signature.name, kind = ?signature.kind, "class signature");
        comments.trail(self.trailing_comment());

        let mut header_comment = self.skip_comments()?;
        let extends = if self.cursor().check_keyword("extends") {
            let extends = self.parse_extends(header_comment.take())?;
            header_comment = self.skip_comments()?;
            Some(extends)
        } else {
            None
        };

        let implements = if self.cursor().check_keyword("implements") {
            comments.push(header_comment.take());
            self.parse_implements(&mut comments)?
        } else {
            Vec::new()
        };
        comments.push(header_comment);

        if self.current() != b'{' {
            return Err(self.error_here("expected `{` to open class body"));
        }
        self.set_pos(self.pos() + 1);
        comments.trail(self.trailing_comment());

        Ok(ClassFile {
            raw_source: String::new(),
            namespace,
            imports,
            class_signature: Element {
                comment_before: comments.joined(),
                trailing_comment: comments.trailing,
                payload: signature,
            },
            extends,
            implements,
            content: cm_ir::ClassContentStructure::new(),
        })
    }

    fn expect_open_tag(&mut self) -> Result<(), ClassFileError> {
        let Some(start) = self.source().find(OPEN_TAG) else {
            return Err(ClassFileError::NotAClassFile);
        };
        self.set_pos(start + OPEN_TAG.len());
        Ok(())
    }

    /// Statements between the open tag and `namespace` (such as `declare`)
    /// are skipped; comments anywhere before the keyword attach to the
    /// namespace.
    fn parse_namespace(&mut self) -> Result<Element<String>, ClassFileError> {
        let mut leading = Vec::new();
        loop {
            leading.extend(self.skip_comments()?);
            if self.cursor().check_keyword("namespace") {
                break;
            }
            if self.is_eof() {
                return Err(self.error_here("expected `namespace` declaration"));
            }
            let semi = find_terminator(self.source(), self.pos(), b';', true)
                .map_err(|_| self.error_here("expected `namespace` declaration"))?;
            trace!(skipped = %&self.source()[self.pos()..semi], "statement before namespace");
            self.set_pos(semi + 1);
        }

        self.set_pos(self.pos() + "namespace".len());
        let name = self.statement_text("namespace name")?;
        let trailing_comment = self.trailing_comment();

        Ok(Element {
            comment_before: if leading.is_empty() {
                None
            } else {
                Some(leading.join("\n"))
            },
            trailing_comment,
            payload: name,
        })
    }

    /// Read `use` imports. Returns them with the comment that followed the
    /// last one, which belongs to the class signature.
    fn parse_imports(&mut self) -> Result<(Vec<Element<String>>, Option<String>), ClassFileError> {
        let mut imports = Vec::new();
        loop {
            let comment_before = self.skip_comments()?;
            if !self.cursor().check_keyword("use") {
                return Ok((imports, comment_before));
            }
            self.set_pos(self.pos() + "use".len());
            let name = self.statement_text("import name")?;
            trace!(import = %name, "import");
            imports.push(Element {
                comment_before,
                trailing_comment: self.trailing_comment(),
                payload: name,
            });
        }
    }

    /// Text up to the next `;`, trimmed. Leaves the parser after the `;`.
    fn statement_text(&mut self, what: &str) -> Result<String, ClassFileError> {
        let semi = find_terminator(self.source(), self.pos(), b';', false)
            .map_err(|e| self.scan_error(e))?;
        let text = self.source()[self.pos()..semi].trim();
        if text.is_empty() {
            return Err(self.error_here(format!("expected {what}")));
        }
        let text = text.to_owned();
        self.set_pos(semi + 1);
        Ok(text)
    }

    /// `final class Name`, `abstract class Name` or `class Name`.
    fn parse_class_signature(&mut self) -> Result<ClassSignature, ClassFileError> {
        let mut cursor = self.cursor();
        let kind = if cursor.eat_keyword("final") {
            ClassKind::Final
        } else if cursor.eat_keyword("abstract") {
            ClassKind::Abstract
        } else {
            ClassKind::Normal
        };
        cursor.eat_blank();
        if !cursor.eat_keyword("class") {
            return Err(self.error_at(cursor.pos(), "expected `class` declaration"));
        }
        cursor.eat_blank();

        let name = cursor.eat_ident();
        if name.is_empty() {
            return Err(self.error_at(cursor.pos(), "expected class name"));
        }
        self.commit(cursor);
        Ok(ClassSignature {
            name: name.to_owned(),
            kind,
        })
    }

    fn parse_extends(&mut self, comment_before: Option<String>) -> Result<Element<String>, ClassFileError> {
        self.set_pos(self.pos() + "extends".len());
        let comment_before = match (comment_before, self.skip_comments()?) {
            (Some(before), Some(after)) => Some(format!("{before}\n{after}")),
            (before, after) => before.or(after),
        };

        let mut cursor = self.cursor();
        let parent = eat_qualified_name(&mut cursor);
        if parent.is_empty() {
            return Err(self.error_at(cursor.pos(), "expected parent class name"));
        }
        self.commit(cursor);
        trace!(parent, "extends");

        Ok(Element {
            comment_before,
            trailing_comment: self.trailing_comment(),
            payload: parent.to_owned(),
        })
    }

    /// `implements A, B, C`. Comments between names go to the class.
    fn parse_implements(&mut self, comments: &mut HeaderComments) -> Result<Vec<String>, ClassFileError> {
        self.set_pos(self.pos() + "implements".len());
        let mut interfaces = Vec::new();
        loop {
            comments.push(self.skip_comments()?);
            let mut cursor = self.cursor();
            let name = eat_qualified_name(&mut cursor);
            if name.is_empty() {
                return Err(self.error_here("expected interface name"));
            }
            self.commit(cursor);
            interfaces.push(name.to_owned());

            comments.trail(self.trailing_comment());
            comments.push(self.skip_comments()?);
            if self.current() == b',' {
                self.set_pos(self.pos() + 1);
                comments.trail(self.trailing_comment());
            } else {
                trace!(?interfaces, "implements");
                return Ok(interfaces);
            }
        }
    }
}
