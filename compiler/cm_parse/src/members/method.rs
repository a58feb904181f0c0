//! Method declarations.

use cm_ir::{ClassFileError, MethodDecl};
use cm_scan::{
    comment_text, find_matching_close, skip_comments_and_whitespace, split_top_level, Cursor,
};
use tracing::trace;

use super::{eat_modifiers, Allowed};
use crate::parser::Parser;

pub(super) fn recognize(rest: &str) -> bool {
    let mut cursor = Cursor::new(rest);
    eat_modifiers(&mut cursor, Allowed::METHOD);
    cursor.check_keyword("function")
}

impl Parser<'_> {
    /// Parse a method declaration. Also returns the comment found between
    /// the parameter list and the body, flattened to one line.
    pub(super) fn parse_method(&mut self) -> Result<(MethodDecl, Option<String>), ClassFileError> {
        let mut cursor = self.cursor();
        let mods = eat_modifiers(&mut cursor, Allowed::METHOD);
        cursor.eat_keyword("function");
        cursor.eat_blank();

        let name = cursor.eat_ident();
        if name.is_empty() {
            return Err(self.error_at(cursor.pos(), "expected method name"));
        }
        let mut method = MethodDecl::new(name);
        method.scope = mods.scope.unwrap_or_default();
        method.is_static = mods.is_static;
        method.is_abstract = mods.is_abstract;
        method.is_final = mods.is_final;

        cursor.eat_blank();
        if cursor.current() != b'(' {
            return Err(self.error_at(cursor.pos(), "expected `(` after method name"));
        }
        let open = cursor.pos();
        let close = find_matching_close(self.source(), open).map_err(|e| self.scan_error(e))?;

        let segments =
            split_top_level(self.source(), open + 1, close).map_err(|e| self.scan_error(e))?;
        let mut offset = open + 1;
        for segment in segments {
            if let Some(param) = self.parse_parameter(segment, offset)? {
                method.add_parameter(param)?;
            }
            offset += segment.len() + 1;
        }

        // Comments between `)` and the body belong to the signature line.
        let mut comments = String::new();
        cursor.seek(close + 1);
        self.skip_signature_comments(&mut cursor, &mut comments)?;
        if cursor.eat_str(":") {
            self.skip_signature_comments(&mut cursor, &mut comments)?;
            let start = cursor.pos();
            cursor.eat_while(|b| b != b'{' && b != b';' && b != b'/');
            let ty = cursor.slice_from(start).trim();
            if ty.is_empty() {
                return Err(self.error_at(start, "expected return type"));
            }
            method.return_type = Some(ty.to_owned());
            self.skip_signature_comments(&mut cursor, &mut comments)?;
        }

        match cursor.current() {
            b'{' => {
                let open = cursor.pos();
                let end = find_matching_close(self.source(), open).map_err(|e| self.scan_error(e))?;
                method.body = cursor.slice(open, end + 1).to_owned();
                cursor.seek(end + 1);
            }
            b';' => cursor.advance(),
            _ => {
                return Err(self.error_at(cursor.pos(), "expected method body or `;`"));
            }
        }
        self.commit(cursor);

        trace!(
            method = %method.name,
            params = method.parameters().len(),
            declaration_only = method.is_declaration_only(),
            "method"
        );
        let signature_comment =
            comment_text(&comments).map(|text| text.trim().replace(['\n', '\r'], " "));
        Ok((method, signature_comment))
    }

    fn skip_signature_comments(
        &self,
        cursor: &mut Cursor<'_>,
        comments: &mut String,
    ) -> Result<(), ClassFileError> {
        let (pos, text) = skip_comments_and_whitespace(self.source(), cursor.pos())
            .map_err(|e| self.scan_error(e))?;
        cursor.seek(pos);
        comments.push_str(&text);
        Ok(())
    }
}
