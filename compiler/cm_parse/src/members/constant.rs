//! Class constant declarations.

use cm_ir::{ClassFileError, ConstantDecl};
use cm_scan::{find_terminator, Cursor};

use super::{eat_modifiers, Allowed};
use crate::parser::Parser;

pub(super) fn recognize(rest: &str) -> bool {
    let mut cursor = Cursor::new(rest);
    eat_modifiers(&mut cursor, Allowed::SCOPE_ONLY);
    cursor.check_keyword("const")
}

impl Parser<'_> {
    pub(super) fn parse_constant(&mut self) -> Result<ConstantDecl, ClassFileError> {
        let mut cursor = self.cursor();
        let mods = eat_modifiers(&mut cursor, Allowed::SCOPE_ONLY);
        cursor.eat_keyword("const");
        cursor.eat_blank();

        let name = cursor.eat_ident();
        if name.is_empty() {
            return Err(self.error_at(cursor.pos(), "expected constant name"));
        }
        cursor.eat_blank();
        if !cursor.eat_str("=") {
            return Err(self.error_at(cursor.pos(), "expected `=` after constant name"));
        }

        let semi = find_terminator(self.source(), cursor.pos(), b';', true)
            .map_err(|e| self.scan_error(e))?;
        let value = cursor.slice(cursor.pos(), semi).trim();
        if value.is_empty() {
            return Err(self.error_at(cursor.pos(), "expected constant value"));
        }
        let value = value.to_owned();
        cursor.seek(semi + 1);
        self.commit(cursor);

        Ok(ConstantDecl {
            name: name.to_owned(),
            value,
            scope: mods.scope.unwrap_or_default(),
        })
    }
}
