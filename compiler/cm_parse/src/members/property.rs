//! Property declarations.

use cm_ir::{ClassFileError, TypedVar, MIXED};
use cm_scan::{find_terminator, Cursor};

use super::{eat_modifiers, Allowed};
use crate::parser::{eat_type, Parser};

/// Words that can sit where a property type would but are not types.
const NOT_A_TYPE: [&str; 8] = [
    "function", "const", "use", "abstract", "final", "static", "var", "readonly",
];

/// Modifiers, optional type, then `$`.
pub(super) fn recognize(rest: &str) -> bool {
    let mut cursor = Cursor::new(rest);
    eat_modifiers(&mut cursor, Allowed::PROPERTY);
    let ty = eat_type(&mut cursor);
    if NOT_A_TYPE.contains(&ty) {
        return false;
    }
    cursor.eat_blank();
    cursor.current() == b'$'
}

impl Parser<'_> {
    pub(super) fn parse_property(&mut self) -> Result<TypedVar, ClassFileError> {
        let mut cursor = self.cursor();
        let mods = eat_modifiers(&mut cursor, Allowed::PROPERTY);
        let ty = eat_type(&mut cursor);
        cursor.eat_blank();

        if !cursor.eat_str("$") {
            return Err(self.error_at(cursor.pos(), "expected property name"));
        }
        let ident = cursor.eat_ident();
        if ident.is_empty() {
            return Err(self.error_at(cursor.pos(), "expected property name"));
        }
        let name = format!("${ident}");
        cursor.eat_blank();

        let default_value = match cursor.current() {
            b'=' => {
                cursor.advance();
                let semi = find_terminator(self.source(), cursor.pos(), b';', true)
                    .map_err(|e| self.scan_error(e))?;
                let value = cursor.slice(cursor.pos(), semi).trim();
                if value.is_empty() {
                    return Err(self.error_at(cursor.pos(), "expected default value"));
                }
                cursor.seek(semi + 1);
                Some(value.to_owned())
            }
            b';' => {
                cursor.advance();
                None
            }
            _ => return Err(self.error_at(cursor.pos(), "expected `;` after property")),
        };
        self.commit(cursor);

        Ok(TypedVar {
            name,
            ty: if ty.is_empty() { MIXED.to_owned() } else { ty.to_owned() },
            default_value,
            scope: Some(mods.scope.unwrap_or_default()),
            is_static: mods.is_static,
        })
    }
}
