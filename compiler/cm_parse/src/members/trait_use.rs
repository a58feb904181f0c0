//! Trait use declarations inside the class body.

use cm_ir::ClassFileError;
use cm_scan::{find_terminator, Cursor};

use crate::parser::Parser;

pub(super) fn recognize(rest: &str) -> bool {
    Cursor::new(rest).check_keyword("use")
}

impl Parser<'_> {
    /// `use Name;` or `use A, B;`. Returns the text between `use` and `;`.
    pub(super) fn parse_trait_use(&mut self) -> Result<String, ClassFileError> {
        let mut cursor = self.cursor();
        cursor.eat_keyword("use");
        let start = cursor.pos();

        let semi = find_terminator(self.source(), start, b';', false)
            .map_err(|e| self.scan_error(e))?;
        let name = cursor.slice(start, semi).trim();
        if name.is_empty() {
            return Err(self.error_at(start, "expected trait name"));
        }
        if name.contains('{') {
            return Err(self.error_at(start, "trait adaptation blocks are not supported"));
        }
        let name = name.to_owned();
        cursor.seek(semi + 1);
        self.commit(cursor);
        Ok(name)
    }
}
