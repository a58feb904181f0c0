//! Method parameters.
//!
//! A parameter is `[scope] [type] [&][...]$name [= default]`. The `&` and
//! `...` markers stay on the name. Comments inside a parameter list are not
//! kept.

use cm_ir::{ClassFileError, Scope, TypedVar, MIXED};
use cm_scan::{strip_comments, Cursor};

use crate::parser::{eat_type, Parser};

impl Parser<'_> {
    /// Parse one comma-separated segment of a parameter list. `offset` is
    /// where the segment starts in the source, for error positions.
    ///
    /// Comments are dropped. A segment holding nothing else, like the one
    /// after a trailing comma, yields `None`.
    pub(super) fn parse_parameter(
        &self,
        segment: &str,
        offset: usize,
    ) -> Result<Option<TypedVar>, ClassFileError> {
        let code = strip_comments(segment)
            .map_err(|e| self.error_at(offset + e.offset, e.kind.to_string()))?;
        if code.trim().is_empty() {
            return Ok(None);
        }
        parameter(&code).map(Some).ok_or_else(|| {
            let leading = code.len() - code.trim_start().len();
            self.error_at(
                offset + leading,
                format!("malformed parameter `{}`", code.trim()),
            )
        })
    }
}

fn parameter(segment: &str) -> Option<TypedVar> {
    let mut cursor = Cursor::new(segment);
    cursor.eat_blank();

    let scope = Scope::ALL
        .into_iter()
        .find(|s| cursor.check_keyword(s.as_str()));
    if let Some(scope) = scope {
        cursor.eat_keyword(scope.as_str());
        cursor.eat_blank();
    }

    let ty = eat_type(&mut cursor);
    cursor.eat_blank();

    let mut name = String::new();
    if cursor.eat_str("&") {
        name.push('&');
        cursor.eat_blank();
    }
    if cursor.eat_str("...") {
        name.push_str("...");
    }
    if !cursor.eat_str("$") {
        return None;
    }
    let ident = cursor.eat_ident();
    if ident.is_empty() {
        return None;
    }
    name.push('$');
    name.push_str(ident);
    cursor.eat_blank();

    let default_value = if cursor.eat_str("=") {
        let value = cursor.rest().trim();
        if value.is_empty() {
            return None;
        }
        Some(value.to_owned())
    } else if cursor.is_eof() {
        None
    } else {
        return None;
    };

    Some(TypedVar {
        name,
        ty: if ty.is_empty() { MIXED.to_owned() } else { ty.to_owned() },
        default_value,
        scope,
        is_static: false,
    })
}
