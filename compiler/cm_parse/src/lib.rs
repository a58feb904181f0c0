//! Recursive descent parser for class files.
//!
//! Turns source text into a [`ClassFile`] model. The parser works directly
//! on the text with the `cm_scan` primitives; there is no token stream.
//!
//! # Structure
//!
//! - `parser`: parser state, comment handling, error construction
//! - `header`: open tag, namespace, imports, class signature and clauses
//! - `members`: class body loop, member recognizers and member parsers
//!
//! Parsing stops at the first error. No partial model is returned.

mod header;
mod members;
mod parser;

use cm_ir::{ClassFile, ClassFileError, Member};

use crate::parser::Parser;

/// Parse a complete class file.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn parse(text: &str) -> Result<ClassFile, ClassFileError> {
    let mut parser = Parser::new(text);
    let mut file = parser.parse_header()?;
    parser.parse_body(&mut file.content)?;
    file.raw_source = text.to_owned();

    tracing::debug!(
        class = %file.fully_qualified_name(),
        members = file.content.len(),
        "parsed class file"
    );
    Ok(file)
}

/// Parse a single class body member, such as a method snippet to add to an
/// existing model.
///
/// Leading comments attach to the member. Anything after the member other
/// than whitespace and comments is an error.
pub fn parse_member(text: &str) -> Result<Member, ClassFileError> {
    let mut parser = Parser::new(text);
    let comment = parser.skip_comments()?;
    let member = parser.parse_member(comment)?;
    parser.skip_comments()?;
    if !parser.is_eof() {
        return Err(parser.error_here("unexpected content after member"));
    }
    Ok(member)
}

#[cfg(test)]
mod tests;
