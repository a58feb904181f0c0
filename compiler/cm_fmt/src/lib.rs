//! Class File Generator
//!
//! Regenerates source text from a [`ClassFile`] model.
//!
//! # Architecture
//!
//! Generation is a single deterministic pass: [`ClassFormatter`] walks the
//! model and writes through an [`Emitter`]. Everything below the member level
//! (initializers, method bodies) is written verbatim, so edits to the model
//! never reformat code the user wrote.
//!
//! # Modules
//!
//! - [`emitter`]: Output abstraction and indentation
//! - `comments`: Leading and trailing comment rendering
//! - `class`: The class file formatter
//!
//! Generating, parsing and generating again yields the same text.

mod class;
mod comments;
pub mod emitter;

pub use class::ClassFormatter;
pub use emitter::{Emitter, StringEmitter, INDENT_WIDTH};

use cm_ir::ClassFile;

/// Generate source text for `file`.
pub fn generate(file: &ClassFile) -> String {
    let mut emitter = StringEmitter::with_capacity(file.raw_source.len().max(256));
    generate_into(file, &mut emitter);
    emitter.output()
}

/// Generate source text for `file` into any emitter.
pub fn generate_into<E: Emitter>(file: &ClassFile, emitter: &mut E) {
    ClassFormatter::new(emitter).format(file);
}
