//! Class File Formatter
//!
//! Walks a [`ClassFile`] in a single pass and writes canonical source.
//!
//! # Layout
//!
//! ```text
//! <?php
//!
//! /* file comment */
//!
//! namespace App;
//!
//! use Foo\Bar;
//!
//! final class Name extends Base implements A, B
//! {
//!
//!     public const X = 1;
//!     public int $y = 0;
//!     use Helpers;
//!
//!     public function run (
//!         int $z
//!     ): void {}
//!
//! }
//! ```
//!
//! Body sections come in a fixed order: constants, properties, trait uses,
//! methods. A blank line precedes every method and every commented member.
//! The opening brace is followed by a blank line, the closing brace is
//! preceded by one, and the file ends at the closing brace with no newline.

use cm_ir::{ClassFile, ConstantDecl, Element, MethodDecl, TypedVar};

use crate::comments::{emit_leading, emit_trailing, has_text, join};
use crate::emitter::Emitter;

/// Formatter writing one class file to an [`Emitter`].
pub struct ClassFormatter<'e, E: Emitter> {
    out: &'e mut E,
}

impl<'e, E: Emitter> ClassFormatter<'e, E> {
    pub fn new(out: &'e mut E) -> Self {
        ClassFormatter { out }
    }

    /// Write the whole file.
    pub fn format(&mut self, file: &ClassFile) {
        self.out.emit("<?php");
        self.out.emit_newline();
        self.out.emit_newline();

        self.format_namespace(&file.namespace);
        for import in &file.imports {
            self.format_import(import);
        }
        self.out.emit_newline();

        self.format_class_header(file);
        self.out.emit("{");
        self.out.emit_newline();
        self.out.emit_newline();
        self.format_body(file);
        self.out.emit("}");
    }

    fn format_namespace(&mut self, namespace: &Element<String>) {
        if let Some(comment) = &namespace.comment_before {
            emit_leading(self.out, comment, 0);
        }
        self.out.emit_newline();
        self.out.emit("namespace ");
        self.out.emit(&namespace.payload);
        self.out.emit(";");
        emit_trailing(self.out, namespace.trailing_comment.as_deref());
        self.out.emit_newline();
        self.out.emit_newline();
    }

    fn format_import(&mut self, import: &Element<String>) {
        if let Some(comment) = &import.comment_before {
            emit_leading(self.out, comment, 0);
        }
        self.out.emit("use ");
        self.out.emit(&import.payload);
        self.out.emit(";");
        emit_trailing(self.out, import.trailing_comment.as_deref());
        self.out.emit_newline();
    }

    /// Comments on the `extends` clause are folded into the class comments,
    /// since the clause shares the class's line.
    fn format_class_header(&mut self, file: &ClassFile) {
        let signature = &file.class_signature;
        let extends = file.extends.as_ref();

        let comment = join([
            signature.comment_before.as_deref(),
            extends.and_then(|e| e.comment_before.as_deref()),
        ]);
        if let Some(comment) = &comment {
            emit_leading(self.out, comment, 0);
        }

        if let Some(keyword) = signature.payload.kind.keyword() {
            self.out.emit(keyword);
            self.out.emit_space();
        }
        self.out.emit("class ");
        self.out.emit(&signature.payload.name);

        if let Some(extends) = extends {
            self.out.emit(" extends ");
            self.out.emit(&extends.payload);
        }
        if !file.implements.is_empty() {
            self.out.emit(" implements ");
            self.out.emit(&file.implements.join(", "));
        }

        let trailing = signature
            .trailing_comment
            .as_deref()
            .or_else(|| extends.and_then(|e| e.trailing_comment.as_deref()));
        emit_trailing(self.out, trailing);
        self.out.emit_newline();
    }

    fn format_body(&mut self, file: &ClassFile) {
        let content = &file.content;
        for constant in content.constants() {
            self.member_start(constant.comment_before.as_deref(), false);
            self.format_constant(constant);
        }
        for property in content.properties() {
            self.member_start(property.comment_before.as_deref(), false);
            self.format_property(property);
        }
        for trait_use in content.traits() {
            self.member_start(trait_use.comment_before.as_deref(), false);
            self.format_trait_use(trait_use);
        }
        for method in content.methods() {
            self.member_start(method.comment_before.as_deref(), true);
            self.format_method(method);
        }

        self.out.emit_newline();
        if let Some(comment) = &content.closing_comment {
            emit_leading(self.out, comment, 1);
        }
    }

    /// Blank-line separation and the leading comment of a member.
    fn member_start(&mut self, comment: Option<&str>, is_method: bool) {
        if is_method || comment.is_some() {
            self.out.emit_newline();
        }
        if let Some(comment) = comment {
            emit_leading(self.out, comment, 1);
        }
    }

    fn format_constant(&mut self, constant: &Element<ConstantDecl>) {
        let decl = &constant.payload;
        self.out.emit_indent(1);
        self.out.emit(decl.scope.as_str());
        self.out.emit(" const ");
        self.out.emit(&decl.name);
        self.out.emit(" = ");
        self.out.emit(&decl.value);
        self.out.emit(";");
        emit_trailing(self.out, constant.trailing_comment.as_deref());
        self.out.emit_newline();
    }

    fn format_property(&mut self, property: &Element<TypedVar>) {
        let var = &property.payload;
        self.out.emit_indent(1);
        self.out.emit(var.effective_scope().as_str());
        self.out.emit_space();
        if var.is_static {
            self.out.emit("static ");
        }
        self.out.emit(&var.ty);
        self.out.emit_space();
        self.out.emit(&var.name);
        if let Some(value) = &var.default_value {
            self.out.emit(" = ");
            self.out.emit(value);
        }
        self.out.emit(";");
        emit_trailing(self.out, property.trailing_comment.as_deref());
        self.out.emit_newline();
    }

    fn format_trait_use(&mut self, trait_use: &Element<String>) {
        self.out.emit_indent(1);
        self.out.emit("use ");
        self.out.emit(&trait_use.payload);
        self.out.emit(";");
        emit_trailing(self.out, trait_use.trailing_comment.as_deref());
        self.out.emit_newline();
    }

    fn format_method(&mut self, method: &Element<MethodDecl>) {
        let decl = &method.payload;
        self.out.emit_indent(1);
        if decl.is_abstract {
            self.out.emit("abstract ");
        }
        if decl.is_final {
            self.out.emit("final ");
        }
        self.out.emit(decl.scope.as_str());
        self.out.emit_space();
        if decl.is_static {
            self.out.emit("static ");
        }
        self.out.emit("function ");
        self.out.emit(&decl.name);
        self.out.emit(" (");

        if !decl.parameters().is_empty() {
            self.out.emit_newline();
            for (i, param) in decl.parameters().values().enumerate() {
                if i > 0 {
                    self.out.emit(",");
                    self.out.emit_newline();
                }
                self.format_parameter(param);
            }
            self.out.emit_newline();
            self.out.emit_indent(1);
        }
        self.out.emit(")");

        if let Some(return_type) = &decl.return_type {
            self.out.emit(": ");
            self.out.emit(return_type);
        }
        let trailing = method.trailing_comment.as_deref();
        if decl.is_declaration_only() {
            self.out.emit(";");
            emit_trailing(self.out, trailing);
        } else if has_text(trailing) {
            // The comment goes on the signature line; the body moves down.
            emit_trailing(self.out, trailing);
            self.out.emit_newline();
            self.out.emit_indent(1);
            self.out.emit(&decl.body);
        } else {
            self.out.emit_space();
            self.out.emit(&decl.body);
        }
        self.out.emit_newline();
    }

    fn format_parameter(&mut self, param: &TypedVar) {
        self.out.emit_indent(2);
        if let Some(scope) = param.scope {
            self.out.emit(scope.as_str());
            self.out.emit_space();
        }
        self.out.emit(&param.ty);
        self.out.emit_space();
        self.out.emit(&param.name);
        if let Some(value) = &param.default_value {
            self.out.emit(" = ");
            self.out.emit(value);
        }
    }
}

#[cfg(test)]
mod tests;
