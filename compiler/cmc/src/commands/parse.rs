//! The `parse` command: print a summary of a parsed class file.

use std::fmt::Write as _;
use std::path::Path;

use cm_ir::{ClassFile, Element, MethodDecl};

use super::{read_file, render_error};
use crate::CliError;

/// Parse `path` and print its model summary. Returns the process exit code.
pub fn parse_file(path: &str) -> i32 {
    let source = match read_file(Path::new(path)) {
        Ok(source) => source,
        Err(e) => {
            eprint!("{}", render_error(path, "", &e));
            return 1;
        }
    };
    match cm_parse::parse(&source) {
        Ok(file) => {
            print!("{}", describe(&file));
            0
        }
        Err(e) => {
            eprint!("{}", render_error(path, &source, &CliError::from(e)));
            1
        }
    }
}

/// Human-readable outline of a class file model, one line per item.
pub fn describe(file: &ClassFile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "namespace {}", file.namespace.payload);
    for import in &file.imports {
        let _ = writeln!(out, "use {}", import.payload);
    }

    let signature = &file.class_signature.payload;
    if let Some(keyword) = signature.kind.keyword() {
        let _ = write!(out, "{keyword} ");
    }
    let _ = write!(out, "class {}", signature.name);
    if let Some(parent) = file.parent() {
        let _ = write!(out, " extends {parent}");
    }
    if !file.implements.is_empty() {
        let _ = write!(out, " implements {}", file.implements.join(", "));
    }
    out.push('\n');

    let content = &file.content;
    for constant in content.constants().values() {
        let c = &constant.payload;
        let _ = writeln!(out, "  const {} {} = {}{}", c.scope, c.name, c.value, marker(constant));
    }
    for property in content.properties().values() {
        let p = &property.payload;
        let _ = writeln!(
            out,
            "  property {}{} {} {}{}",
            p.effective_scope(),
            if p.is_static { " static" } else { "" },
            p.ty,
            p.name,
            marker(property)
        );
    }
    for trait_use in content.traits().values() {
        let _ = writeln!(out, "  use {}{}", trait_use.payload, marker(trait_use));
    }
    for method in content.methods().values() {
        describe_method(&mut out, method);
    }
    out
}

fn describe_method(out: &mut String, element: &Element<MethodDecl>) {
    let method = &element.payload;
    let params: Vec<String> = method
        .parameters()
        .values()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect();

    let _ = write!(out, "  method ");
    if method.is_abstract {
        out.push_str("abstract ");
    }
    if method.is_final {
        out.push_str("final ");
    }
    let _ = write!(out, "{}", method.scope);
    if method.is_static {
        out.push_str(" static");
    }
    let _ = write!(out, " {}({})", method.name, params.join(", "));
    if let Some(ret) = &method.return_type {
        let _ = write!(out, ": {ret}");
    }
    let _ = writeln!(out, "{}", marker(element));
}

/// Suffix noting that an element carries comments.
fn marker<T>(element: &Element<T>) -> &'static str {
    if element.has_comments() {
        " (commented)"
    } else {
        ""
    }
}
