#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use cm_ir::{ClassFile, ClassKind, ConstantDecl, Element, MethodDecl, Scope, TypedVar};
use pretty_assertions::assert_eq;

use crate::generate;

/// Everything up to the class line for a file in namespace `App` with no
/// imports.
const PREAMBLE: &str = "<?php\n\n\nnamespace App;\n\n\n";

#[test]
fn empty_class() {
    let file = ClassFile::new("App", "Foo");
    assert_eq!(generate(&file), format!("{PREAMBLE}class Foo\n{{\n\n\n}}"));
}

#[test]
fn namespace_comment_is_followed_by_blank_line() {
    let mut file = ClassFile::new("App", "Foo");
    file.namespace.comment_before = Some("\n * License\n ".to_owned());
    file.namespace.trailing_comment = Some("root".to_owned());
    assert_eq!(
        generate(&file),
        "<?php\n\n/*\n * License\n */\n\nnamespace App; // root\n\n\nclass Foo\n{\n\n\n}"
    );
}

#[test]
fn header_with_imports_and_clauses() {
    let mut file = ClassFile::new("App\\Models", "User");
    file.add_import("App\\Contracts\\Jsonable");
    file.imports
        .push(Element::new("Countable".to_owned()).with_trailing_comment("spl"));
    file.class_signature.payload.kind = ClassKind::Final;
    file.set_extends(Some("Model".to_owned()));
    file.implements = vec!["Jsonable".to_owned(), "Countable".to_owned()];

    assert_eq!(
        generate(&file),
        "<?php\n\n\nnamespace App\\Models;\n\nuse App\\Contracts\\Jsonable;\nuse Countable; // spl\n\n\
         final class User extends Model implements Jsonable, Countable\n{\n\n\n}"
    );
}

#[test]
fn class_comment_folds_extends_comment() {
    let mut file = ClassFile::new("App", "Foo");
    file.class_signature.comment_before = Some(" class ".to_owned());
    file.extends = Some(
        Element::new("Bar".to_owned())
            .with_comment_before(" parent ")
            .with_trailing_comment("why"),
    );
    assert_eq!(
        generate(&file),
        format!("{PREAMBLE}/* class \n parent */\nclass Foo extends Bar // why\n{{\n\n\n}}")
    );
}

#[test]
fn member_layout_and_blank_lines() {
    let mut file = ClassFile::new("App", "Foo");
    let content = &mut file.content;
    content
        .add_constant(Element::new(ConstantDecl::new("A", "1")))
        .unwrap();
    content
        .add_constant(
            Element::new(ConstantDecl::new("B", "'b'").with_scope(Scope::Private))
                .with_comment_before(" second "),
        )
        .unwrap();
    content
        .add_property(Element::new(
            TypedVar::new("$count")
                .with_type("int")
                .with_default("0")
                .with_static(true)
                .with_scope(Scope::Protected),
        ))
        .unwrap();
    content
        .add_property(Element::new(TypedVar::new("$any")).with_trailing_comment("loose"))
        .unwrap();
    content
        .add_trait(Element::new("Helpers".to_owned()))
        .unwrap();
    content
        .add_method(Element::new(MethodDecl::new("run").with_body("{}")))
        .unwrap();

    let expected = "\
<?php


namespace App;


class Foo
{

    public const A = 1;

    /* second */
    private const B = 'b';
    protected static int $count = 0;
    public mixed $any; // loose
    use Helpers;

    public function run () {}

}";
    assert_eq!(generate(&file), expected);
}

#[test]
fn method_parameters_one_per_line() {
    let mut method = MethodDecl::new("f")
        .with_scope(Scope::Protected)
        .with_return_type("int")
        .with_body("{ return $rest[0]; }");
    method.is_static = true;
    method
        .add_parameter(TypedVar::new("$param").with_type("string"))
        .unwrap();
    method.add_parameter(TypedVar::new("$param2")).unwrap();
    method
        .add_parameter(TypedVar::new("...$rest").with_type("int"))
        .unwrap();

    let mut file = ClassFile::new("App", "Foo");
    file.content.add_method(Element::new(method)).unwrap();

    let expected = "\
<?php


namespace App;


class Foo
{


    protected static function f (
        string $param,
        mixed $param2,
        int ...$rest
    ): int { return $rest[0]; }

}";
    assert_eq!(generate(&file), expected);
}

#[test]
fn abstract_declaration_and_promoted_parameter() {
    let mut handle = MethodDecl::new("handle").with_return_type("void");
    handle.is_abstract = true;
    handle.scope = Scope::Protected;

    let mut ctor = MethodDecl::new("__construct").with_body("{}");
    ctor.add_parameter(
        TypedVar::new("$name")
            .with_type("string")
            .with_scope(Scope::Private)
            .with_default("'x'"),
    )
    .unwrap();

    let mut file = ClassFile::new("App", "Base");
    file.class_signature.payload.set_abstract(true);
    file.content.add_method(Element::new(ctor)).unwrap();
    file.content
        .add_method(Element::new(handle).with_comment_before("* Do it. "))
        .unwrap();

    let expected = "\
<?php


namespace App;


abstract class Base
{


    public function __construct (
        private string $name = 'x'
    ) {}

    /** Do it. */
    abstract protected function handle (): void;

}";
    assert_eq!(generate(&file), expected);
}

#[test]
fn method_comment_sits_between_signature_and_body() {
    let mut file = ClassFile::new("App", "Foo");
    file.content
        .add_method(
            Element::new(MethodDecl::new("f").with_return_type("int").with_body("{\n        return 1;\n    }"))
                .with_trailing_comment("note"),
        )
        .unwrap();
    assert_eq!(
        generate(&file),
        format!(
            "{PREAMBLE}class Foo\n{{\n\n\n    public function f (): int // note\n    {{\n        return 1;\n    }}\n\n}}"
        )
    );
}

#[test]
fn closing_comment() {
    let mut file = ClassFile::new("App", "Foo");
    file.content.closing_comment = Some(" end ".to_owned());
    assert_eq!(
        generate(&file),
        format!("{PREAMBLE}class Foo\n{{\n\n\n    /* end */\n}}")
    );

    file.content
        .add_constant(Element::new(ConstantDecl::new("A", "1")))
        .unwrap();
    assert_eq!(
        generate(&file),
        format!("{PREAMBLE}class Foo\n{{\n\n    public const A = 1;\n\n    /* end */\n}}")
    );
}
