#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::Scope;
use pretty_assertions::assert_eq;

#[test]
fn first_insertion_succeeds_second_fails() {
    let mut content = ClassContentStructure::new();
    content
        .add_property(Element::new(TypedVar::new("$x")))
        .unwrap();
    let err = content
        .add_property(Element::new(TypedVar::new("$x").with_type("int")))
        .unwrap_err();

    assert_eq!(
        err,
        ClassFileError::DuplicateMember {
            kind: MemberKind::Property,
            name: "$x".to_owned(),
        }
    );
    assert_eq!(err.to_string(), "duplicate property `$x`");
    assert_eq!(content.property("$x").unwrap().payload.ty, "mixed");
}

#[test]
fn duplicate_constant_method_and_trait() {
    let mut content = ClassContentStructure::new();
    content
        .add_constant(Element::new(ConstantDecl::new("A", "1")))
        .unwrap();
    content
        .add_method(Element::new(MethodDecl::new("run")))
        .unwrap();
    content
        .add_trait(Element::new("Loggable".to_owned()))
        .unwrap();

    let kinds: Vec<_> = [
        content.add_constant(Element::new(ConstantDecl::new("A", "2"))),
        content.add_method(Element::new(MethodDecl::new("run"))),
        content.add_trait(Element::new("Loggable".to_owned())),
    ]
    .into_iter()
    .map(|r| match r.unwrap_err() {
        ClassFileError::DuplicateMember { kind, .. } => kind,
        other => panic!("unexpected error: {other}"),
    })
    .collect();

    assert_eq!(
        kinds,
        vec![MemberKind::Constant, MemberKind::Method, MemberKind::TraitUse]
    );
}

#[test]
fn same_name_in_different_sections_is_allowed() {
    let mut content = ClassContentStructure::new();
    content
        .add(Member::Constant(Element::new(ConstantDecl::new("run", "1"))))
        .unwrap();
    content
        .add(Member::Method(Element::new(MethodDecl::new("run"))))
        .unwrap();
    assert_eq!(content.len(), 2);
}

#[test]
fn remove_and_readd_moves_to_end() {
    let mut content = ClassContentStructure::new();
    for name in ["A", "B", "C"] {
        content
            .add_constant(Element::new(ConstantDecl::new(name, "0")))
            .unwrap();
    }
    let a = content.remove_constant("A").unwrap();
    content.add_constant(a).unwrap();

    let names: Vec<_> = content.constants().keys().collect();
    assert_eq!(names, vec!["B", "C", "A"]);
}

#[test]
fn mutate_member_in_place() {
    let mut content = ClassContentStructure::new();
    content
        .add_constant(Element::new(ConstantDecl::new("A", "1")))
        .unwrap();
    content.constant_mut("A").unwrap().payload.scope = Scope::Private;
    assert_eq!(content.constant("A").unwrap().payload.scope, Scope::Private);
}

#[test]
fn empty_content() {
    let content = ClassContentStructure::default();
    assert!(content.is_empty());
    assert!(!content.has_trait("T"));
}
