use screengen_ir::{Expr, TypeSyntax};

use super::*;

fn resolve(expr: &Expr) -> Option<String> {
    resolve_type_expr(expr)
}

#[test]
fn test_simple_identifier() {
    assert_eq!(resolve(&Expr::ident("ProfileView")).as_deref(), Some("ProfileView"));
}

#[test]
fn test_type_of_marker_is_dropped() {
    let expr = Expr::type_of(Expr::ident("ProfileView"));
    assert_eq!(resolve(&expr).as_deref(), Some("ProfileView"));
}

#[test]
fn test_self_member_is_a_type_of_marker() {
    let expr = Expr::member(Expr::ident("ProfileView"), "self");
    assert_eq!(resolve(&expr).as_deref(), Some("ProfileView"));
}

#[test]
fn test_qualified_name() {
    let expr = Expr::type_of(Expr::member(
        Expr::member(Expr::ident("App"), "Feature"),
        "ProfileView",
    ));
    assert_eq!(resolve(&expr).as_deref(), Some("App.Feature.ProfileView"));
}

#[test]
fn test_generic_instantiation() {
    let expr = Expr::type_of(Expr::generic(
        Expr::ident("Wrapper"),
        vec![TypeSyntax::named("Inner")],
    ));
    assert_eq!(resolve(&expr).as_deref(), Some("Wrapper<Inner>"));
}

#[test]
fn test_generic_arguments_keep_their_spelling() {
    let expr = Expr::generic(
        Expr::member(Expr::ident("UI"), "Pair"),
        vec![
            TypeSyntax::array(TypeSyntax::named("Int")),
            TypeSyntax::generic("Box", vec![TypeSyntax::qualified(["Foundation", "URL"])]),
            TypeSyntax::dictionary(TypeSyntax::named("String"), TypeSyntax::named("Int")),
        ],
    );
    assert_eq!(
        resolve(&expr).as_deref(),
        Some("UI.Pair<[Int], Box<Foundation.URL>, [String: Int]>")
    );
}

#[test]
fn test_member_of_generic() {
    let expr = Expr::member(
        Expr::generic(Expr::ident("Outer"), vec![TypeSyntax::named("A")]),
        "Inner",
    );
    assert_eq!(resolve(&expr).as_deref(), Some("Outer<A>.Inner"));
}

#[test]
fn test_unsupported_shapes() {
    let unsupported = [
        Expr::Closure,
        Expr::Tuple(vec![Expr::ident("A"), Expr::ident("B")]),
        Expr::Opaque(TypeSyntax::named("View")),
        Expr::Existential(TypeSyntax::named("View")),
        Expr::string("ProfileView"),
        Expr::Int(1),
        Expr::ident(""),
        Expr::generic(Expr::ident("Wrapper"), Vec::new()),
    ];
    for expr in &unsupported {
        assert_eq!(resolve(expr), None, "{expr:?} should not resolve");
    }
}

#[test]
fn test_failure_propagates_from_base() {
    let expr = Expr::type_of(Expr::member(Expr::Closure, "View"));
    assert_eq!(resolve(&expr), None);

    let expr = Expr::generic(Expr::Tuple(Vec::new()), vec![TypeSyntax::named("A")]);
    assert_eq!(resolve(&expr), None);
}

#[test]
fn test_literals_do_not_look_like_types() {
    assert!(!looks_like_type_reference(&Expr::string("x")));
    assert!(!looks_like_type_reference(&Expr::Bool(true)));
    assert!(looks_like_type_reference(&Expr::Closure));
    assert!(looks_like_type_reference(&Expr::ident("View")));
}
