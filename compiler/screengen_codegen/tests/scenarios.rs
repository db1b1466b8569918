//! End-to-end expansion scenarios.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use screengen_codegen::{expand, expand_unit, ExpandOptions, Expansion, UnlabeledArgumentPolicy};
use screengen_diagnostic::{Diagnostic, ErrorCode, Severity, Span};
use screengen_ir::{
    Attribute, CaseDecl, DeclKind, Declaration, Expr, ParamSlot, TypeSyntax, Visibility,
};

fn int() -> TypeSyntax {
    TypeSyntax::named("Int")
}

fn screen(args: Vec<Expr>) -> Attribute {
    Attribute::new("Screen", args)
}

fn type_ref(name: &str) -> Expr {
    Expr::type_of(Expr::ident(name))
}

fn expand_default(decl: &Declaration) -> Result<Expansion, Diagnostic> {
    expand(decl, &ExpandOptions::default())
}

fn arms(expansion: &Expansion) -> Vec<String> {
    expansion
        .extension
        .member
        .body
        .arms
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn scenario_a_inferred_targets() {
    let decl = Declaration::new_enum("Route")
        .with_case(CaseDecl::new("home"))
        .with_case(CaseDecl::new("detail").with_param(ParamSlot::labeled("id", int())));

    let expansion = expand_default(&decl).unwrap();
    assert_eq!(
        arms(&expansion),
        vec![".home: Home()", ".detail(id: let id): Detail(id: id)"]
    );
    assert!(expansion.warnings.is_empty());
}

#[test]
fn scenario_b_unlabeled_parameter() {
    let decl = Declaration::new_enum("Route")
        .with_case(CaseDecl::new("preview").with_param(ParamSlot::unlabeled(int())));

    let expansion = expand_default(&decl).unwrap();
    assert_eq!(arms(&expansion), vec![".preview(let param0): Preview(param0)"]);
}

#[test]
fn scenario_b_with_legacy_labeling() {
    let decl = Declaration::new_enum("Route")
        .with_case(CaseDecl::new("preview").with_param(ParamSlot::unlabeled(int())));
    let options = ExpandOptions {
        unlabeled_arguments: UnlabeledArgumentPolicy::LabelWithBindingName,
        ..ExpandOptions::default()
    };

    let expansion = expand(&decl, &options).unwrap();
    assert_eq!(
        arms(&expansion),
        vec![".preview(let param0): Preview(param0: param0)"]
    );
}

#[test]
fn scenario_c_explicit_type_and_rename() {
    let decl = Declaration::new_enum("Route").with_case(
        CaseDecl::new("profile")
            .with_param(ParamSlot::labeled("userId", int()))
            .with_attribute(screen(vec![
                type_ref("ProfileView"),
                Expr::string_map([("userId", "id")]),
            ])),
    );

    let expansion = expand_default(&decl).unwrap();
    assert_eq!(
        arms(&expansion),
        vec![".profile(userId: let userId): ProfileView(id: userId)"]
    );
}

#[test]
fn scenario_d_not_an_enum() {
    let decl = Declaration::new(DeclKind::Struct, "Route").with_span(Span::new(10, 42));

    let err = expand_default(&decl).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0001);
    assert_eq!(err.code.name(), "notAnEnum");
    assert_eq!(err.severity, Severity::Error);
    assert_eq!(err.message, "`@Screens` applies only to an enum");
    assert_eq!(err.primary_span(), Some(Span::new(10, 42)));
}

#[test]
fn scenario_e_partial_mapping_warns() {
    let decl = Declaration::new_enum("Route").with_case(
        CaseDecl::new("detailScreen")
            .with_param(ParamSlot::labeled("id", int()))
            .with_attribute(
                screen(vec![Expr::string_map([
                    ("typoId", "detailId"),
                    ("id", "correctId"),
                ])])
                .with_span(Span::new(4, 60)),
            ),
    );

    let expansion = expand_default(&decl).unwrap();
    assert_eq!(
        arms(&expansion),
        vec![".detailScreen(id: let id): DetailScreen(correctId: id)"]
    );
    assert_eq!(expansion.warnings.len(), 1);
    let warning = &expansion.warnings[0];
    assert_eq!(warning.code, ErrorCode::W1001);
    assert_eq!(
        warning.message,
        "mapping keys [\"typoId\"] in case `detailScreen` do not match any parameter"
    );
    assert_eq!(warning.primary_span(), Some(Span::new(4, 60)));
}

#[test]
fn sentinel_strips_label_without_trace() {
    let decl = Declaration::new_enum("Route").with_case(
        CaseDecl::new("article")
            .with_param(ParamSlot::labeled("slug", TypeSyntax::named("String")))
            .with_attribute(screen(vec![Expr::string_map([("slug", "_")])])),
    );

    let expansion = expand_default(&decl).unwrap();
    assert_eq!(arms(&expansion), vec![".article(slug: let slug): Article(slug)"]);
    let call = expansion.extension.member.body.arms[0].call.to_string();
    assert!(!call.contains('_'));
}

#[test]
fn warnings_are_collected_across_cases() {
    let decl = Declaration::new_enum("Route")
        .with_case(
            CaseDecl::new("first").with_attribute(screen(vec![Expr::string_map([("b", "x"), ("a", "y")])])),
        )
        .with_case(CaseDecl::new("middle"))
        .with_case(
            CaseDecl::new("last").with_attribute(screen(vec![Expr::string_map([("z", "x")])])),
        );

    let expansion = expand_default(&decl).unwrap();
    let messages: Vec<&str> = expansion
        .warnings
        .iter()
        .map(|w| w.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "mapping keys [\"a\", \"b\"] in case `first` do not match any parameter",
            "mapping keys [\"z\"] in case `last` do not match any parameter",
        ]
    );
}

#[test]
fn first_fatal_error_aborts_whole_declaration() {
    let decl = Declaration::new_enum("Route")
        .with_case(CaseDecl::new("home"))
        .with_case(
            CaseDecl::new("broken").with_attribute(screen(vec![Expr::Closure])),
        )
        .with_case(CaseDecl::new("later").with_attribute(screen(vec![
            type_ref("Later"),
            Expr::string("oops"),
        ])));

    let err = expand_default(&decl).unwrap_err();
    assert_eq!(err.code, ErrorCode::E1003);
}

#[test]
fn invalid_mapping_argument_is_fatal() {
    let decl = Declaration::new_enum("Route").with_case(
        CaseDecl::new("later").with_attribute(screen(vec![type_ref("Later"), Expr::string("oops")])),
    );
    let err = expand_default(&decl).unwrap_err();
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.code.name(), "invalidMappingArgument");
}

#[test]
fn label_colliding_with_placeholder_is_fatal() {
    let decl = Declaration::new_enum("Route")
        .with_case(CaseDecl::new("home"))
        .with_case(
            CaseDecl::new("detail")
                .with_param(ParamSlot::labeled("param1", int()).with_span(Span::new(20, 31)))
                .with_param(ParamSlot::unlabeled(TypeSyntax::named("String")).with_span(Span::new(33, 39))),
        );

    let err = expand_default(&decl).unwrap_err();
    assert_eq!(err.code, ErrorCode::E1004);
    assert_eq!(err.code.name(), "duplicateBinding");
    assert_eq!(err.message, "case `detail` binds `param1` more than once");
    assert_eq!(err.primary_span(), Some(Span::new(33, 39)));
    assert_eq!(err.labels[1].span, Span::new(20, 31));
}

#[test]
fn zero_cases_render_an_empty_switch() {
    let decl = Declaration::new_enum("Empty");
    let expansion = expand_default(&decl).unwrap();
    assert_eq!(
        expansion.render(4),
        "\
extension Empty: View, ScreensProtocol {
    @MainActor
    @ViewBuilder
    var body: some View {
        switch self {
        }
    }
}
"
    );
}

#[test]
fn visibility_is_mirrored_on_extension_and_member() {
    for (visibility, keyword) in [
        (Visibility::Public, "public"),
        (Visibility::Internal, "internal"),
        (Visibility::Fileprivate, "fileprivate"),
        (Visibility::Private, "private"),
    ] {
        let decl = Declaration::new_enum("Route")
            .with_visibility(visibility)
            .with_case(CaseDecl::new("home"));
        let rendered = expand_default(&decl).unwrap().render(4);
        assert!(rendered.starts_with(&format!("{keyword} extension Route")));
        assert!(rendered.contains(&format!("    {keyword} var body: some View {{")));
    }
}

#[test]
fn golden_render() {
    let decl = Declaration::new_enum("AppRoute")
        .with_visibility(Visibility::Public)
        .with_case(CaseDecl::new("home"))
        .with_case(
            CaseDecl::new("profile")
                .with_param(ParamSlot::renamed("userId", "uid", int()))
                .with_param(ParamSlot::unlabeled(TypeSyntax::named("Bool")))
                .with_attribute(screen(vec![
                    Expr::type_of(Expr::member(Expr::ident("Profile"), "ProfileView")),
                    Expr::string_map([("userId", "id"), ("param1", "isEditing")]),
                ])),
        )
        .with_case(
            CaseDecl::new("gallery")
                .with_param(ParamSlot::labeled(
                    "items",
                    TypeSyntax::array(TypeSyntax::named("Photo")),
                ))
                .with_attribute(screen(vec![Expr::type_of(Expr::generic(
                    Expr::ident("Paged"),
                    vec![TypeSyntax::named("PhotoGrid")],
                ))])),
        );

    let expansion = expand_default(&decl).unwrap();
    assert!(expansion.warnings.is_empty());
    assert_eq!(
        expansion.render(4),
        "\
public extension AppRoute: View, ScreensProtocol {
    @MainActor
    @ViewBuilder
    public var body: some View {
        switch self {
        case .home:
            Home()
        case .profile(userId: let uid, let param1):
            Profile.ProfileView(id: uid, isEditing: param1)
        case .gallery(items: let items):
            Paged<PhotoGrid>(items: items)
        }
    }
}
"
    );
}

#[test]
fn custom_member_options() {
    let decl = Declaration::new_enum("Route").with_case(CaseDecl::new("home"));
    let options = ExpandOptions {
        conformances: vec!["Navigable".to_string()],
        member_name: "destination".to_string(),
        member_type: "AnyView".to_string(),
        member_attributes: Vec::new(),
        ..ExpandOptions::default()
    };
    let rendered = expand(&decl, &options).unwrap().render(2);
    assert_eq!(
        rendered,
        "extension Route: Navigable {\n  var destination: AnyView {\n    switch self {\n    case .home:\n      Home()\n    }\n  }\n}\n"
    );
}

#[test]
fn expansion_is_idempotent() {
    let decl = Declaration::new_enum("Route")
        .with_case(CaseDecl::new("detail").with_param(ParamSlot::labeled("id", int())))
        .with_case(CaseDecl::new("settings").with_attribute(screen(vec![Expr::string_map([
            ("a", "b"),
            ("c", "d"),
            ("e", "f"),
        ])])));
    let first = expand_default(&decl).unwrap();
    let second = expand_default(&decl).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.render(4), second.render(4));
}

#[test]
fn unit_expansion_preserves_order_and_isolates_failures() {
    let decls = vec![
        Declaration::new_enum("First").with_case(CaseDecl::new("a")),
        Declaration::new(DeclKind::Class, "Second"),
        Declaration::new_enum("Third").with_case(CaseDecl::new("c")),
    ];
    let results = expand_unit(&decls, &ExpandOptions::default());
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().extension.type_name, "First");
    assert_eq!(results[1].as_ref().unwrap_err().code, ErrorCode::E0001);
    assert_eq!(results[2].as_ref().unwrap().extension.type_name, "Third");
}
