//! Diagnostic catalogue of the generator.
//!
//! Message text is a public contract: tooling and tests match it verbatim.
//! Each struct converts into a [`Diagnostic`](screengen_diagnostic::Diagnostic)
//! via `into_diagnostic()` or `From`.

use std::fmt;

use screengen_diagnostic::Span;
use screengen_ir::Expr;
use screengen_macros::Diagnostic;

/// `@Screens` attached to something other than an enum.
#[derive(Diagnostic)]
#[diag(E0001, "`@Screens` applies only to an enum")]
pub struct NotAnEnum {
    #[primary_span]
    #[label("`{name}` is declared as a {kind}")]
    #[help("declare `{name}` as an enum with one case per screen")]
    pub span: Span,
    pub name: String,
    pub kind: String,
}

/// A `@Screen` attribute outside the four supported shapes.
#[derive(Diagnostic)]
#[diag(
    E1001,
    "invalid `@Screen` attribute; supported forms are `@Screen`, `@Screen(Type.self)`, `@Screen(Type.self, [\"from\": \"to\"])`, and `@Screen([\"from\": \"to\"])`"
)]
pub struct InvalidScreenAttribute {
    #[primary_span]
    #[label("{detail}")]
    pub span: Span,
    pub detail: String,
}

/// More than one `@Screen` attribute on a single case.
#[derive(Diagnostic)]
#[diag(
    E1001,
    "invalid `@Screen` attribute; supported forms are `@Screen`, `@Screen(Type.self)`, `@Screen(Type.self, [\"from\": \"to\"])`, and `@Screen([\"from\": \"to\"])`"
)]
pub struct DuplicateScreenAttribute {
    #[primary_span]
    #[label("second `@Screen` on case `{case_name}`")]
    pub span: Span,
    #[label("first `@Screen` here")]
    #[note("a case may carry at most one `@Screen` attribute")]
    pub first: Span,
    pub case_name: String,
}

/// The argument after a type reference is not a map literal.
#[derive(Diagnostic)]
#[diag(E1002, "second argument must be a map literal like `[\"from\": \"to\"]`")]
pub struct InvalidMappingArgument {
    #[primary_span]
    #[label("found `{found}`")]
    pub span: Span,
    pub found: String,
}

/// The first argument has the shape of a type but cannot be resolved.
#[derive(Diagnostic)]
#[diag(
    E1003,
    "unsupported type expression; use a simple name (`View`), a qualified name (`Module.View`), or a generic instantiation (`Wrapper<View>`), optionally followed by `.self`"
)]
pub struct UnsupportedTypeExpression {
    #[primary_span]
    #[label("`{found}` does not name a type")]
    pub span: Span,
    pub found: String,
}

/// Two associated values of a case bound to the same name.
#[derive(Diagnostic)]
#[diag(E1004, "case `{case_name}` binds `{name}` more than once")]
pub struct DuplicateBinding {
    #[primary_span]
    #[label("`{name}` bound again here")]
    #[note("unlabeled values are bound to `param0`, `param1`, ... by position")]
    #[help("rename the label, or give this value a different internal name")]
    pub span: Span,
    #[label("first bound here")]
    pub first: Span,
    pub name: String,
    pub case_name: String,
}

/// Rename-map keys that match no parameter of the case.
#[derive(Diagnostic)]
#[diag(W1001, "mapping keys {keys} in case `{case_name}` do not match any parameter")]
pub struct UnusedMappingKeys {
    #[primary_span]
    #[label("mapping declared here")]
    #[note("keys match a parameter label, or the placeholder name (`param0`, `param1`, ...) of an unlabeled value")]
    pub span: Span,
    pub keys: KeyList,
    pub case_name: String,
}

/// Mapping keys shown the way they are written, as an array of strings.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct KeyList(pub Vec<String>);

impl fmt::Display for KeyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let literal = Expr::Array(self.0.iter().cloned().map(Expr::Str).collect());
        write!(f, "{literal}")
    }
}
