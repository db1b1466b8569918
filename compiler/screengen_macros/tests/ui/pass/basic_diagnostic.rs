//! Basic diagnostic derive usage.

use screengen_diagnostic::{ErrorCode, Severity, Span};
use screengen_macros::Diagnostic;

#[derive(Diagnostic)]
#[diag(E1002, "second argument must be a map literal")]
pub struct InvalidMapping {
    #[primary_span]
    #[label("found `{found}`")]
    pub span: Span,
    pub found: String,
}

fn main() {
    let diag = InvalidMapping {
        span: Span::new(4, 9),
        found: "\"userId\"".to_string(),
    }
    .into_diagnostic();

    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.message, "second argument must be a map literal");
    assert_eq!(diag.primary_span(), Some(Span::new(4, 9)));
    assert_eq!(diag.labels[0].message, "found `\"userId\"`");
}
