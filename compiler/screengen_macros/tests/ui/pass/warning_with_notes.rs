//! Warnings, debug interpolation, secondary labels, notes and help.

use screengen_diagnostic::{ErrorCode, Span};
use screengen_macros::Diagnostic;

#[derive(Diagnostic)]
#[diag(W1001, "mapping keys {keys:?} in case `{case_name}` do not match any parameter")]
pub struct UnusedKeys {
    #[primary_span]
    pub span: Span,
    #[label("case `{case_name}` declared here")]
    #[note("keys match parameter labels or placeholder names")]
    #[help("remove or rename {keys:?}")]
    pub case_span: Span,
    pub keys: Vec<String>,
    pub case_name: String,
}

fn main() {
    let diag: screengen_diagnostic::Diagnostic = UnusedKeys {
        span: Span::new(0, 4),
        case_span: Span::new(10, 20),
        keys: vec!["typoId".to_string()],
        case_name: "detailScreen".to_string(),
    }
    .into();

    assert_eq!(diag.code, ErrorCode::W1001);
    assert!(!diag.is_error());
    assert_eq!(
        diag.message,
        "mapping keys [\"typoId\"] in case `detailScreen` do not match any parameter"
    );
    assert_eq!(diag.labels.len(), 2);
    assert!(!diag.labels[1].is_primary);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions, vec!["remove or rename [\"typoId\"]".to_string()]);
}
