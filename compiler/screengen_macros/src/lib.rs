//! Procedural macros for the screengen generator.
//!
//! # Diagnostic Derive
//!
//! The `Diagnostic` derive macro turns a plain struct into a diagnostic
//! constructor, so each message in the catalogue sits next to its fields:
//!
//! ```text
//! #[derive(Diagnostic)]
//! #[diag(E1002, "second argument must be a map literal")]
//! pub struct InvalidMappingArgument {
//!     #[primary_span]
//!     #[label("found `{found}`")]
//!     pub span: Span,
//!     pub found: String,
//! }
//! ```
//!
//! The generated code names `::screengen_diagnostic`, so the deriving crate
//! must depend on it directly.

mod diagnostic;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for creating diagnostics from structs.
///
/// # Attributes
///
/// ## Struct-level
/// - `#[diag(CODE, "message")]` - Required. Error code and message template.
///   Codes starting with `W` produce warnings, all others errors.
///
/// ## Field-level
/// - `#[primary_span]` - Required on exactly one `Span` field: the anchor.
/// - `#[label("message")]` - Label text for this span field.
/// - `#[note("message")]` - Add a note.
/// - `#[help("message")]` - Add a help line.
///
/// Templates interpolate fields by name (`{case_name}`, `{keys:?}`); only
/// the fields a template mentions are passed to `format!`.
///
/// # Example
///
/// ```text
/// let diagnostic = InvalidMappingArgument { span, found }.into_diagnostic();
/// ```
#[proc_macro_derive(Diagnostic, attributes(diag, primary_span, label, note, help))]
pub fn derive_diagnostic(input: TokenStream) -> TokenStream {
    diagnostic::derive_diagnostic(input)
}
