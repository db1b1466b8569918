//! Dispatcher generation for `@Screens` enums.
//!
//! Given an enum whose cases describe screens, the generator produces an
//! extension with one computed member that switches over `self` and calls
//! one constructor per case:
//!
//! ```text
//! @Screens enum Route {              extension Route: View, ScreensProtocol {
//!     case home                          @MainActor
//!     case detail(id: Int)               @ViewBuilder
//! }                                      var body: some View {
//!                                            switch self {
//!                                            case .home:
//!                                                Home()
//!                                            case .detail(id: let id):
//!                                                Detail(id: id)
//!                                            }
//!                                        }
//!                                    }
//! ```
//!
//! # Pipeline
//!
//! 1. The declaration must be an enum (`E0001` otherwise).
//! 2. Per case, in order: resolve `@Screen` metadata ([`metadata`]), extract
//!    parameters ([`params`], `E1004` when two bind the same name), check
//!    the rename map ([`mapping`]).
//! 3. Synthesize the switch ([`switch`], [`args`]).
//! 4. Mirror the enum's access level ([`visibility`]).
//!
//! The first fatal diagnostic aborts the declaration with no partial output.
//! Warnings from all cases travel with the successful [`Expansion`].
//! Generation is pure: no I/O, no shared state, same input same output.

pub mod args;
pub mod errors;
pub mod mapping;
pub mod metadata;
pub mod naming;
pub mod options;
pub mod output;
pub mod params;
pub mod switch;
pub mod type_expr;
pub mod visibility;

use rayon::prelude::*;

use screengen_diagnostic::Diagnostic;
use screengen_ir::{CaseDecl, Declaration, EnumSchema, Span};

pub use args::{build_arguments, LABEL_STRIP_SENTINEL};
pub use mapping::{validate_mapping, RenameMap};
pub use metadata::{resolve_screen_info, ResolvedScreenInfo, ScreenAttribute};
pub use naming::infer_target_name;
pub use options::{ExpandOptions, UnlabeledArgumentPolicy, MAX_INDENT_WIDTH};
pub use output::{render, ExtensionDecl};
pub use params::{extract_parameters, find_duplicate_binding, ParameterInfo, ParameterList};
pub use switch::{synthesize_switch, CaseInfo};
pub use type_expr::resolve_type_expr;
pub use visibility::{mirror_visibility, AccessModifier};

use crate::errors::{DuplicateBinding, NotAnEnum};
use crate::output::ComputedMember;

/// A successful expansion.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Expansion {
    pub extension: ExtensionDecl,
    /// Advisory diagnostics, in case order.
    pub warnings: Vec<Diagnostic>,
}

impl Expansion {
    /// Render the generated extension with the given indentation width.
    pub fn render(&self, indent_width: usize) -> String {
        render(&self.extension, indent_width)
    }
}

/// Expand one declaration.
///
/// Returns the generated extension with any warnings, or the single fatal
/// diagnostic that stopped generation.
pub fn expand(decl: &Declaration, options: &ExpandOptions) -> Result<Expansion, Diagnostic> {
    let _span = tracing::debug_span!("expand", decl = %decl.name).entered();

    let Some(schema) = decl.as_enum() else {
        tracing::debug!(kind = %decl.kind, "declaration is not an enum");
        return Err(NotAnEnum {
            span: decl.span,
            name: decl.name.clone(),
            kind: decl.kind.to_string(),
        }
        .into_diagnostic());
    };

    let mut warnings = Vec::new();
    let cases = collect_cases(&schema, &mut warnings)?;

    let body = {
        let _span = tracing::debug_span!("synthesize", cases = cases.len()).entered();
        synthesize_switch(&cases, options.unlabeled_arguments)
    };

    let modifier = mirror_visibility(schema.visibility);
    tracing::debug!(
        arms = body.arms.len(),
        warnings = warnings.len(),
        modifier = %modifier,
        "expansion complete"
    );

    Ok(Expansion {
        extension: ExtensionDecl {
            modifier,
            type_name: schema.name.to_owned(),
            conformances: options.conformances.clone(),
            member: ComputedMember {
                modifier,
                attributes: options.member_attributes.clone(),
                name: options.member_name.clone(),
                ty: options.member_type.clone(),
                body,
            },
        },
        warnings,
    })
}

/// Resolve every case of the schema, stopping at the first fatal error.
fn collect_cases(
    schema: &EnumSchema<'_>,
    warnings: &mut Vec<Diagnostic>,
) -> Result<Vec<CaseInfo>, Diagnostic> {
    schema
        .cases
        .iter()
        .map(|case| {
            let _span = tracing::debug_span!("case", case = %case.name).entered();
            let (info, warning) = resolve_case(case)?;
            warnings.extend(warning);
            Ok(info)
        })
        .collect()
}

fn resolve_case(case: &CaseDecl) -> Result<(CaseInfo, Option<Diagnostic>), Diagnostic> {
    let ResolvedScreenInfo { target, renames } = resolve_screen_info(case)?;
    let params = extract_parameters(&case.params);
    if let Some((first, second)) = find_duplicate_binding(&params) {
        tracing::debug!(binding = %params[second].binding, "duplicate binding");
        return Err(DuplicateBinding {
            span: case.params[second].span,
            first: case.params[first].span,
            name: params[second].binding.clone(),
            case_name: case.name.clone(),
        }
        .into_diagnostic());
    }
    let warning = validate_mapping(&case.name, &renames, &params, mapping_anchor(case));

    tracing::trace!(
        target_type = %target,
        params = params.len(),
        renames = renames.len(),
        "resolved case"
    );

    Ok((
        CaseInfo {
            case_name: case.name.clone(),
            target,
            params,
            renames,
        },
        warning,
    ))
}

/// Warnings about a mapping point at the `@Screen` attribute carrying it.
fn mapping_anchor(case: &CaseDecl) -> Span {
    case.attributes
        .iter()
        .find(|attr| attr.is_named(metadata::SCREEN_ATTRIBUTE))
        .map_or(case.span, |attr| attr.span)
}

/// Expand every declaration of a compilation unit independently.
///
/// Results are in input order. A fatal error in one declaration does not
/// affect the others.
pub fn expand_unit(
    decls: &[Declaration],
    options: &ExpandOptions,
) -> Vec<Result<Expansion, Diagnostic>> {
    decls.par_iter().map(|decl| expand(decl, options)).collect()
}
