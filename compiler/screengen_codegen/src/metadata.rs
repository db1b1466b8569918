//! Per-case `@Screen` metadata.
//!
//! A case may carry one `@Screen` attribute in one of four shapes:
//!
//! ```text
//! @Screen                                   // Empty
//! @Screen(ProfileView.self)                 // ExplicitType
//! @Screen(ProfileView.self, ["a": "b"])     // ExplicitTypeAndMapping
//! @Screen(["a": "b"])                       // MappingOnly
//! ```
//!
//! Classification checks the first argument for a map literal before trying
//! to resolve it as a type, and rejects everything else.

use screengen_diagnostic::Diagnostic;
use screengen_ir::{AttrArg, Attribute, CaseDecl, Expr};

use crate::errors::{
    DuplicateScreenAttribute, InvalidMappingArgument, InvalidScreenAttribute,
    UnsupportedTypeExpression,
};
use crate::mapping::RenameMap;
use crate::naming::infer_target_name;
use crate::type_expr::{looks_like_type_reference, resolve_type_expr};

/// Name of the per-case attribute, without the `@`.
pub const SCREEN_ATTRIBUTE: &str = "Screen";

/// The classified shape of a `@Screen` attribute.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ScreenAttribute {
    Empty,
    ExplicitType(String),
    ExplicitTypeAndMapping(String, RenameMap),
    MappingOnly(RenameMap),
}

impl ScreenAttribute {
    /// Fill in the inferred target for shapes that do not name one.
    pub fn resolve(self, case_name: &str) -> ResolvedScreenInfo {
        let (target, renames) = match self {
            ScreenAttribute::Empty => (infer_target_name(case_name), RenameMap::new()),
            ScreenAttribute::ExplicitType(target) => (target, RenameMap::new()),
            ScreenAttribute::ExplicitTypeAndMapping(target, renames) => (target, renames),
            ScreenAttribute::MappingOnly(renames) => (infer_target_name(case_name), renames),
        };
        ResolvedScreenInfo { target, renames }
    }
}

/// Target type and rename map of one case.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ResolvedScreenInfo {
    pub target: String,
    pub renames: RenameMap,
}

/// Parse a dictionary literal into a rename map.
///
/// Returns `None` if `expr` is not a dictionary literal. Entries whose key or
/// value is not a string literal are skipped without error.
pub fn parse_map_literal(expr: &Expr) -> Option<RenameMap> {
    let Expr::Map(entries) = expr else {
        return None;
    };

    let mut renames = RenameMap::new();
    for entry in entries {
        match (&entry.key, &entry.value) {
            (Expr::Str(from), Expr::Str(to)) => renames.insert(from.as_str(), to.as_str()),
            (key, value) => {
                tracing::debug!(%key, %value, "skipping non-string mapping entry");
            }
        }
    }
    Some(renames)
}

/// Find the case's `@Screen` attribute, rejecting duplicates.
pub fn find_screen_attribute(case: &CaseDecl) -> Result<Option<&Attribute>, Diagnostic> {
    let mut found = case
        .attributes
        .iter()
        .filter(|attr| attr.is_named(SCREEN_ATTRIBUTE));

    let first = found.next();
    if let (Some(first), Some(second)) = (first, found.next()) {
        return Err(DuplicateScreenAttribute {
            span: second.span,
            first: first.span,
            case_name: case.name.clone(),
        }
        .into_diagnostic());
    }
    Ok(first)
}

/// Classify an attribute's arguments into one of the four shapes.
pub fn classify_attribute(attr: &Attribute) -> Result<ScreenAttribute, Diagnostic> {
    let (first, second) = match attr.args.as_slice() {
        [] => return Ok(ScreenAttribute::Empty),
        [first] => (first, None),
        [first, second] => (first, Some(second)),
        [_, _, extra, ..] => {
            return Err(InvalidScreenAttribute {
                span: extra.span,
                detail: format!(
                    "`@Screen` takes at most two arguments, found {}",
                    attr.args.len()
                ),
            }
            .into_diagnostic());
        }
    };

    if let Some(renames) = parse_map_literal(&first.expr) {
        return match second {
            None => Ok(ScreenAttribute::MappingOnly(renames)),
            Some(extra) => Err(InvalidScreenAttribute {
                span: extra.span,
                detail: "no argument may follow a mapping".to_string(),
            }
            .into_diagnostic()),
        };
    }

    let Some(target) = resolve_type_expr(&first.expr) else {
        return Err(unresolved_first_argument(first));
    };

    match second {
        None => Ok(ScreenAttribute::ExplicitType(target)),
        Some(arg) => match parse_map_literal(&arg.expr) {
            Some(renames) => Ok(ScreenAttribute::ExplicitTypeAndMapping(target, renames)),
            None => Err(InvalidMappingArgument {
                span: arg.span,
                found: arg.expr.to_string(),
            }
            .into_diagnostic()),
        },
    }
}

#[cold]
fn unresolved_first_argument(arg: &AttrArg) -> Diagnostic {
    let found = arg.expr.to_string();
    if looks_like_type_reference(&arg.expr) {
        UnsupportedTypeExpression {
            span: arg.span,
            found,
        }
        .into_diagnostic()
    } else {
        InvalidScreenAttribute {
            span: arg.span,
            detail: format!("`{found}` is neither a type nor a mapping"),
        }
        .into_diagnostic()
    }
}

/// Resolve the target type and rename map of a case.
///
/// A case without `@Screen` behaves like one with an empty `@Screen`.
pub fn resolve_screen_info(case: &CaseDecl) -> Result<ResolvedScreenInfo, Diagnostic> {
    let attribute = match find_screen_attribute(case)? {
        Some(attr) => classify_attribute(attr)?,
        None => ScreenAttribute::Empty,
    };
    Ok(attribute.resolve(&case.name))
}
