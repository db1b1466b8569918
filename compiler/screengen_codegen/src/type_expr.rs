//! Type-reference expressions in attribute arguments.
//!
//! The first `@Screen` argument names the target type as an expression:
//! `ProfileView.self`, `Feature.ProfileView.self`, `Wrapper<Inner>.self`.
//! Resolution turns it into the canonical spelling used at the call site.
//!
//! Supported shapes, nested arbitrarily:
//!
//! | Expression            | Resolved             |
//! |-----------------------|----------------------|
//! | `View`                | `View`               |
//! | `A.B`                 | `A.B`                |
//! | `G<Arg, [Int]>`       | `G<Arg, [Int]>`      |
//! | any of these + `.self`| same, marker dropped |
//!
//! Closures, tuples, `some`/`any` forms and literals do not resolve.

use screengen_ir::Expr;

/// The member name that marks a metatype reference.
const TYPE_OF_MEMBER: &str = "self";

/// Resolve a type-reference expression to its canonical string.
///
/// Returns `None` for shapes that do not name a type.
pub fn resolve_type_expr(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Ident(name) if !name.is_empty() => Some(name.clone()),
        Expr::TypeOf(base) => resolve_type_expr(base),
        Expr::Member { base, member } if member == TYPE_OF_MEMBER => resolve_type_expr(base),
        Expr::Member { base, member } => {
            let base = resolve_type_expr(base)?;
            Some(format!("{base}.{member}"))
        }
        Expr::Generic { base, args } if !args.is_empty() => {
            let base = resolve_type_expr(base)?;
            let args: Vec<String> = args.iter().map(ToString::to_string).collect();
            Some(format!("{base}<{}>", args.join(", ")))
        }
        _ => None,
    }
}

/// Whether `expr` could plausibly have been meant as a type reference.
///
/// Used to pick between "unsupported type expression" and "invalid
/// attribute" when resolution fails: literals were never type references.
pub fn looks_like_type_reference(expr: &Expr) -> bool {
    !expr.is_value_literal()
}

#[cfg(test)]
mod tests;
