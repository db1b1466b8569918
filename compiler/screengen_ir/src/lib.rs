//! screengen IR - front-end hand-off types
//!
//! This crate holds what the upstream syntax front end hands to the
//! generator: a classified declaration, its cases with their associated-value
//! slots and attributes, attribute argument expressions, written types and
//! source spans.
//!
//! All types are plain owned data with `Clone, Eq, Hash, Debug`. With the
//! `serde` feature enabled they also (de)serialize, which is how the CLI
//! reads front-end output from JSON.

mod decl;
mod expr;
mod span;
mod type_syntax;

pub use decl::{
    AttrArg, Attribute, CaseDecl, DeclKind, Declaration, EnumSchema, ParamSlot, Visibility,
};
pub use expr::{Expr, MapEntry};
pub use span::Span;
pub use type_syntax::{PathSegment, TypeSyntax};
