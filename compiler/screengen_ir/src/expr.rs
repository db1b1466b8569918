//! Attribute argument expressions.
//!
//! Attribute arguments arrive as expressions, not types: `ProfileView.self`
//! is a member access on a type name, `["userId": "id"]` is a dictionary
//! literal. `Expr` models the shapes the generator distinguishes and keeps
//! the rest (closures, tuples, `some`/`any`) so it can reject them with a
//! precise diagnostic.

use std::fmt;

use crate::TypeSyntax;

/// One `key: value` entry of a dictionary literal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapEntry {
    pub key: Expr,
    pub value: Expr,
}

/// An attribute argument expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Expr {
    /// `ProfileView`
    Ident(String),
    /// `base.member`
    Member { base: Box<Expr>, member: String },
    /// `base.self`
    TypeOf(Box<Expr>),
    /// `base<args...>`
    Generic {
        base: Box<Expr>,
        args: Vec<TypeSyntax>,
    },
    /// `["key": "value", ...]`; `[:]` when empty
    Map(Vec<MapEntry>),
    /// `[a, b]`
    Array(Vec<Expr>),
    /// `"text"`
    Str(String),
    /// `42`
    Int(i64),
    /// `true` / `false`
    Bool(bool),
    /// `(a, b)`
    Tuple(Vec<Expr>),
    /// `{ ... }`; the body is irrelevant to the generator
    Closure,
    /// `some P`
    #[cfg_attr(feature = "serde", serde(rename = "some"))]
    Opaque(TypeSyntax),
    /// `any P`
    #[cfg_attr(feature = "serde", serde(rename = "any"))]
    Existential(TypeSyntax),
}

impl Expr {
    /// `name`
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    /// `base.member`
    pub fn member(base: Expr, member: impl Into<String>) -> Self {
        Expr::Member {
            base: Box::new(base),
            member: member.into(),
        }
    }

    /// `base.self`
    pub fn type_of(base: Expr) -> Self {
        Expr::TypeOf(Box::new(base))
    }

    /// `base<args...>`
    pub fn generic(base: Expr, args: Vec<TypeSyntax>) -> Self {
        Expr::Generic {
            base: Box::new(base),
            args,
        }
    }

    /// `"text"`
    pub fn string(text: impl Into<String>) -> Self {
        Expr::Str(text.into())
    }

    /// A dictionary literal whose entries are all string literals.
    pub fn string_map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Expr::Map(
            entries
                .into_iter()
                .map(|(k, v)| MapEntry {
                    key: Expr::Str(k.into()),
                    value: Expr::Str(v.into()),
                })
                .collect(),
        )
    }

    /// Whether this expression is a value literal (string, number, boolean,
    /// array or dictionary) rather than something naming a type.
    pub fn is_value_literal(&self) -> bool {
        matches!(
            self,
            Expr::Str(_) | Expr::Int(_) | Expr::Bool(_) | Expr::Array(_) | Expr::Map(_)
        )
    }
}

fn write_exprs(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(name) => f.write_str(name),
            Expr::Member { base, member } => write!(f, "{base}.{member}"),
            Expr::TypeOf(base) => write!(f, "{base}.self"),
            Expr::Generic { base, args } => {
                write!(f, "{base}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            Expr::Map(entries) if entries.is_empty() => f.write_str("[:]"),
            Expr::Map(entries) => {
                f.write_str("[")?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", entry.key, entry.value)?;
                }
                f.write_str("]")
            }
            Expr::Array(items) => {
                f.write_str("[")?;
                write_exprs(f, items)?;
                f.write_str("]")
            }
            Expr::Str(text) => write_string_literal(f, text),
            Expr::Int(value) => write!(f, "{value}"),
            Expr::Bool(value) => write!(f, "{value}"),
            Expr::Tuple(items) => {
                f.write_str("(")?;
                write_exprs(f, items)?;
                f.write_str(")")
            }
            Expr::Closure => f.write_str("{ ... }"),
            Expr::Opaque(ty) => write!(f, "some {ty}"),
            Expr::Existential(ty) => write!(f, "any {ty}"),
        }
    }
}

/// Write `text` as a double-quoted literal, escaping only `"` and `\`.
fn write_string_literal(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"")
}
