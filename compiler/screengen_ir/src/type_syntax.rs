//! Written type annotations, preserving their source structure.
//!
//! `TypeSyntax` covers everything a parameter slot or a generic argument
//! can spell: named paths with generic arguments, array and dictionary
//! sugar, optionals, tuples, function types and `some`/`any` forms.
//! The generator never resolves these; it only needs their literal text,
//! which the `Display` impl reproduces in canonical spacing.

use std::fmt;

/// One dotted segment of a named type: `Module`, `Wrapper<Int>`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSegment {
    /// Segment identifier.
    pub name: String,
    /// Generic arguments applied to this segment, empty if none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub args: Vec<TypeSyntax>,
}

impl PathSegment {
    /// A segment without generic arguments.
    pub fn new(name: impl Into<String>) -> Self {
        PathSegment {
            name: name.into(),
            args: Vec::new(),
        }
    }
}

/// A written type, as the front end parsed it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TypeSyntax {
    /// `Int`, `Swift.Int`, `Box<Inner>`, `Outer.Inner<[Int]>`
    Path(Vec<PathSegment>),
    /// `[T]`
    Array(Box<TypeSyntax>),
    /// `[K: V]`
    Dictionary {
        key: Box<TypeSyntax>,
        value: Box<TypeSyntax>,
    },
    /// `T?`
    Optional(Box<TypeSyntax>),
    /// `(A, B)`; `()` when empty
    Tuple(Vec<TypeSyntax>),
    /// `(A, B) -> R`
    Function {
        params: Vec<TypeSyntax>,
        ret: Box<TypeSyntax>,
    },
    /// `some P`
    Opaque(Box<TypeSyntax>),
    /// `any P`
    Existential(Box<TypeSyntax>),
}

impl TypeSyntax {
    /// A single-segment named type without generic arguments.
    pub fn named(name: impl Into<String>) -> Self {
        TypeSyntax::Path(vec![PathSegment::new(name)])
    }

    /// A single-segment named type with generic arguments.
    pub fn generic(name: impl Into<String>, args: Vec<TypeSyntax>) -> Self {
        TypeSyntax::Path(vec![PathSegment {
            name: name.into(),
            args,
        }])
    }

    /// A dotted path of plain segments, e.g. `["Foundation", "URL"]`.
    pub fn qualified<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TypeSyntax::Path(segments.into_iter().map(PathSegment::new).collect())
    }

    /// `[elem]`
    pub fn array(elem: TypeSyntax) -> Self {
        TypeSyntax::Array(Box::new(elem))
    }

    /// `[key: value]`
    pub fn dictionary(key: TypeSyntax, value: TypeSyntax) -> Self {
        TypeSyntax::Dictionary {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// `inner?`
    pub fn optional(inner: TypeSyntax) -> Self {
        TypeSyntax::Optional(Box::new(inner))
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[TypeSyntax]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            write_list(f, &self.args)?;
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSyntax::Path(segments) => {
                for (i, segment) in segments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    write!(f, "{segment}")?;
                }
                Ok(())
            }
            TypeSyntax::Array(elem) => write!(f, "[{elem}]"),
            TypeSyntax::Dictionary { key, value } => write!(f, "[{key}: {value}]"),
            TypeSyntax::Optional(inner) => write!(f, "{inner}?"),
            TypeSyntax::Tuple(elems) => {
                f.write_str("(")?;
                write_list(f, elems)?;
                f.write_str(")")
            }
            TypeSyntax::Function { params, ret } => {
                f.write_str("(")?;
                write_list(f, params)?;
                write!(f, ") -> {ret}")
            }
            TypeSyntax::Opaque(inner) => write!(f, "some {inner}"),
            TypeSyntax::Existential(inner) => write!(f, "any {inner}"),
        }
    }
}
