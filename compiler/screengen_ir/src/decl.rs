//! Declarations as handed over by the front end.
//!
//! A [`Declaration`] is whatever construct the `@Screens` marker was attached
//! to. Only enums can be expanded; everything else is carried far enough to
//! be rejected with a diagnostic anchored at its span.

use std::fmt;

use crate::{Expr, Span, TypeSyntax};

/// Declared access level of a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Visibility {
    Public,
    Internal,
    Fileprivate,
    Private,
}

impl Visibility {
    /// The modifier keyword as written in source.
    pub const fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::Fileprivate => "fileprivate",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of construct a declaration is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeclKind {
    Enum,
    Struct,
    Class,
    Actor,
    Protocol,
    Extension,
}

impl DeclKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            DeclKind::Enum => "enum",
            DeclKind::Struct => "struct",
            DeclKind::Class => "class",
            DeclKind::Actor => "actor",
            DeclKind::Protocol => "protocol",
            DeclKind::Extension => "extension",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One associated-value slot of an enum case.
///
/// `case profile(userId uid: Int, _ extra: String)` has two slots: the first
/// with label `userId` and internal name `uid`, the second unlabeled.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamSlot {
    /// External label; `None` for unlabeled (or `_`-labeled) slots.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
    /// Separate internal name, when one was written after the label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub internal_name: Option<String>,
    /// Declared type.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: TypeSyntax,
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

impl ParamSlot {
    /// `label: ty`
    pub fn labeled(label: impl Into<String>, ty: TypeSyntax) -> Self {
        ParamSlot {
            label: Some(label.into()),
            internal_name: None,
            ty,
            span: Span::DUMMY,
        }
    }

    /// `ty`
    pub fn unlabeled(ty: TypeSyntax) -> Self {
        ParamSlot {
            label: None,
            internal_name: None,
            ty,
            span: Span::DUMMY,
        }
    }

    /// `label internal: ty`
    pub fn renamed(label: impl Into<String>, internal: impl Into<String>, ty: TypeSyntax) -> Self {
        ParamSlot {
            label: Some(label.into()),
            internal_name: Some(internal.into()),
            ty,
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// One argument of an attribute, with its location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttrArg {
    pub expr: Expr,
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

/// A custom attribute attached to a case: `@Name(args...)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    /// Attribute name without the `@`.
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub args: Vec<AttrArg>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

impl Attribute {
    /// An attribute whose arguments carry no location information.
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Attribute {
            name: name.into(),
            args: args
                .into_iter()
                .map(|expr| AttrArg {
                    expr,
                    span: Span::DUMMY,
                })
                .collect(),
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

/// One case of an enum declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseDecl {
    pub name: String,
    /// Associated-value slots in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<ParamSlot>,
    /// All custom attributes on the case, in source order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Vec<Attribute>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

impl CaseDecl {
    pub fn new(name: impl Into<String>) -> Self {
        CaseDecl {
            name: name.into(),
            params: Vec::new(),
            attributes: Vec::new(),
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_param(mut self, param: ParamSlot) -> Self {
        self.params.push(param);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// A declaration the `@Screens` marker was attached to.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: String,
    /// Explicit access modifier, `None` when the default applies.
    #[cfg_attr(feature = "serde", serde(default))]
    pub visibility: Option<Visibility>,
    /// Enum cases; ignored for any other kind.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cases: Vec<CaseDecl>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

impl Declaration {
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Declaration {
            kind,
            name: name.into(),
            visibility: None,
            cases: Vec::new(),
            span: Span::DUMMY,
        }
    }

    /// An enum declaration with no cases yet.
    pub fn new_enum(name: impl Into<String>) -> Self {
        Self::new(DeclKind::Enum, name)
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    #[must_use]
    pub fn with_case(mut self, case: CaseDecl) -> Self {
        self.cases.push(case);
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// View this declaration as an enum schema, if it is one.
    pub fn as_enum(&self) -> Option<EnumSchema<'_>> {
        (self.kind == DeclKind::Enum).then_some(EnumSchema {
            name: &self.name,
            visibility: self.visibility,
            cases: &self.cases,
            span: self.span,
        })
    }
}

/// An enum declaration, validated and borrowed for one generation pass.
#[derive(Copy, Clone, Debug)]
pub struct EnumSchema<'a> {
    pub name: &'a str,
    pub visibility: Option<Visibility>,
    pub cases: &'a [CaseDecl],
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_enum_only_for_enums() {
        let decl = Declaration::new_enum("Route")
            .with_visibility(Visibility::Public)
            .with_case(CaseDecl::new("home"));
        let schema = decl.as_enum();
        assert!(schema.is_some_and(|s| s.name == "Route" && s.cases.len() == 1));

        let decl = Declaration::new(DeclKind::Struct, "Route");
        assert!(decl.as_enum().is_none());
    }

    #[test]
    fn test_attribute_constructor_wraps_args() {
        let attr = Attribute::new("Screen", vec![Expr::ident("Home")]);
        assert!(attr.is_named("Screen"));
        assert_eq!(attr.args.len(), 1);
        assert_eq!(attr.args[0].span, Span::DUMMY);
    }

    #[test]
    fn test_visibility_keywords() {
        assert_eq!(Visibility::Fileprivate.to_string(), "fileprivate");
        assert_eq!(DeclKind::Protocol.to_string(), "protocol");
    }
}
