//! The generated declaration and its textual rendering.
//!
//! The engine builds an [`ExtensionDecl`] tree; [`render`] prints it with a
//! fixed layout so identical input always yields byte-identical text.

use std::fmt;

use crate::options::MAX_INDENT_WIDTH;
use crate::visibility::AccessModifier;

/// One name bound by a case pattern: `id: let id` or `let param0`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PatternBinding {
    /// Source label of the associated value.
    pub label: Option<String>,
    pub name: String,
}

impl fmt::Display for PatternBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{label}: let {}", self.name),
            None => write!(f, "let {}", self.name),
        }
    }
}

/// `.detail(id: let id)`, or `.home` for a case without values.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CasePattern {
    pub case_name: String,
    pub bindings: Vec<PatternBinding>,
}

impl fmt::Display for CasePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.case_name)?;
        if self.bindings.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        write_comma_separated(f, &self.bindings)?;
        f.write_str(")")
    }
}

/// One constructor argument: `id: userId` or `param0`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CallArg {
    pub label: Option<String>,
    pub value: String,
}

impl CallArg {
    pub fn labeled(label: impl Into<String>, value: impl Into<String>) -> Self {
        CallArg {
            label: Some(label.into()),
            value: value.into(),
        }
    }

    pub fn positional(value: impl Into<String>) -> Self {
        CallArg {
            label: None,
            value: value.into(),
        }
    }
}

impl fmt::Display for CallArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{label}: {}", self.value),
            None => f.write_str(&self.value),
        }
    }
}

/// `Detail(id: id)`; `Home()` when there are no arguments.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ConstructorCall {
    pub target: String,
    pub args: Vec<CallArg>,
}

impl fmt::Display for ConstructorCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.target)?;
        write_comma_separated(f, &self.args)?;
        f.write_str(")")
    }
}

/// One arm of the dispatcher switch.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Arm {
    pub pattern: CasePattern,
    pub call: ConstructorCall,
}

impl fmt::Display for Arm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pattern, self.call)
    }
}

/// `switch self { ... }` with one arm per case, in declaration order.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct SwitchBody {
    pub arms: Vec<Arm>,
}

/// The single computed member of the extension.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ComputedMember {
    pub modifier: AccessModifier,
    pub attributes: Vec<String>,
    pub name: String,
    pub ty: String,
    pub body: SwitchBody,
}

/// The generated extension on the enum.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ExtensionDecl {
    pub modifier: AccessModifier,
    pub type_name: String,
    pub conformances: Vec<String>,
    pub member: ComputedMember,
}

fn write_comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Line-oriented writer with a fixed indentation unit.
struct Printer {
    out: String,
    unit: usize,
    depth: usize,
}

impl Printer {
    fn new(unit: usize) -> Self {
        Printer {
            out: String::new(),
            unit: unit.min(MAX_INDENT_WIDTH),
            depth: 0,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth * self.unit {
            self.out.push(' ');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Render an extension declaration as source text.
///
/// `indent_width` is the number of spaces per nesting level, clamped to
/// [`MAX_INDENT_WIDTH`]. The case labels sit at the same depth as `switch`,
/// arm bodies one level deeper.
pub fn render(decl: &ExtensionDecl, indent_width: usize) -> String {
    let mut p = Printer::new(indent_width);

    let header = if decl.conformances.is_empty() {
        format!("{}extension {} {{", decl.modifier, decl.type_name)
    } else {
        format!(
            "{}extension {}: {} {{",
            decl.modifier,
            decl.type_name,
            decl.conformances.join(", ")
        )
    };
    p.line(&header);
    p.indent();

    let member = &decl.member;
    for attribute in &member.attributes {
        p.line(attribute);
    }
    p.line(&format!(
        "{}var {}: {} {{",
        member.modifier, member.name, member.ty
    ));
    p.indent();

    p.line("switch self {");
    for arm in &member.body.arms {
        p.line(&format!("case {}:", arm.pattern));
        p.indent();
        p.line(&arm.call.to_string());
        p.dedent();
    }
    p.line("}");

    p.dedent();
    p.line("}");
    p.dedent();
    p.line("}");

    p.out
}
