//! Expansion options.

/// How an unlabeled, unmapped parameter is passed at the call site.
///
/// For `case preview(Int)` the pattern binds `param0`; the two policies
/// produce `Preview(param0)` and `Preview(param0: param0)` respectively.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub enum UnlabeledArgumentPolicy {
    /// Pass the value without a label.
    #[default]
    Positional,
    /// Label the argument with its placeholder name.
    LabelWithBindingName,
}

impl UnlabeledArgumentPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            UnlabeledArgumentPolicy::Positional => "positional",
            UnlabeledArgumentPolicy::LabelWithBindingName => "labeled",
        }
    }
}

impl std::str::FromStr for UnlabeledArgumentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positional" => Ok(UnlabeledArgumentPolicy::Positional),
            "labeled" => Ok(UnlabeledArgumentPolicy::LabelWithBindingName),
            other => Err(format!(
                "invalid unlabeled-argument policy `{other}` (expected positional or labeled)"
            )),
        }
    }
}

/// Knobs for one expansion run.
///
/// The defaults produce a SwiftUI-style extension:
///
/// ```text
/// extension Route: View, ScreensProtocol {
///     @MainActor
///     @ViewBuilder
///     var body: some View { ... }
/// }
/// ```
/// Widest indentation unit the renderer honors; wider requests are clamped.
pub const MAX_INDENT_WIDTH: usize = 16;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ExpandOptions {
    pub unlabeled_arguments: UnlabeledArgumentPolicy,
    /// Capabilities the generated extension conforms to.
    pub conformances: Vec<String>,
    pub member_name: String,
    pub member_type: String,
    /// Attributes written above the generated member, in order.
    pub member_attributes: Vec<String>,
    /// Spaces per indentation level when rendering, at most
    /// [`MAX_INDENT_WIDTH`].
    pub indent_width: usize,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        ExpandOptions {
            unlabeled_arguments: UnlabeledArgumentPolicy::default(),
            conformances: vec!["View".to_string(), "ScreensProtocol".to_string()],
            member_name: "body".to_string(),
            member_type: "some View".to_string(),
            member_attributes: vec!["@MainActor".to_string(), "@ViewBuilder".to_string()],
            indent_width: 4,
        }
    }
}
