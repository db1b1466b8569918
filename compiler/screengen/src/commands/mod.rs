//! Command handlers for the screengen CLI.
//!
//! Handlers take their output streams as parameters; `main.rs` passes
//! stdout/stderr, tests pass buffers.

use std::path::PathBuf;

use screengen_codegen::{ExpandOptions, MAX_INDENT_WIDTH};
use screengen_diagnostic::emitter::ColorMode;

mod explain;
mod generate;

pub use explain::explain_error;
pub use generate::{generate_files, RunSummary};

/// How diagnostics are written.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON array of diagnostics.
    Json,
}

impl std::str::FromStr for ErrorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ErrorFormat::Text),
            "json" => Ok(ErrorFormat::Json),
            other => Err(format!(
                "invalid error format `{other}` (expected text or json)"
            )),
        }
    }
}

/// Options shared by `generate` and `check`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub files: Vec<PathBuf>,
    /// Write generated source here instead of stdout.
    pub output: Option<PathBuf>,
    pub expand: ExpandOptions,
    pub error_format: ErrorFormat,
    pub color: ColorMode,
}

/// Parse the arguments following the command name.
///
/// Flags may appear anywhere; everything not starting with `-` is a file.
pub fn parse_cli_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "-o" {
            let Some(path) = iter.next() else {
                return Err("`-o` requires a path".to_string());
            };
            options.output = Some(PathBuf::from(path));
        } else if let Some(policy) = arg.strip_prefix("--unlabeled=") {
            options.expand.unlabeled_arguments = policy.parse()?;
        } else if let Some(width) = arg.strip_prefix("--indent=") {
            options.expand.indent_width = parse_indent_width(width)?;
        } else if let Some(format) = arg.strip_prefix("--error-format=") {
            options.error_format = format.parse()?;
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            options.color = mode.parse()?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}`"));
        } else {
            options.files.push(PathBuf::from(arg));
        }
    }

    if options.files.is_empty() {
        return Err("no input files".to_string());
    }
    Ok(options)
}

fn parse_indent_width(width: &str) -> Result<usize, String> {
    match width.parse::<usize>() {
        Ok(n) if (1..=MAX_INDENT_WIDTH).contains(&n) => Ok(n),
        Ok(_) => Err(format!(
            "indent width `{width}` out of range (expected 1 to {MAX_INDENT_WIDTH})"
        )),
        Err(_) => Err(format!("invalid indent width `{width}`")),
    }
}
