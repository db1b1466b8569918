//! The `generate` and `check` commands.

use std::io::Write;

use screengen_codegen::expand_unit;
use screengen_diagnostic::emitter::DiagnosticEmitter;
use screengen_diagnostic::Diagnostic;

use super::CliOptions;
use crate::load::{load_declarations, LoadError};

/// Outcome of one run over all input files.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Declarations expanded successfully.
    pub generated: usize,
    /// Error diagnostics emitted, unreadable files included.
    pub errors: usize,
    /// Warnings emitted.
    pub warnings: usize,
    /// Files that could not be read or decoded.
    pub load_errors: Vec<LoadError>,
}

impl RunSummary {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    fn report(&mut self, emitter: &mut dyn DiagnosticEmitter, diagnostic: &Diagnostic) {
        emitter.emit(diagnostic);
        if diagnostic.is_error() {
            self.errors += 1;
        } else {
            self.warnings += 1;
        }
    }
}

/// Expand every declaration in `options.files`.
///
/// Generated source goes to `out` (separated by blank lines) when
/// `write_source` is set; `check` passes `false`. Every diagnostic,
/// including unreadable files, goes to `emitter` in file order, then
/// declaration order.
pub fn generate_files(
    options: &CliOptions,
    out: &mut dyn Write,
    emitter: &mut dyn DiagnosticEmitter,
    write_source: bool,
) -> std::io::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for path in &options.files {
        let decls = match load_declarations(path) {
            Ok(decls) => decls,
            Err(err) => {
                tracing::warn!(path = %path.display(), "skipping unreadable file");
                summary.report(emitter, &err.to_diagnostic());
                summary.load_errors.push(err);
                continue;
            }
        };

        for result in expand_unit(&decls, &options.expand) {
            match result {
                Ok(expansion) => {
                    for warning in &expansion.warnings {
                        summary.report(emitter, warning);
                    }

                    if write_source {
                        if summary.generated > 0 {
                            writeln!(out)?;
                        }
                        out.write_all(expansion.render(options.expand.indent_width).as_bytes())?;
                    }
                    summary.generated += 1;
                }
                Err(diag) => summary.report(emitter, &diag),
            }
        }
    }

    emitter.flush();
    Ok(summary)
}
