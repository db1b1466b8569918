//! Loading front-end declaration files.
//!
//! A file holds either a single declaration object or a compilation unit:
//!
//! ```text
//! { "kind": "enum", "name": "Route", "cases": [ ... ] }
//! { "declarations": [ { ... }, { ... } ] }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use screengen_diagnostic::{Diagnostic, ErrorCode};
use screengen_ir::Declaration;

/// Failure to read or decode a declaration file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read `{}`: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid declaration file `{}`: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The failure as an unlabeled `E0002` diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(ErrorCode::E0002).with_message(self.to_string());
        match self {
            LoadError::Io { .. } => diag,
            LoadError::Json { .. } => diag.with_suggestion(
                "a file holds one declaration object or `{ \"declarations\": [...] }`",
            ),
        }
    }
}

/// Key that marks a compilation-unit file.
const UNIT_KEY: &str = "declarations";

#[derive(Deserialize)]
struct CompilationUnit {
    declarations: Vec<Declaration>,
}

/// Decode declarations from JSON text. `path` is only used for errors.
pub fn parse_declarations(text: &str, path: &Path) -> Result<Vec<Declaration>, LoadError> {
    let json_error = |source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    };

    let value: serde_json::Value = serde_json::from_str(text).map_err(json_error)?;
    let is_unit = value.get(UNIT_KEY).is_some();

    if is_unit {
        let unit: CompilationUnit = serde_json::from_value(value).map_err(json_error)?;
        Ok(unit.declarations)
    } else {
        let decl: Declaration = serde_json::from_value(value).map_err(json_error)?;
        Ok(vec![decl])
    }
}

/// Read and decode a declaration file.
pub fn load_declarations(path: &Path) -> Result<Vec<Declaration>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decls = parse_declarations(&text, path)?;
    tracing::debug!(path = %path.display(), count = decls.len(), "loaded declarations");
    Ok(decls)
}
