//! The `explain` command: print documentation for a diagnostic code.

use std::io::Write;

use screengen_diagnostic::{ErrorCode, ErrorDocs};

/// Write the documentation for `code_str` (a code like `E1002` or a name
/// like `invalidMappingArgument`) to `out`.
pub fn explain_error(code_str: &str, out: &mut dyn Write) -> Result<(), String> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        let known: Vec<&str> = ErrorDocs::all_codes().map(|code| code.as_str()).collect();
        return Err(format!(
            "unknown error code `{code_str}`; documented codes: {}",
            known.join(", ")
        ));
    };

    let Some(doc) = ErrorDocs::get(code) else {
        return Err(format!("no documentation available for {code}"));
    };

    writeln!(out, "{doc}").map_err(|err| err.to_string())
}
