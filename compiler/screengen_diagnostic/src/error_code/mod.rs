//! Error codes for all generator diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`) whose first digit names
//! the stage that raises it. Codes are used for `explain` lookups; the
//! camelCase [`ErrorCode::name`] is the stable identifier tooling matches on.

use std::fmt;

/// Error codes for all generator diagnostics.
///
/// Format: E#### / W#### where the first digit indicates the stage:
/// - E0xxx: Declaration and input errors
/// - E1xxx: Case errors
/// - W1xxx: Case attribute warnings
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Declaration Errors (E0xxx)
    /// Marker attached to something other than an enum
    E0001,
    /// Declaration file could not be read or decoded
    E0002,

    // Case Attribute Errors (E1xxx)
    /// Attribute arguments match none of the supported shapes
    E1001,
    /// Second attribute argument is not a map literal
    E1002,
    /// Target type expression has an unsupported shape
    E1003,
    /// Two associated values of a case bind the same name
    E1004,

    // Case Attribute Warnings (W1xxx)
    /// Rename map keys that match no parameter
    W1001,
}

impl ErrorCode {
    /// All variants, for exhaustive testing and lookups.
    ///
    /// Kept in sync with `as_str()`; `test_all_variants_round_trip` catches
    /// an omission.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::W1001,
    ];

    /// The code as written in output, e.g. `"E1001"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::W1001 => "W1001",
        }
    }

    /// Stable camelCase identifier of the diagnostic kind.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "notAnEnum",
            ErrorCode::E0002 => "unreadableInput",
            ErrorCode::E1001 => "invalidScreenAttribute",
            ErrorCode::E1002 => "invalidMappingArgument",
            ErrorCode::E1003 => "unsupportedTypeExpression",
            ErrorCode::E1004 => "duplicateBinding",
            ErrorCode::W1001 => "unusedMappingKeys",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"`, or its camelCase name.
///
/// Codes are matched case-insensitively; names exactly.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper || code.name() == s)
            .copied()
            .ok_or(())
    }
}
