//! Access-modifier mirroring.

use std::fmt;

use screengen_ir::Visibility;

/// The modifier written before the generated extension and its member.
///
/// Displays as the keyword followed by a space, or as nothing when the enum
/// had no explicit modifier.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct AccessModifier {
    visibility: Option<Visibility>,
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.visibility {
            Some(visibility) => write!(f, "{visibility} "),
            None => Ok(()),
        }
    }
}

/// Mirror an enum's declared access level. Each level maps to itself.
pub fn mirror_visibility(declared: Option<Visibility>) -> AccessModifier {
    AccessModifier {
        visibility: declared,
    }
}
