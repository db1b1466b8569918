//! Parameter extraction from a case's associated-value slots.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use screengen_ir::ParamSlot;

/// Prefix of synthesized binding names for unlabeled slots.
pub const PLACEHOLDER_PREFIX: &str = "param";

/// One associated value of a case, as the pattern binds it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParameterInfo {
    /// External label, `None` for unlabeled slots.
    pub label: Option<String>,
    /// Name the value is bound to in the pattern. Always present; see
    /// [`find_duplicate_binding`] for uniqueness.
    pub binding: String,
}

impl ParameterInfo {
    pub fn labeled(label: impl Into<String>) -> Self {
        let label = label.into();
        ParameterInfo {
            binding: label.clone(),
            label: Some(label),
        }
    }

    pub fn unlabeled(index: usize) -> Self {
        ParameterInfo {
            label: None,
            binding: placeholder_name(index),
        }
    }

    /// The key rename maps are matched against: the label when there is
    /// one, the binding name otherwise.
    pub fn source_key(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.binding)
    }
}

/// Most cases carry a handful of values at most.
pub type ParameterList = SmallVec<[ParameterInfo; 4]>;

/// `param0`, `param1`, ...
pub fn placeholder_name(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}")
}

/// Derive the ordered parameter list of a case.
///
/// Positions count every slot, labeled or not, so `(id: Int, String)` yields
/// `id` and `param1`.
pub fn extract_parameters(slots: &[ParamSlot]) -> ParameterList {
    slots
        .iter()
        .enumerate()
        .map(|(index, slot)| match (&slot.label, &slot.internal_name) {
            (Some(label), Some(internal)) => ParameterInfo {
                label: Some(label.clone()),
                binding: internal.clone(),
            },
            (Some(label), None) => ParameterInfo::labeled(label.clone()),
            (None, _) => ParameterInfo::unlabeled(index),
        })
        .collect()
}

/// Positions of the first two parameters bound to the same name, if any.
///
/// A label can coincide with a placeholder: `(param1: Int, String)` binds
/// `param1` twice.
pub fn find_duplicate_binding(params: &[ParameterInfo]) -> Option<(usize, usize)> {
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
    for (index, param) in params.iter().enumerate() {
        if let Some(&first) = seen.get(param.binding.as_str()) {
            return Some((first, index));
        }
        seen.insert(&param.binding, index);
    }
    None
}
