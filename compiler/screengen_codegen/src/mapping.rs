//! Rename maps and their validation against a case's parameters.

use rustc_hash::FxHashMap;

use screengen_diagnostic::{Diagnostic, Span};

use crate::errors::{KeyList, UnusedMappingKeys};
use crate::params::ParameterInfo;

/// Source key to call-site label. Keys are unique; a later insert of the
/// same key replaces the earlier value.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct RenameMap {
    entries: FxHashMap<String, String>,
}

impl RenameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.entries.insert(from.into(), to.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RenameMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = RenameMap::new();
        for (from, to) in iter {
            map.insert(from, to);
        }
        map
    }
}

/// Mapping keys that match no parameter, sorted.
///
/// A key matches a parameter when it equals the parameter's label, or its
/// binding name when the parameter is unlabeled. Matching is exact.
pub fn unused_mapping_keys(renames: &RenameMap, params: &[ParameterInfo]) -> Vec<String> {
    let mut unused: Vec<String> = renames
        .keys()
        .filter(|key| !params.iter().any(|p| p.source_key() == *key))
        .map(str::to_owned)
        .collect();
    unused.sort_unstable();
    unused
}

/// Check a case's rename map, producing one combined warning for every key
/// that matches nothing.
pub fn validate_mapping(
    case_name: &str,
    renames: &RenameMap,
    params: &[ParameterInfo],
    anchor: Span,
) -> Option<Diagnostic> {
    if renames.is_empty() {
        return None;
    }

    let keys = unused_mapping_keys(renames, params);
    if keys.is_empty() {
        return None;
    }

    tracing::debug!(case = case_name, ?keys, "unused mapping keys");
    Some(
        UnusedMappingKeys {
            span: anchor,
            keys: KeyList(keys),
            case_name: case_name.to_owned(),
        }
        .into_diagnostic(),
    )
}
