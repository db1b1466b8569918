//! Constructor-call argument construction.
//!
//! Each parameter contributes exactly one argument, in order. The call-site
//! label comes from the rename map when the parameter's source key is mapped,
//! otherwise from the parameter's own label. Mapping a key to `_` drops the
//! label.

use crate::mapping::RenameMap;
use crate::options::UnlabeledArgumentPolicy;
use crate::output::CallArg;
use crate::params::ParameterInfo;

/// Rename target that passes the value without a label.
pub const LABEL_STRIP_SENTINEL: &str = "_";

/// Build the argument list for one case's constructor call.
pub fn build_arguments(
    params: &[ParameterInfo],
    renames: &RenameMap,
    policy: UnlabeledArgumentPolicy,
) -> Vec<CallArg> {
    params
        .iter()
        .map(|param| build_argument(param, renames, policy))
        .collect()
}

fn build_argument(
    param: &ParameterInfo,
    renames: &RenameMap,
    policy: UnlabeledArgumentPolicy,
) -> CallArg {
    let value = param.binding.clone();

    match renames.get(param.source_key()) {
        Some(LABEL_STRIP_SENTINEL) => CallArg::positional(value),
        Some(target) => CallArg::labeled(target, value),
        None => match (&param.label, policy) {
            (Some(label), _) => CallArg::labeled(label.clone(), value),
            (None, UnlabeledArgumentPolicy::Positional) => CallArg::positional(value),
            (None, UnlabeledArgumentPolicy::LabelWithBindingName) => {
                CallArg::labeled(param.binding.clone(), value)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn renames(entries: &[(&str, &str)]) -> RenameMap {
        entries.iter().copied().collect()
    }

    fn render(args: &[CallArg]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_labeled_pass_through() {
        let params = [ParameterInfo::labeled("id")];
        let args = build_arguments(&params, &RenameMap::new(), UnlabeledArgumentPolicy::default());
        assert_eq!(render(&args), vec!["id: id"]);
    }

    #[test]
    fn test_rename_changes_label_not_value() {
        let params = [ParameterInfo {
            label: Some("userId".to_string()),
            binding: "uid".to_string(),
        }];
        let args = build_arguments(
            &params,
            &renames(&[("userId", "id")]),
            UnlabeledArgumentPolicy::default(),
        );
        assert_eq!(render(&args), vec!["id: uid"]);
    }

    #[test]
    fn test_sentinel_strips_label() {
        let params = [ParameterInfo::labeled("title")];
        let args = build_arguments(
            &params,
            &renames(&[("title", "_")]),
            UnlabeledArgumentPolicy::default(),
        );
        assert_eq!(args, vec![CallArg::positional("title")]);
    }

    #[test]
    fn test_unlabeled_policies() {
        let params = [ParameterInfo::unlabeled(0)];
        let positional =
            build_arguments(&params, &RenameMap::new(), UnlabeledArgumentPolicy::Positional);
        let labeled = build_arguments(
            &params,
            &RenameMap::new(),
            UnlabeledArgumentPolicy::LabelWithBindingName,
        );
        assert_eq!(render(&positional), vec!["param0"]);
        assert_eq!(render(&labeled), vec!["param0: param0"]);
    }

    #[test]
    fn test_unlabeled_can_be_renamed_by_placeholder() {
        let params = [ParameterInfo::unlabeled(0), ParameterInfo::unlabeled(1)];
        let args = build_arguments(
            &params,
            &renames(&[("param1", "count")]),
            UnlabeledArgumentPolicy::LabelWithBindingName,
        );
        assert_eq!(render(&args), vec!["param0: param0", "count: param1"]);
    }

    #[test]
    fn test_sentinel_overrides_labeled_policy() {
        let params = [ParameterInfo::unlabeled(0)];
        let args = build_arguments(
            &params,
            &renames(&[("param0", "_")]),
            UnlabeledArgumentPolicy::LabelWithBindingName,
        );
        assert_eq!(render(&args), vec!["param0"]);
    }

    #[test]
    fn test_no_parameters_no_arguments() {
        let args = build_arguments(
            &[],
            &renames(&[("id", "x")]),
            UnlabeledArgumentPolicy::default(),
        );
        assert!(args.is_empty());
    }
}
