//! Dispatcher switch synthesis.

use crate::args::build_arguments;
use crate::mapping::RenameMap;
use crate::options::UnlabeledArgumentPolicy;
use crate::output::{Arm, CasePattern, ConstructorCall, PatternBinding, SwitchBody};
use crate::params::ParameterList;

/// Everything needed to emit one arm.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CaseInfo {
    pub case_name: String,
    pub target: String,
    pub params: ParameterList,
    pub renames: RenameMap,
}

/// Build one arm per case, in the given order.
///
/// Patterns bind with the source labels; calls use the renamed labels.
pub fn synthesize_switch(cases: &[CaseInfo], policy: UnlabeledArgumentPolicy) -> SwitchBody {
    SwitchBody {
        arms: cases.iter().map(|case| synthesize_arm(case, policy)).collect(),
    }
}

fn synthesize_arm(case: &CaseInfo, policy: UnlabeledArgumentPolicy) -> Arm {
    let bindings = case
        .params
        .iter()
        .map(|param| PatternBinding {
            label: param.label.clone(),
            name: param.binding.clone(),
        })
        .collect();

    Arm {
        pattern: CasePattern {
            case_name: case.case_name.clone(),
            bindings,
        },
        call: ConstructorCall {
            target: case.target.clone(),
            args: build_arguments(&case.params, &case.renames, policy),
        },
    }
}
