//! Rule catalogue command handler

use crate::error::Result;
use crate::output::{OutputWriter, RuleInfo};
use fieldcheck_core::RuleKind;

/// Handle the rules command
pub fn handle_rules(output: &mut OutputWriter) -> Result<()> {
    let rules: Vec<RuleInfo> = RuleKind::ALL.iter().copied().map(RuleInfo::from).collect();
    output.rules(&rules)
}
