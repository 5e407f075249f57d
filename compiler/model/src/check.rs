//! Runs the precondition rules on a model that was read from a document.

use log::debug;

use crate::{
    diagnostic::Diagnostic, model::Model, rule_constant_names_unique, rule_constant_strings_valid,
    rule_enum_members_valid, rule_identifiers_valid, rule_output_files_unique,
};

/// The result of a rule: `Ok` or every diagnostic the rule found.
pub(crate) type RuleResult = Result<(), Vec<Diagnostic>>;

/// Applies every rule and gathers all diagnostics so that a document with
/// several problems reports all of them at once.
pub(crate) fn preconditions(model: &Model) -> RuleResult {
    let rules: Vec<fn(&Model) -> RuleResult> = vec![
        rule_identifiers_valid::apply,
        rule_enum_members_valid::apply,
        rule_constant_names_unique::apply,
        rule_constant_strings_valid::apply,
        rule_output_files_unique::apply,
    ];

    let mut all_diagnostics = vec![];
    for rule in rules {
        if let Err(diagnostics) = rule(model) {
            all_diagnostics.extend(diagnostics);
        }
    }

    if !all_diagnostics.is_empty() {
        debug!("model has {} precondition problems", all_diagnostics.len());
        return Err(all_diagnostics);
    }

    Ok(())
}
