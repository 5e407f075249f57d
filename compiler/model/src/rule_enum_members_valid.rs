//! Rule that enumeration members are well formed: at least one member,
//! unique names, unique ordinals that fit the serial kind, and a declared
//! default.
//!
//! ## Passes
//!
//! ```ignore
//! { "name": "Mode", "serialType": "U8", "members": [{ "name": "OFF" }, { "name": "ON" }] }
//! ```
//!
//! ## Fails
//!
//! ```ignore
//! { "name": "Mode", "serialType": "U8", "members": [{ "name": "OFF", "value": 256 }] }
//! ```
use std::collections::HashMap;

use crate::{
    check::RuleResult,
    diagnostic::{Diagnostic, Label},
    enums::EnumDefinition,
    model::Model,
    visitor::Visitor,
};
use fppgen_problems::Problem;

pub fn apply(model: &Model) -> RuleResult {
    let mut visitor = RuleEnumMembersValid {
        diagnostics: Vec::new(),
    };
    visitor.walk(model).map_err(|e| vec![e])?;

    if !visitor.diagnostics.is_empty() {
        return Err(visitor.diagnostics);
    }
    Ok(())
}

struct RuleEnumMembersValid {
    diagnostics: Vec<Diagnostic>,
}

impl Visitor<Diagnostic> for RuleEnumMembersValid {
    type Value = ();

    fn visit_enum_definition(&mut self, node: &EnumDefinition) -> Result<(), Diagnostic> {
        let path = format!("enum {}", node.name);

        if node.members.is_empty() {
            self.diagnostics.push(
                Diagnostic::problem(Problem::EnumNoMembers, Label::element(&path, "Declared here"))
                    .with_context("enum", &node.name.to_string()),
            );
            return Ok(());
        }

        let range = node.serial_kind.range();
        let mut seen_names: HashMap<&str, usize> = HashMap::new();
        let mut seen_ordinals: HashMap<i64, &str> = HashMap::new();

        for (idx, member) in node.members.iter().enumerate() {
            let member_path = format!("{} member {}", path, member.name);

            if seen_names.insert(&member.name, idx).is_some() {
                self.diagnostics.push(
                    Diagnostic::problem(
                        Problem::EnumDuplicateMember,
                        Label::element(&member_path, "Duplicate member"),
                    )
                    .with_context("enum", &node.name.to_string()),
                );
            }

            match seen_ordinals.get(&member.ordinal) {
                Some(first) => {
                    self.diagnostics.push(
                        Diagnostic::problem(
                            Problem::EnumDuplicateOrdinal,
                            Label::element(
                                format!("{} member {}", path, first),
                                "First member with the ordinal",
                            ),
                        )
                        .with_context("ordinal", &member.ordinal.to_string())
                        .with_secondary(Label::element(&member_path, "Duplicate ordinal")),
                    );
                }
                None => {
                    seen_ordinals.insert(member.ordinal, &member.name);
                }
            }

            if !range.contains(&member.ordinal) {
                self.diagnostics.push(
                    Diagnostic::problem(
                        Problem::EnumOrdinalOutOfRange,
                        Label::element(&member_path, "Ordinal assigned here"),
                    )
                    .with_context("ordinal", &member.ordinal.to_string())
                    .with_context("serial type", node.serial_kind.name()),
                );
            }
        }

        if let Some(default) = &node.default {
            if !seen_names.contains_key(default.as_str()) {
                self.diagnostics.push(
                    Diagnostic::problem(
                        Problem::EnumDefaultNotDeclared,
                        Label::element(&path, "Default named here"),
                    )
                    .with_context("default", default),
                );
            }
        }

        Ok(())
    }
}
