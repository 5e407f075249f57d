//! Rule that no two definitions generate files with the same name.
//!
//! File names use only the short name of a definition, so `A::E` and
//! `B::E` would both write `EEnumAc.hpp`.
//!
//! ## Passes
//!
//! ```ignore
//! { "enums": [{ "name": "E", "namespace": ["A"], "members": [{ "name": "X" }] },
//!             { "name": "F", "namespace": ["B"], "members": [{ "name": "X" }] }] }
//! ```
//!
//! ## Fails
//!
//! ```ignore
//! { "enums": [{ "name": "E", "namespace": ["A"], "members": [{ "name": "X" }] },
//!             { "name": "E", "namespace": ["B"], "members": [{ "name": "X" }] }] }
//! ```
use std::collections::HashMap;

use crate::{
    check::RuleResult,
    constants::{ConstantDefinition, CONSTANTS_FILE_BASE_NAME},
    diagnostic::{Diagnostic, Label},
    enums::EnumDefinition,
    model::Model,
    topology::TopologyDefinition,
    visitor::Visitor,
};
use fppgen_problems::Problem;

pub fn apply(model: &Model) -> RuleResult {
    let mut visitor = RuleOutputFilesUnique {
        seen: HashMap::new(),
        constants_seen: false,
        diagnostics: Vec::new(),
    };
    visitor.walk(model).map_err(|e| vec![e])?;

    if !visitor.diagnostics.is_empty() {
        return Err(visitor.diagnostics);
    }
    Ok(())
}

struct RuleOutputFilesUnique {
    /// File base name to the element that first claimed it.
    seen: HashMap<String, String>,
    constants_seen: bool,
    diagnostics: Vec<Diagnostic>,
}

impl RuleOutputFilesUnique {
    fn claim(&mut self, base_name: String, element: String) {
        match self.seen.get(&base_name) {
            Some(first) => {
                self.diagnostics.push(
                    Diagnostic::problem(
                        Problem::OutputFileCollision,
                        Label::element(first.as_str(), "First definition"),
                    )
                    .with_context("file", &base_name)
                    .with_secondary(Label::element(element, "Generates the same file")),
                );
            }
            None => {
                self.seen.insert(base_name, element);
            }
        }
    }
}

impl Visitor<Diagnostic> for RuleOutputFilesUnique {
    type Value = ();

    fn visit_enum_definition(&mut self, node: &EnumDefinition) -> Result<(), Diagnostic> {
        self.claim(node.file_base_name(), format!("enum {}", node.name));
        Ok(())
    }

    fn visit_constant_definition(&mut self, node: &ConstantDefinition) -> Result<(), Diagnostic> {
        // All constants share one unit.
        if !self.constants_seen {
            self.constants_seen = true;
            self.claim(
                CONSTANTS_FILE_BASE_NAME.to_string(),
                format!("constant {}", node.name),
            );
        }
        Ok(())
    }

    fn visit_topology_definition(&mut self, node: &TopologyDefinition) -> Result<(), Diagnostic> {
        self.claim(node.file_base_name(), format!("topology {}", node.name));
        Ok(())
    }
}
