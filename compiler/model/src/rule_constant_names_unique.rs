//! Rule that constant names are unique once flattened to the names used
//! in code, so `A::b` and `A_b` collide.
//!
//! ## Passes
//!
//! ```ignore
//! { "constants": [{ "name": "a", "value": 1 }, { "name": "b", "value": 2 }] }
//! ```
//!
//! ## Fails
//!
//! ```ignore
//! { "constants": [{ "name": "a", "value": 1 }, { "name": "a", "value": 2 }] }
//! ```
use std::collections::HashMap;

use crate::{
    check::RuleResult,
    constants::ConstantDefinition,
    diagnostic::{Diagnostic, Label},
    model::Model,
    visitor::Visitor,
};
use fppgen_problems::Problem;

pub fn apply(model: &Model) -> RuleResult {
    let mut visitor = RuleConstantNamesUnique {
        seen: HashMap::new(),
        diagnostics: Vec::new(),
    };
    visitor.walk(model).map_err(|e| vec![e])?;

    if !visitor.diagnostics.is_empty() {
        return Err(visitor.diagnostics);
    }
    Ok(())
}

struct RuleConstantNamesUnique {
    /// Flattened name to the name as written in the model.
    seen: HashMap<String, String>,
    diagnostics: Vec<Diagnostic>,
}

impl Visitor<Diagnostic> for RuleConstantNamesUnique {
    type Value = ();

    fn visit_constant_definition(&mut self, node: &ConstantDefinition) -> Result<(), Diagnostic> {
        let flattened = node.name.flattened();
        match self.seen.get(&flattened) {
            Some(first) => {
                self.diagnostics.push(
                    Diagnostic::problem(
                        Problem::ConstantDuplicateName,
                        Label::element(format!("constant {}", first), "First declaration"),
                    )
                    .with_context("name", &flattened)
                    .with_secondary(Label::element(
                        format!("constant {}", node.name),
                        "Duplicate declaration",
                    )),
                );
            }
            None => {
                self.seen.insert(flattened, node.name.to_string());
            }
        }
        Ok(())
    }
}
