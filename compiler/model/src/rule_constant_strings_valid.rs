//! Rule that string constants contain no NUL character. Generated code
//! stores them as C strings, which end at the first NUL.
//!
//! ## Passes
//!
//! ```ignore
//! { "constants": [{ "name": "s", "value": "text" }] }
//! ```
//!
//! ## Fails
//!
//! ```ignore
//! { "constants": [{ "name": "s", "value": "te\u0000xt" }] }
//! ```
use crate::{
    check::RuleResult,
    constants::{ConstantDefinition, ConstantValue},
    diagnostic::{Diagnostic, Label},
    model::Model,
    visitor::Visitor,
};
use fppgen_problems::Problem;

pub fn apply(model: &Model) -> RuleResult {
    let mut visitor = RuleConstantStringsValid {
        diagnostics: Vec::new(),
    };
    visitor.walk(model).map_err(|e| vec![e])?;

    if !visitor.diagnostics.is_empty() {
        return Err(visitor.diagnostics);
    }
    Ok(())
}

struct RuleConstantStringsValid {
    diagnostics: Vec<Diagnostic>,
}

impl Visitor<Diagnostic> for RuleConstantStringsValid {
    type Value = ();

    fn visit_constant_definition(&mut self, node: &ConstantDefinition) -> Result<(), Diagnostic> {
        if let ConstantValue::String(text) = &node.value {
            if let Some(pos) = text.find('\0') {
                self.diagnostics.push(
                    Diagnostic::problem(
                        Problem::ConstantStringHasNul,
                        Label::element(format!("constant {}", node.name), "Value assigned here"),
                    )
                    .with_context("byte", &pos.to_string()),
                );
            }
        }
        Ok(())
    }
}
