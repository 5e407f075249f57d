//! Rule that every name emitted into code is a valid C++ identifier.
//!
//! ## Passes
//!
//! ```ignore
//! { "enums": [{ "name": "Mode", "members": [{ "name": "ON" }] }] }
//! ```
//!
//! ## Fails
//!
//! ```ignore
//! { "enums": [{ "name": "Mode", "members": [{ "name": "on-off" }] }] }
//! ```
use crate::{
    check::RuleResult,
    constants::ConstantDefinition,
    core::{is_identifier, QualifiedName},
    diagnostic::{Diagnostic, Label},
    enums::EnumDefinition,
    model::Model,
    topology::TopologyDefinition,
    visitor::{visit_enum_definition, visit_topology_definition, Visitor},
};
use fppgen_problems::Problem;

pub fn apply(model: &Model) -> RuleResult {
    let mut visitor = RuleIdentifiersValid {
        diagnostics: Vec::new(),
    };
    visitor.walk(model).map_err(|e| vec![e])?;

    if !visitor.diagnostics.is_empty() {
        return Err(visitor.diagnostics);
    }
    Ok(())
}

struct RuleIdentifiersValid {
    diagnostics: Vec<Diagnostic>,
}

impl RuleIdentifiersValid {
    fn check(&mut self, text: &str, path: &str) {
        if !is_identifier(text) {
            self.diagnostics.push(
                Diagnostic::problem(Problem::InvalidIdentifier, Label::element(path, "Named here"))
                    .with_context("name", text),
            );
        }
    }

    fn check_qualified(&mut self, name: &QualifiedName, path: &str) {
        for segment in name.segments() {
            self.check(segment, path);
        }
    }
}

impl Visitor<Diagnostic> for RuleIdentifiersValid {
    type Value = ();

    fn visit_enum_definition(&mut self, node: &EnumDefinition) -> Result<(), Diagnostic> {
        let path = format!("enum {}", node.name);
        self.check_qualified(&node.name, &path);
        for member in &node.members {
            self.check(&member.name, &format!("{} member {}", path, member.name));
        }
        visit_enum_definition(self, node)
    }

    fn visit_constant_definition(&mut self, node: &ConstantDefinition) -> Result<(), Diagnostic> {
        self.check_qualified(&node.name, &format!("constant {}", node.name));
        Ok(())
    }

    fn visit_topology_definition(&mut self, node: &TopologyDefinition) -> Result<(), Diagnostic> {
        let path = format!("topology {}", node.name);
        self.check_qualified(&node.name, &path);
        self.check_qualified(&QualifiedName::from(node.state_type.as_str()), &path);
        for instance in node.instances.iter() {
            let instance_path = format!("{} instance {}", path, instance.name);
            self.check(&instance.name, &instance_path);
            self.check_qualified(&instance.component_type, &instance_path);
        }
        visit_topology_definition(self, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::EnumMember;
    use crate::topology::ComponentInstance;

    #[test]
    fn apply_when_names_valid_then_ok() {
        let model = Model::new().with_enum(EnumDefinition::new(
            "M::Mode",
            vec![EnumMember::new("ON", 0)],
        ));

        assert!(apply(&model).is_ok());
    }

    #[test]
    fn apply_when_member_name_has_dash_then_error() {
        let model = Model::new().with_enum(EnumDefinition::new(
            "Mode",
            vec![EnumMember::new("on-off", 0)],
        ));

        let diagnostics = apply(&model).unwrap_err();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, Problem::InvalidIdentifier.code());
    }

    #[test]
    fn apply_when_component_type_segment_invalid_then_error() {
        let topology = TopologyDefinition::new("T", "TopologyState")
            .with_instances([ComponentInstance::new("c1", "Svc::1Bad")])
            .unwrap();
        let model = Model::new().with_topology(topology);

        assert!(apply(&model).is_err());
    }
}
