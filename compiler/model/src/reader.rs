//! Reads a resolved model from a JSON document.
//!
//! The document is the hand-off point from the semantic checker. It uses
//! camelCase keys:
//!
//! ```json
//! {
//!   "enums": [
//!     { "name": "Mode", "namespace": ["M"], "serialType": "U8",
//!       "members": [{ "name": "OFF" }, { "name": "ON", "value": 3 }] }
//!   ],
//!   "constants": [{ "name": "greeting", "value": "say \"hi\"" }],
//!   "topologies": [
//!     { "name": "Ref", "stateType": "TopologyState",
//!       "instances": [{ "name": "c1", "component": "Svc::C", "baseId": 256 }] }
//!   ]
//! }
//! ```
//!
//! Member ordinals that are omitted continue from the previous member
//! (the first member defaults to 0).
use log::{debug, trace};
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::{
    check,
    constants::{ConstantDefinition, ConstantValue},
    core::QualifiedName,
    diagnostic::{Diagnostic, Label},
    enums::{EnumDefinition, EnumMember, SerialKind},
    model::Model,
    topology::{ComponentInstance, TopologyDefinition},
};
use fppgen_problems::Problem;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ModelDocument {
    #[serde(default)]
    enums: Vec<EnumDocument>,
    #[serde(default)]
    constants: Vec<ConstantDocument>,
    #[serde(default)]
    topologies: Vec<TopologyDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct EnumDocument {
    name: String,
    #[serde(default)]
    namespace: Vec<String>,
    #[serde(default)]
    serial_type: Option<String>,
    #[serde(default)]
    annotation: Option<String>,
    #[serde(default)]
    default: Option<String>,
    members: Vec<MemberDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct MemberDocument {
    name: String,
    #[serde(default)]
    value: Option<i64>,
    #[serde(default)]
    annotation: Option<String>,
}

/// A constant value that is not an integer. Integers are read from the
/// raw text so that values outside `i64` are not taken as floats.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ValueDocument {
    Boolean(bool),
    Float(f64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConstantDocument {
    name: String,
    #[serde(default)]
    namespace: Vec<String>,
    #[serde(default)]
    annotation: Option<String>,
    value: Box<RawValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct TopologyDocument {
    name: String,
    #[serde(default)]
    namespace: Vec<String>,
    state_type: String,
    #[serde(default)]
    instances: Vec<InstanceDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct InstanceDocument {
    name: String,
    component: String,
    #[serde(default)]
    base_id: Option<u32>,
    #[serde(default)]
    special_registration: bool,
    #[serde(default)]
    queue_size: Option<u32>,
}

/// Reads the model from the JSON text and checks its preconditions.
///
/// Returns `Ok(Model)` if the document is well formed and the model
/// satisfies the preconditions of code generation.
/// Returns `Err(Vec<Diagnostic>)` with every problem found otherwise.
pub fn read_model(text: &str) -> Result<Model, Vec<Diagnostic>> {
    let document: ModelDocument = serde_json::from_str(text).map_err(|err| {
        vec![Diagnostic::problem(
            Problem::ModelSyntax,
            Label::document(err.line(), err.column(), err.to_string()),
        )]
    })?;

    let (model, mut diagnostics) = convert(document);
    if let Err(problems) = check::preconditions(&model) {
        diagnostics.extend(problems);
    }
    if !diagnostics.is_empty() {
        return Err(diagnostics);
    }

    debug!(
        "read model with {} enums, {} constants, {} topologies",
        model.enums.len(),
        model.constants.len(),
        model.topologies.len()
    );
    Ok(model)
}

/// Converts every element that can be converted. Elements that cannot be
/// converted are left out of the model and reported.
fn convert(document: ModelDocument) -> (Model, Vec<Diagnostic>) {
    let mut diagnostics = vec![];
    let mut model = Model::new();

    for doc in document.enums {
        match convert_enum(doc) {
            Ok(definition) => model.enums.push(definition),
            Err(err) => diagnostics.push(err),
        }
    }

    for doc in document.constants {
        match convert_constant(doc) {
            Ok(definition) => model.constants.push(definition),
            Err(err) => diagnostics.push(err),
        }
    }

    for doc in document.topologies {
        let (definition, errs) = convert_topology(doc);
        model.topologies.push(definition);
        diagnostics.extend(errs);
    }

    (model, diagnostics)
}

fn convert_enum(doc: EnumDocument) -> Result<EnumDefinition, Diagnostic> {
    let name = QualifiedName::new(doc.name).in_namespace(doc.namespace);
    trace!("enum {}", name);

    let serial_kind = match doc.serial_type {
        Some(kind) => SerialKind::from_name(&kind).ok_or_else(|| {
            Diagnostic::problem(
                Problem::ModelSyntax,
                Label::element(format!("enum {}", name), "Unknown serial type"),
            )
            .with_context("serial type", &kind)
        })?,
        None => SerialKind::default(),
    };

    let mut next = 0i64;
    let mut members = Vec::with_capacity(doc.members.len());
    for member in doc.members {
        let ordinal = member.value.unwrap_or(next);
        next = ordinal.saturating_add(1);
        members.push(EnumMember {
            name: member.name,
            ordinal,
            annotation: member.annotation,
        });
    }

    Ok(EnumDefinition {
        name,
        serial_kind,
        members,
        default: doc.default,
        annotation: doc.annotation,
    })
}

fn convert_constant(doc: ConstantDocument) -> Result<ConstantDefinition, Diagnostic> {
    let name = QualifiedName::new(doc.name).in_namespace(doc.namespace);
    let value = convert_value(&name, &doc.value)?;
    Ok(ConstantDefinition {
        name,
        value,
        annotation: doc.annotation,
    })
}

fn convert_value(name: &QualifiedName, raw: &RawValue) -> Result<ConstantValue, Diagnostic> {
    let text = raw.get().trim();
    let invalid = |message: &str| {
        Diagnostic::problem(
            Problem::ModelSyntax,
            Label::element(format!("constant {}", name), message),
        )
        .with_context("value", text)
    };

    let is_integer = text.starts_with(|c: char| c == '-' || c.is_ascii_digit())
        && !text.contains(['.', 'e', 'E']);
    if is_integer {
        return text
            .parse::<i64>()
            .map(ConstantValue::Integer)
            .map_err(|_| invalid("Integer does not fit in a signed 64-bit value"));
    }

    match serde_json::from_str::<ValueDocument>(text) {
        Ok(ValueDocument::Boolean(val)) => Ok(ConstantValue::Boolean(val)),
        Ok(ValueDocument::Float(val)) => Ok(ConstantValue::Float(val)),
        Ok(ValueDocument::String(val)) => Ok(ConstantValue::String(val)),
        Err(_) => Err(invalid("Value must be a string, a number or a boolean")),
    }
}

/// Converts the topology. A duplicate instance is reported and the first
/// declaration is kept.
fn convert_topology(doc: TopologyDocument) -> (TopologyDefinition, Vec<Diagnostic>) {
    let mut topology = TopologyDefinition::new(
        QualifiedName::new(doc.name).in_namespace(doc.namespace),
        doc.state_type,
    );
    trace!("topology {}", topology.name);

    let mut diagnostics = vec![];
    for instance in doc.instances {
        let instance = ComponentInstance {
            name: instance.name,
            component_type: QualifiedName::from(instance.component.as_str()),
            base_id: instance.base_id,
            special_registration: instance.special_registration,
            queue_size: instance.queue_size,
        };
        if let Err(duplicate) = topology.instances.insert(instance) {
            let first = &topology.instances[duplicate.existing];
            diagnostics.push(
                Diagnostic::problem(
                    Problem::TopologyDuplicateInstance,
                    Label::element(
                        format!("topology {} instance {}", topology.name, first.name),
                        "First declaration",
                    ),
                )
                .with_context("instance", &duplicate.name)
                .with_secondary(Label::element(
                    format!("topology {} instance {}", topology.name, duplicate.name),
                    "Duplicate declaration",
                )),
            );
        }
    }

    (topology, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fppgen_test::read_shared_resource;
    use rstest::rstest;

    #[test]
    fn read_model_when_implicit_ordinals_then_continue_from_previous() {
        let text = r#"{ "enums": [{ "name": "E", "members": [
            { "name": "A" }, { "name": "B", "value": 5 }, { "name": "C" } ] }] }"#;

        let model = read_model(text).unwrap();

        let ordinals: Vec<i64> = model.enums[0].members.iter().map(|m| m.ordinal).collect();
        assert_eq!(ordinals, vec![0, 5, 6]);
        assert_eq!(model.enums[0].serial_kind, SerialKind::I32);
    }

    #[rstest]
    #[case(r#""text""#, ConstantValue::String("text".to_string()))]
    #[case("42", ConstantValue::Integer(42))]
    #[case("-1.5", ConstantValue::Float(-1.5))]
    #[case("true", ConstantValue::Boolean(true))]
    fn read_model_when_constant_value_then_kind_follows_json_type(
        #[case] value: &str,
        #[case] expected: ConstantValue,
    ) {
        let text = format!(r#"{{ "constants": [{{ "name": "c", "value": {} }}] }}"#, value);

        let model = read_model(&text).unwrap();

        assert_eq!(model.constants[0].value, expected);
    }

    #[rstest]
    #[case("18446744073709551615")]
    #[case("-9223372036854775809")]
    fn read_model_when_integer_outside_i64_then_syntax_error(#[case] value: &str) {
        let text = format!(r#"{{ "constants": [{{ "name": "c", "value": {} }}] }}"#, value);

        let diagnostics = read_model(&text).unwrap_err();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, Problem::ModelSyntax.code());
    }

    #[test]
    fn read_model_when_integer_at_i64_limit_then_integer() {
        let text = r#"{ "constants": [{ "name": "c", "value": 9223372036854775807 }] }"#;

        let model = read_model(text).unwrap();

        assert_eq!(model.constants[0].value, ConstantValue::Integer(i64::MAX));
    }

    #[test]
    fn read_model_when_constant_value_is_object_then_syntax_error() {
        let text = r#"{ "constants": [{ "name": "c", "value": { "x": 1 } }] }"#;

        let diagnostics = read_model(text).unwrap_err();

        assert_eq!(diagnostics[0].code, Problem::ModelSyntax.code());
    }

    #[test]
    fn read_model_when_conversion_and_rule_problems_then_reports_both() {
        let text = r#"{
            "enums": [{ "name": "E", "members": [] }],
            "topologies": [{ "name": "T", "stateType": "S", "instances": [
                { "name": "c1", "component": "C" }, { "name": "c1", "component": "C" } ] }]
        }"#;

        let diagnostics = read_model(text).unwrap_err();

        let codes: Vec<&str> = diagnostics.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(
            codes,
            vec![
                Problem::TopologyDuplicateInstance.code(),
                Problem::EnumNoMembers.code()
            ]
        );
    }

    #[test]
    fn read_model_when_not_json_then_syntax_error_with_position() {
        let diagnostics = read_model("{ \"enums\": [ }").unwrap_err();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, Problem::ModelSyntax.code());
        assert!(matches!(
            diagnostics[0].primary.location,
            crate::diagnostic::Location::Document(_)
        ));
    }

    #[test]
    fn read_model_when_unknown_serial_type_then_error() {
        let text = r#"{ "enums": [{ "name": "E", "serialType": "F32", "members": [{ "name": "A" }] }] }"#;

        let diagnostics = read_model(text).unwrap_err();

        assert_eq!(diagnostics[0].code, Problem::ModelSyntax.code());
    }

    #[test]
    fn read_model_when_duplicate_instance_then_error() {
        let text = r#"{ "topologies": [{ "name": "T", "stateType": "S", "instances": [
            { "name": "c1", "component": "C" }, { "name": "c1", "component": "C" } ] }] }"#;

        let diagnostics = read_model(text).unwrap_err();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, Problem::TopologyDuplicateInstance.code());
    }

    #[test]
    fn read_model_when_several_problems_then_reports_all() {
        let text = r#"{
            "enums": [{ "name": "E", "members": [] }],
            "constants": [{ "name": "bad name", "value": 1 }]
        }"#;

        let diagnostics = read_model(text).unwrap_err();

        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn read_model_when_commands_topology_then_instances_in_order() {
        let model = read_model(&read_shared_resource("commands_topology.json")).unwrap();

        let topology = &model.topologies[0];
        assert_eq!(topology.name.to_string(), "M::Commands");
        let names: Vec<&str> = topology.instances.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["c1", "c2"]);
        assert!(topology.instances.get("c1").unwrap().special_registration);
    }
}
