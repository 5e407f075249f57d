//! Generating the same model twice produces byte-identical files.

mod common;

use common::init_logging;
use fppgen_codegen::{generate, CodegenOptions};
use fppgen_model::constants::ConstantDefinition;
use fppgen_model::enums::{EnumDefinition, EnumMember};
use fppgen_model::model::Model;
use fppgen_model::topology::{ComponentInstance, TopologyDefinition};
use proptest::prelude::*;

fn model(names: &[String], text: &str) -> Model {
    let members = names
        .iter()
        .enumerate()
        .map(|(idx, name)| EnumMember::new(name.clone(), idx as i64 * 2))
        .collect();
    let instances = names
        .iter()
        .enumerate()
        .map(|(idx, name)| ComponentInstance::new(name.clone(), "Svc::C").with_base_id(idx as u32 * 0x100));
    Model::new()
        .with_enum(EnumDefinition::new("M::E", members))
        .with_constant(ConstantDefinition::string("text", text))
        .with_topology(TopologyDefinition::new("M::T", "S").with_instances(instances).unwrap())
}

proptest! {
    #[test]
    fn generate_when_same_model_twice_then_identical(
        names in prop::collection::btree_set("[a-z][a-z0-9_]{0,8}", 1..8),
        text in ".*",
    ) {
        init_logging();
        let names: Vec<String> = names.into_iter().collect();
        let model = model(&names, &text);

        for options in [CodegenOptions::default(), CodegenOptions::reference()] {
            let first = generate(&model, &options);
            let second = generate(&model.clone(), &options);
            prop_assert_eq!(first, second);
        }
    }
}
