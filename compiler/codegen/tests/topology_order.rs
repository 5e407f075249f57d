//! Topology setup initializes, then assigns base identifiers, then registers
//! commands, each in model order.

mod common;

use common::{file, generate_resource};
use fppgen_codegen::{CodegenOptions, SetupPlan, WiringCall};
use fppgen_model::read_model;
use fppgen_test::read_shared_resource;
use rstest::rstest;

#[test]
fn setup_plan_when_commands_topology_then_phase_order() {
    let model = read_model(&read_shared_resource("commands_topology.json")).unwrap();
    let plan = SetupPlan::new(&model.topologies[0]);

    let calls: Vec<WiringCall> = plan.calls().copied().collect();

    assert_eq!(
        calls,
        vec![
            WiringCall::Init { instance: "c1", queued: false },
            WiringCall::Init { instance: "c2", queued: false },
            WiringCall::SetIdBase { instance: "c1" },
            WiringCall::SetIdBase { instance: "c2" },
            WiringCall::RegCommands { instance: "c1", special: true },
            WiringCall::RegCommands { instance: "c2", special: false },
        ]
    );
}

#[rstest]
#[case(CodegenOptions::reference(), "")]
#[case(CodegenOptions::default(), "components.")]
fn generate_when_commands_topology_then_statements_follow_plan(
    #[case] options: CodegenOptions,
    #[case] receiver: &str,
) {
    let model = read_model(&read_shared_resource("commands_topology.json")).unwrap();
    let plan = SetupPlan::new(&model.topologies[0]);
    let files = generate_resource("commands_topology.json", &options);
    let definition = file(&files, "CommandsTopologyAc.cpp");

    let positions: Vec<usize> = plan
        .calls()
        .map(|call| {
            let statement = call.statement(receiver);
            definition
                .find(&statement)
                .unwrap_or_else(|| panic!("missing {}", statement))
        })
        .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn generate_when_registry_then_setup_calls_helpers_in_order() {
    let files = generate_resource("commands_topology.json", &CodegenOptions::default());

    let definition = file(&files, "CommandsTopologyAc.cpp");
    assert!(definition.contains(
        "  void setup(Components& components, const TopologyState& state) {\n    initComponents(components, state);\n    setBaseIds(components);\n    regCommands(components);\n  }\n"
    ));
    assert!(definition.contains(
        "  void teardown(Components& components, const TopologyState& state) {\n\n  }\n"
    ));
}
