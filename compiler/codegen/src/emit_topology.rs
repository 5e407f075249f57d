//! Emits `<Name>TopologyAc.hpp` and `<Name>TopologyAc.cpp` for a topology.
//!
//! The header declares the identifier constants, the component instances
//! and the `setup`/`teardown` entry points. The definition file defines the
//! instances and the helper functions that `setup` calls in order:
//! `initComponents`, `setBaseIds`, `regCommands`.
//!
//! With [`InstanceStorage::Registry`] the instances are members of a
//! `Components` struct and every function takes it by reference. With
//! [`InstanceStorage::FileScope`] each instance is a file-scope object.
use fppgen_model::topology::TopologyDefinition;
use log::trace;

use crate::options::{CodegenOptions, InstanceStorage};
use crate::setup_plan::{SetupPlan, WiringCall};
use crate::unit::CompilationUnit;
use crate::writer::CppWriter;

/// Emits the header and definition file for the topology.
pub fn apply(topology: &TopologyDefinition, options: &CodegenOptions) -> CompilationUnit {
    let base_name = topology.file_base_name();
    trace!(
        "emitting topology {} with {} instances",
        topology.name,
        topology.instances.len()
    );

    let signatures = Signatures::new(topology, options.instance_storage);
    CompilationUnit::new(
        &base_name,
        emit_header(topology, &signatures, &base_name),
        emit_definition(topology, &signatures, &base_name),
    )
}

/// Parameter lists and call arguments that depend on instance storage.
struct Signatures {
    storage: InstanceStorage,
    state: String,
}

impl Signatures {
    fn new(topology: &TopologyDefinition, storage: InstanceStorage) -> Self {
        Self {
            storage,
            state: format!("const {}& state", topology.state_type),
        }
    }

    fn receiver(&self) -> &'static str {
        match self.storage {
            InstanceStorage::FileScope => "",
            InstanceStorage::Registry => "components.",
        }
    }

    /// The parameter list of a function, with or without the state.
    fn parameters(&self, with_state: bool) -> String {
        let mut params = vec![];
        if self.storage == InstanceStorage::Registry {
            params.push("Components& components".to_string());
        }
        if with_state {
            params.push(self.state.clone());
        }
        params.join(", ")
    }

    /// The argument list passed from `setup` to a helper function.
    fn arguments(&self, with_state: bool) -> String {
        let mut args = vec![];
        if self.storage == InstanceStorage::Registry {
            args.push("components");
        }
        if with_state {
            args.push("state");
        }
        args.join(", ")
    }
}

fn header_guard(topology: &TopologyDefinition, base_name: &str) -> String {
    let mut parts = topology.name.namespace.clone();
    parts.push(base_name.to_string());
    parts.push("HPP".to_string());
    parts.join("_")
}

/// Writes a function body. An empty body is a single blank line.
fn body(w: &mut CppWriter, statements: &[String]) {
    if statements.is_empty() {
        w.blank();
        return;
    }
    w.indent();
    for statement in statements {
        w.line(statement);
    }
    w.outdent();
}

fn function(w: &mut CppWriter, name: &str, parameters: &str, statements: &[String]) {
    w.line(&format!("void {}({}) {{", name, parameters));
    body(w, statements);
    w.line("}");
    w.blank();
}

fn statements(calls: &[WiringCall], receiver: &str) -> Vec<String> {
    calls.iter().map(|c| c.statement(receiver)).collect()
}

fn emit_definition(topology: &TopologyDefinition, sig: &Signatures, base_name: &str) -> String {
    let name = &topology.name;
    let plan = SetupPlan::new(topology);
    let mut w = CppWriter::new();

    w.banner(
        &format!("{}.cpp", base_name),
        &format!("cpp file for {} topology", name.name),
    );
    let header = format!("\"{}.hpp\"", base_name);
    w.includes(&[header.as_str()]);
    w.open_namespaces(&name.namespace);
    w.blank();

    match sig.storage {
        InstanceStorage::FileScope => {
            w.section("Component instances");
            for instance in topology.instances.iter() {
                w.line(&format!(
                    "{} {}(FW_OPTIONAL_NAME(\"{}\"));",
                    instance.component_type, instance.name, instance.name
                ));
                w.blank();
            }
        }
        InstanceStorage::Registry => {
            w.section("Component instances");
            w.line("Components ::");
            if topology.instances.is_empty() {
                w.line("  Components()");
            } else {
                w.line("  Components() :");
                let count = topology.instances.len();
                for (idx, instance) in topology.instances.iter().enumerate() {
                    let separator = if idx + 1 < count { "," } else { "" };
                    w.line(&format!(
                        "    {}(FW_OPTIONAL_NAME(\"{}\")){}",
                        instance.name, instance.name, separator
                    ));
                }
            }
            w.line("{");
            w.blank();
            w.line("}");
            w.blank();
        }
    }

    let receiver = sig.receiver();
    w.section("Helper functions");
    function(
        &mut w,
        "initComponents",
        &sig.parameters(true),
        &statements(&plan.init, receiver),
    );
    function(
        &mut w,
        "setBaseIds",
        &sig.parameters(false),
        &statements(&plan.base_ids, receiver),
    );
    function(
        &mut w,
        "regCommands",
        &sig.parameters(false),
        &statements(&plan.registrations, receiver),
    );

    w.section("Setup and teardown functions");
    function(
        &mut w,
        "setup",
        &sig.parameters(true),
        &[
            format!("initComponents({});", sig.arguments(true)),
            format!("setBaseIds({});", sig.arguments(false)),
            format!("regCommands({});", sig.arguments(false)),
        ],
    );
    function(&mut w, "teardown", &sig.parameters(true), &[]);

    w.close_namespaces(&name.namespace);
    w.finish()
}

fn emit_header(topology: &TopologyDefinition, sig: &Signatures, base_name: &str) -> String {
    let name = &topology.name;
    let instances = &topology.instances;
    let mut w = CppWriter::new();

    w.banner(
        &format!("{}.hpp", base_name),
        &format!("hpp file for {} topology", name.name),
    );
    w.open_guard(&header_guard(topology, base_name));
    let defs = format!("\"{}TopologyDefs.hpp\"", name.name);
    w.includes(&[defs.as_str()]);
    w.open_namespaces(&name.namespace);

    w.section("Constants");
    let base_ids: Vec<String> = instances
        .iter()
        .filter_map(|i| i.base_id.map(|id| format!("{} = {:#x},", i.name, id)))
        .collect();
    constant_namespace(&mut w, "BaseIds", &base_ids);
    let instance_ids: Vec<String> = instances.iter().map(|i| format!("{},", i.name)).collect();
    constant_namespace(&mut w, "InstanceIds", &instance_ids);
    let queue_sizes: Vec<String> = instances
        .iter()
        .filter_map(|i| i.queue_size.map(|size| format!("{} = {},", i.name, size)))
        .collect();
    constant_namespace(&mut w, "QueueSizes", &queue_sizes);

    w.section("Component instances");
    match sig.storage {
        InstanceStorage::FileScope => {
            for instance in instances.iter() {
                w.line(&format!("//! {}", instance.name));
                w.line(&format!(
                    "extern {} {};",
                    instance.component_type, instance.name
                ));
                w.blank();
            }
        }
        InstanceStorage::Registry => {
            w.line("//! The component instances of the topology");
            w.line("struct Components {");
            w.blank();
            w.indent();
            w.line("//! Constructs every instance with its name");
            w.line("Components();");
            w.blank();
            for instance in instances.iter() {
                w.line(&format!("//! {}", instance.name));
                w.line(&format!("{} {};", instance.component_type, instance.name));
                w.blank();
            }
            w.outdent();
            w.line("};");
            w.blank();
        }
    }

    w.section("Setup and teardown functions");
    prototype(&mut w, "Set up the topology", "setup", sig);
    prototype(&mut w, "Tear down the topology", "teardown", sig);

    w.close_namespaces(&name.namespace);
    w.blank();
    w.directive("#endif");
    w.finish()
}

/// Writes `namespace <name> { enum { ... }; }` unless there are no
/// enumerators.
fn constant_namespace(w: &mut CppWriter, name: &str, enumerators: &[String]) {
    if enumerators.is_empty() {
        return;
    }
    w.line(&format!("namespace {} {{", name));
    w.line("  enum {");
    w.indent();
    w.indent();
    for enumerator in enumerators {
        w.line(enumerator);
    }
    w.outdent();
    w.outdent();
    w.line("  };");
    w.line("}");
    w.blank();
}

fn prototype(w: &mut CppWriter, brief: &str, function: &str, sig: &Signatures) {
    w.line(&format!("//! {}", brief));
    w.line(&format!("void {}(", function));
    if sig.storage == InstanceStorage::Registry {
        w.line("    Components& components, //!< The component instances");
    }
    w.line(&format!("    {} //!< The topology state", sig.state));
    w.line(");");
    w.blank();
}
