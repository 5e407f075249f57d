//! Runs the emitters over a model and collects the generated files.
use fppgen_model::diagnostic::Diagnostic;
use fppgen_model::model::Model;
use fppgen_model::read_model;
use log::debug;

use crate::options::CodegenOptions;
use crate::unit::{CompilationUnit, GeneratedFile};
use crate::{emit_constants, emit_enum, emit_topology};

/// Generates the files for the model.
///
/// Files are in model order: every enumeration, then the constants (when
/// the model has any), then every topology. Each unit contributes its
/// header followed by its definition file.
pub fn generate(model: &Model, options: &CodegenOptions) -> Vec<GeneratedFile> {
    let mut units: Vec<CompilationUnit> = model
        .enums
        .iter()
        .map(|definition| emit_enum::apply(definition, options))
        .collect();
    if !model.constants.is_empty() {
        units.push(emit_constants::apply(&model.constants));
    }
    units.extend(
        model
            .topologies
            .iter()
            .map(|topology| emit_topology::apply(topology, options)),
    );

    units
        .into_iter()
        .flat_map(|unit| {
            debug!(
                "emitted {} ({} bytes) and {} ({} bytes)",
                unit.header.name,
                unit.header.contents.len(),
                unit.definition.name,
                unit.definition.contents.len()
            );
            unit.into_files()
        })
        .collect()
}

/// Reads the model from JSON text and generates its files.
///
/// Returns `Err(Vec<Diagnostic>)` when the document cannot be read or the
/// model does not satisfy the preconditions of code generation.
pub fn generate_from_json(
    text: &str,
    options: &CodegenOptions,
) -> Result<Vec<GeneratedFile>, Vec<Diagnostic>> {
    let model = read_model(text)?;
    Ok(generate(&model, options))
}
