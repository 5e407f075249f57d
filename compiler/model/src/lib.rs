//! Provides the resolved model consumed by code generation: named
//! enumerations, literal constants and component topologies, together
//! with a reader that builds the model from a JSON document.
//!
//! The model is produced once and never mutated afterward.

pub mod constants;
pub mod core;
pub mod diagnostic;
pub mod enums;
pub mod model;
pub mod reader;
pub mod topology;
pub mod visitor;

mod check;
mod rule_constant_names_unique;
mod rule_constant_strings_valid;
mod rule_enum_members_valid;
mod rule_identifiers_valid;
mod rule_output_files_unique;

pub use reader::read_model;
