//! C++ code generation for F Prime models.
//!
//! This crate transforms a resolved model (`fppgen_model::model::Model`)
//! into C++ compilation units:
//!
//! - a serializable class per enumeration (`<Name>EnumAc.hpp/.cpp`)
//! - the literal constants (`FppConstants.hpp/.cpp`)
//! - the instances and setup functions of each topology
//!   (`<Name>TopologyAc.hpp/.cpp`)
//!
//! Emission is infallible once a model has been read. Identical input
//! produces byte-identical output.
//!
//! # Example
//!
//! ```ignore
//! use fppgen_codegen::{generate_from_json, CodegenOptions};
//!
//! let text = r#"{ "enums": [{ "name": "Mode", "members": [{ "name": "OFF" }, { "name": "ON" }] }] }"#;
//! let files = generate_from_json(text, &CodegenOptions::default()).unwrap();
//! assert_eq!(files[0].name, "ModeEnumAc.hpp");
//! ```
//!
//! # Behavior of generated code
//!
//! [`EnumLayout`] and [`SerialBuffer`] compute what generated enumeration
//! code does for a raw value and a buffer, and [`SetupPlan`] lists the
//! calls generated topology setup makes. Tools and tests use them to reason
//! about generated code without compiling it.

mod emit_constants;
mod emit_enum;
mod emit_topology;
mod enum_layout;
mod escape;
mod options;
mod serial;
mod setup_plan;
mod stages;
mod status;
mod unit;
mod writer;

pub use enum_layout::{EnumLayout, INVALID_LABEL};
pub use escape::{escape, unescape, UnescapeError};
pub use options::{CodegenOptions, InstanceStorage, NameLookup, ValidityPolicy};
pub use serial::SerialBuffer;
pub use setup_plan::{SetupPlan, WiringCall};
pub use stages::{generate, generate_from_json};
pub use status::SerializeStatus;
pub use unit::{CompilationUnit, GeneratedFile};
