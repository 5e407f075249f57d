//! Shared test helpers for codegen integration tests.

use fppgen_codegen::{generate_from_json, CodegenOptions, GeneratedFile};
use fppgen_test::read_shared_resource;

/// Installs a logger that writes to the test output.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Generates the files for a shared JSON model resource.
#[allow(dead_code)]
pub fn generate_resource(name: &str, options: &CodegenOptions) -> Vec<GeneratedFile> {
    init_logging();
    generate_from_json(&read_shared_resource(name), options).unwrap()
}

/// Returns the contents of the generated file with the name.
#[allow(dead_code)]
pub fn file<'a>(files: &'a [GeneratedFile], name: &str) -> &'a str {
    files
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.contents.as_str())
        .unwrap_or_else(|| panic!("No generated file named {}", name))
}
