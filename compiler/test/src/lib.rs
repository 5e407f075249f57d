//! Access to the reference documents and outputs under `resources/test`.

use std::{fs, path::PathBuf};

/// Reads a shared resource into a string.
///
/// Panics if the resource does not exist. Only for use in tests.
pub fn read_shared_resource(name: &str) -> String {
    let path = shared_resource_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Unable to read {}: {}", path.display(), e))
}

/// Returns the path of a shared resource.
pub fn shared_resource_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("..");
    path.push("resources");
    path.push("test");
    path.push(name);
    path
}
