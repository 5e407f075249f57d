//! Generated files and the compilation units that group them.

/// One generated file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: String,
    pub contents: String,
}

/// A declaration file and its definition file for one model entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilationUnit {
    pub header: GeneratedFile,
    pub definition: GeneratedFile,
}

impl CompilationUnit {
    /// Creates the unit `<base_name>.hpp` and `<base_name>.cpp`.
    pub fn new(base_name: &str, header: String, definition: String) -> Self {
        Self {
            header: GeneratedFile {
                name: format!("{}.hpp", base_name),
                contents: header,
            },
            definition: GeneratedFile {
                name: format!("{}.cpp", base_name),
                contents: definition,
            },
        }
    }

    /// The header followed by the definition.
    pub fn into_files(self) -> [GeneratedFile; 2] {
        [self.header, self.definition]
    }
}
