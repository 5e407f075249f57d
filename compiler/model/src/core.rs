//! Names shared by all model elements.
use core::fmt;
use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Returns true if the text can be used verbatim as a C++ identifier.
pub fn is_identifier(text: &str) -> bool {
    IDENTIFIER.is_match(text)
}

/// A name together with the modules that enclose it.
///
/// The namespace is ordered from the outermost module to the innermost.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub namespace: Vec<String>,
    pub name: String,
}

impl QualifiedName {
    /// Creates a name at global scope.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            namespace: vec![],
            name: name.into(),
        }
    }

    /// Places the name inside the modules.
    pub fn in_namespace<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespace = modules.into_iter().map(Into::into).collect();
        self
    }

    /// Joins the modules and the name with underscores, for example
    /// `A_B_name`. Used where the target has no namespace support.
    pub fn flattened(&self) -> String {
        let mut parts: Vec<&str> = self.namespace.iter().map(String::as_str).collect();
        parts.push(&self.name);
        parts.join("_")
    }

    /// Iterates the modules and then the name.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.namespace
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()))
    }
}

impl From<&str> for QualifiedName {
    /// Splits a `::` separated path into modules and name.
    fn from(path: &str) -> Self {
        let mut parts: Vec<String> = path.split("::").map(String::from).collect();
        let name = parts.pop().unwrap_or_default();
        Self {
            namespace: parts,
            name,
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for module in &self.namespace {
            write!(f, "{}::", module)?;
        }
        f.write_str(&self.name)
    }
}
