//! Provides definition for diagnostics, which are the problems found while
//! reading a model document.
//!
//! A diagnostic points either at a position in the document text (for
//! syntax errors) or at an element of the model by its path (for
//! everything found after the document was read).

use std::fmt;

use fppgen_problems::Problem;
use thiserror::Error;

/// A position in the document text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentPosition {
    /// Line (1-indexed)
    pub line: usize,

    /// Column (1-indexed)
    pub column: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    /// A line and column in the document text.
    Document(DocumentPosition),
    /// A path to a model element such as `enum M::E / member X`.
    Element(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Document(pos) => write!(f, "{}:{}", pos.line, pos.column),
            Location::Element(path) => f.write_str(path),
        }
    }
}

/// A label that refers to some location and a message related to that
/// location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    /// The position of label.
    pub location: Location,

    /// A message describing this label.
    pub message: String,
}

impl Label {
    pub fn document(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            location: Location::Document(DocumentPosition { line, column }),
            message: message.into(),
        }
    }

    pub fn element(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: Location::Element(path.into()),
            message: message.into(),
        }
    }
}

/// A diagnostic. Diagnostics have a code that is indicative of the
/// category, a primary location and possibly additional locations.
#[derive(Clone, Debug, Error)]
#[error("{code}: {description} ({})", .primary.location)]
pub struct Diagnostic {
    /// A normally unique value describing the type of diagnostic.
    pub code: String,

    description: String,

    /// The primary or first location.
    pub primary: Label,

    /// Additional descriptions to the constant description.
    pub described: Vec<String>,

    /// Additional locations related to the problem.
    pub secondary: Vec<Label>,
}

impl Diagnostic {
    /// Creates a diagnostic from the problem code and with the specified label.
    pub fn problem(problem: Problem, primary: Label) -> Self {
        Self {
            code: problem.code().to_string(),
            description: problem.message().to_string(),
            primary,
            described: vec![],
            secondary: vec![],
        }
    }

    /// Adds to the problem description additional context about the
    /// problem that is not tied to a location.
    pub fn with_context(mut self, description: &str, item: &str) -> Self {
        self.described.push(format!("{}={}", description, item));
        self
    }

    /// Adds a secondary location to the diagnostic.
    pub fn with_secondary(mut self, label: Label) -> Self {
        self.secondary.push(label);
        self
    }

    /// Returns the description of the problem including any added context.
    pub fn description(&self) -> String {
        if self.described.is_empty() {
            return self.description.clone();
        }
        format!("{} ({})", self.description, self.described.join(", "))
    }
}
