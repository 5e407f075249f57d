//! Literal constants.
use crate::core::QualifiedName;

/// The name shared by the generated header and definition file that hold
/// every constant.
pub const CONSTANTS_FILE_BASE_NAME: &str = "FppConstants";

/// The value of a constant.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstantValue {
    /// Text. Held unescaped; escaping happens only when code is emitted.
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConstantDefinition {
    pub name: QualifiedName,
    pub value: ConstantValue,
    pub annotation: Option<String>,
}

impl ConstantDefinition {
    pub fn new(name: impl Into<QualifiedName>, value: ConstantValue) -> Self {
        Self {
            name: name.into(),
            value,
            annotation: None,
        }
    }

    pub fn string(name: impl Into<QualifiedName>, text: impl Into<String>) -> Self {
        Self::new(name, ConstantValue::String(text.into()))
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
}
