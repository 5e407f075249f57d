//! The complete input of one code generation run.
use crate::constants::ConstantDefinition;
use crate::enums::EnumDefinition;
use crate::topology::TopologyDefinition;

/// Resolved enumerations, constants and topologies in model order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub enums: Vec<EnumDefinition>,
    pub constants: Vec<ConstantDefinition>,
    pub topologies: Vec<TopologyDefinition>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enum(mut self, definition: EnumDefinition) -> Self {
        self.enums.push(definition);
        self
    }

    pub fn with_constant(mut self, definition: ConstantDefinition) -> Self {
        self.constants.push(definition);
        self
    }

    pub fn with_topology(mut self, definition: TopologyDefinition) -> Self {
        self.topologies.push(definition);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.constants.is_empty() && self.topologies.is_empty()
    }
}
