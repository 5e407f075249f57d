//! Topologies: the component instances of a deployment and the order in
//! which they are wired.
use std::collections::HashMap;

use crate::core::QualifiedName;

/// A component instance within a topology.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentInstance {
    /// Name of the instance, unique within its topology.
    pub name: String,
    /// The C++ type of the component, such as `Svc::CmdDispatcher`.
    pub component_type: QualifiedName,
    /// Resolved base identifier.
    pub base_id: Option<u32>,
    /// Use the special command registration entry point.
    pub special_registration: bool,
    /// Queue depth for components that own a message queue.
    pub queue_size: Option<u32>,
}

impl ComponentInstance {
    pub fn new(name: impl Into<String>, component_type: impl Into<QualifiedName>) -> Self {
        Self {
            name: name.into(),
            component_type: component_type.into(),
            base_id: None,
            special_registration: false,
            queue_size: None,
        }
    }

    pub fn with_base_id(mut self, base_id: u32) -> Self {
        self.base_id = Some(base_id);
        self
    }

    pub fn with_special_registration(mut self) -> Self {
        self.special_registration = true;
        self
    }

    pub fn with_queue_size(mut self, queue_size: u32) -> Self {
        self.queue_size = Some(queue_size);
        self
    }
}

/// Position of an instance in its registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(usize);

impl InstanceId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Returned when an instance name is already registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateInstance {
    pub name: String,
    pub existing: InstanceId,
}

/// Owns the component instances of one topology.
///
/// Instances are kept in insertion order, which is the order of the
/// model, and are also reachable by name. A name maps to exactly one
/// instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstanceRegistry {
    instances: Vec<ComponentInstance>,
    by_name: HashMap<String, InstanceId>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the instance at the end of the registry.
    pub fn insert(&mut self, instance: ComponentInstance) -> Result<InstanceId, DuplicateInstance> {
        if let Some(existing) = self.by_name.get(&instance.name) {
            return Err(DuplicateInstance {
                name: instance.name,
                existing: *existing,
            });
        }
        let id = InstanceId(self.instances.len());
        self.by_name.insert(instance.name.clone(), id);
        self.instances.push(instance);
        Ok(id)
    }

    pub fn get(&self, name: &str) -> Option<&ComponentInstance> {
        self.id_of(name).map(|id| &self.instances[id.0])
    }

    pub fn id_of(&self, name: &str) -> Option<InstanceId> {
        self.by_name.get(name).copied()
    }

    /// Iterates the instances in model order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentInstance> {
        self.instances.iter()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl std::ops::Index<InstanceId> for InstanceRegistry {
    type Output = ComponentInstance;

    fn index(&self, id: InstanceId) -> &ComponentInstance {
        &self.instances[id.0]
    }
}

/// A topology and the state type passed through setup and teardown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopologyDefinition {
    pub name: QualifiedName,
    pub state_type: String,
    pub instances: InstanceRegistry,
}

impl TopologyDefinition {
    pub fn new(name: impl Into<QualifiedName>, state_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state_type: state_type.into(),
            instances: InstanceRegistry::new(),
        }
    }

    /// The name shared by the generated header and definition file.
    pub fn file_base_name(&self) -> String {
        format!("{}TopologyAc", self.name.name)
    }

    /// Builds a topology from instances in model order.
    pub fn with_instances<I>(mut self, instances: I) -> Result<Self, DuplicateInstance>
    where
        I: IntoIterator<Item = ComponentInstance>,
    {
        for instance in instances {
            self.instances.insert(instance)?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_when_new_names_then_keeps_model_order() {
        let mut registry = InstanceRegistry::new();
        registry.insert(ComponentInstance::new("z", "C")).unwrap();
        registry.insert(ComponentInstance::new("a", "C")).unwrap();

        let names: Vec<&str> = registry.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
        assert_eq!(registry.id_of("a").map(|id| id.index()), Some(1));
    }

    #[test]
    fn insert_when_duplicate_name_then_err_with_existing() {
        let mut registry = InstanceRegistry::new();
        let first = registry.insert(ComponentInstance::new("c1", "C")).unwrap();
        let result = registry.insert(ComponentInstance::new("c1", "D"));

        assert_eq!(
            result,
            Err(DuplicateInstance {
                name: "c1".to_string(),
                existing: first
            })
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry[first].component_type.to_string(), "C");
    }

    #[test]
    fn get_when_registered_then_instance() {
        let topology = TopologyDefinition::new("M::T", "TopologyState")
            .with_instances([ComponentInstance::new("c1", "C").with_base_id(0x100)])
            .unwrap();

        assert_eq!(
            topology.instances.get("c1").and_then(|i| i.base_id),
            Some(0x100)
        );
        assert!(topology.instances.get("c2").is_none());
    }
}
