//! A trait and functions for visiting all elements of a model.
//!
//! To use the visitor, define a struct and implement the `Visitor` trait
//! for the struct. Each trait function calls a free function of the same
//! name that descends into the children, so an implementation can do its
//! own work and then continue the recursion.
//!
//! # Example
//!
//! ```
//! use fppgen_model::enums::EnumDefinition;
//! use fppgen_model::visitor::{visit_enum_definition, Visitor};
//!
//! struct CountEnums {
//!     count: usize,
//! }
//!
//! impl Visitor<()> for CountEnums {
//!     type Value = ();
//!
//!     fn visit_enum_definition(&mut self, node: &EnumDefinition) -> Result<(), ()> {
//!         self.count += 1;
//!         visit_enum_definition(self, node)
//!     }
//! }
//! ```

use paste::paste;

use crate::constants::ConstantDefinition;
use crate::enums::{EnumDefinition, EnumMember};
use crate::model::Model;
use crate::topology::{ComponentInstance, TopologyDefinition};

/// Defines a `Visitor` trait function that dispatches to the free
/// function of the same name:
///
/// ```ignore
/// fn visit_type_name(&mut self, node: &TypeName) -> Result<Self::Value, E> {
///    visit_type_name(self, node)
/// }
/// ```
macro_rules! dispatch {
    ($struct_name:ident) => {
        paste! {
            fn [<visit_ $struct_name:snake>](&mut self, node: &$struct_name) -> Result<Self::Value, E> {
                [<visit_ $struct_name:snake>](self, node)
            }
        }
    };
}

pub trait Visitor<E> {
    type Value: Default;

    /// Visits every element of the model in model order.
    fn walk(&mut self, node: &Model) -> Result<Self::Value, E> {
        visit_model(self, node)
    }

    dispatch!(Model);
    dispatch!(EnumDefinition);
    dispatch!(EnumMember);
    dispatch!(ConstantDefinition);
    dispatch!(TopologyDefinition);
    dispatch!(ComponentInstance);
}

pub fn visit_model<V: Visitor<E> + ?Sized, E>(v: &mut V, node: &Model) -> Result<V::Value, E> {
    for definition in &node.enums {
        v.visit_enum_definition(definition)?;
    }
    for definition in &node.constants {
        v.visit_constant_definition(definition)?;
    }
    for definition in &node.topologies {
        v.visit_topology_definition(definition)?;
    }
    Ok(V::Value::default())
}

pub fn visit_enum_definition<V: Visitor<E> + ?Sized, E>(
    v: &mut V,
    node: &EnumDefinition,
) -> Result<V::Value, E> {
    for member in &node.members {
        v.visit_enum_member(member)?;
    }
    Ok(V::Value::default())
}

pub fn visit_enum_member<V: Visitor<E> + ?Sized, E>(
    _v: &mut V,
    _node: &EnumMember,
) -> Result<V::Value, E> {
    Ok(V::Value::default())
}

pub fn visit_constant_definition<V: Visitor<E> + ?Sized, E>(
    _v: &mut V,
    _node: &ConstantDefinition,
) -> Result<V::Value, E> {
    Ok(V::Value::default())
}

pub fn visit_topology_definition<V: Visitor<E> + ?Sized, E>(
    v: &mut V,
    node: &TopologyDefinition,
) -> Result<V::Value, E> {
    for instance in node.instances.iter() {
        v.visit_component_instance(instance)?;
    }
    Ok(V::Value::default())
}

pub fn visit_component_instance<V: Visitor<E> + ?Sized, E>(
    _v: &mut V,
    _node: &ComponentInstance,
) -> Result<V::Value, E> {
    Ok(V::Value::default())
}
