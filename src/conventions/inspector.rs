//! Read-only inspection of property mappings
//!
//! Criteria and conventions never touch a mapping directly; they see an
//! inspector. A [`PropertyInspector`] can be built from a finished
//! [`PropertyMapping`] or from a [`ProbeMapping`], the lightweight stand-in
//! used to ask whether a convention would apply before any mapping exists.

use crate::models::{PropertyDescriptor, PropertyMapping, TypeRef};

/// Target of acceptance criteria
pub trait Inspector {
    /// Entity type owning the inspected element
    fn entity_type(&self) -> &TypeRef;

    /// Name of the inspected element
    fn name(&self) -> &str;

    /// Value type of the inspected element, if it has one
    fn value_type(&self) -> Option<&TypeRef>;
}

/// Placeholder for a property that has not been mapped yet
///
/// Carries only the declaring type and the descriptor. It has no columns and
/// no attributes and can never be added to a class mapping.
#[derive(Debug, Clone, Copy)]
pub struct ProbeMapping<'a> {
    property: &'a PropertyDescriptor,
}

impl<'a> ProbeMapping<'a> {
    pub fn new(property: &'a PropertyDescriptor) -> Self {
        Self { property }
    }

    pub fn property(&self) -> &'a PropertyDescriptor {
        self.property
    }
}

/// Read-only view of a property mapping
#[derive(Debug, Clone)]
pub struct PropertyInspector {
    entity_type: TypeRef,
    property: PropertyDescriptor,
    value_type: TypeRef,
    display_name: Option<String>,
    columns: Vec<String>,
}

impl PropertyInspector {
    /// Inspect a probe; the value type is the property's declared type
    pub fn from_probe(probe: &ProbeMapping<'_>) -> Self {
        let property = probe.property();
        Self {
            entity_type: property.declaring_type().clone(),
            property: property.clone(),
            value_type: property.value_type().clone(),
            display_name: None,
            columns: Vec::new(),
        }
    }

    /// Inspect a real mapping, using its current value type when set
    pub fn from_mapping(mapping: &PropertyMapping) -> Self {
        let value_type = mapping
            .value_type()
            .unwrap_or_else(|| mapping.property.value_type())
            .clone();
        Self {
            entity_type: mapping.containing_entity_type.clone(),
            property: mapping.property.clone(),
            value_type,
            display_name: mapping.display_name().map(str::to_string),
            columns: mapping
                .columns()
                .iter()
                .filter_map(|c| c.name().map(str::to_string))
                .collect(),
        }
    }

    pub fn property(&self) -> &PropertyDescriptor {
        &self.property
    }

    /// The type that declares the property
    pub fn declaring_type(&self) -> &TypeRef {
        self.property.declaring_type()
    }

    /// Current value-type reference
    pub fn property_type(&self) -> &TypeRef {
        &self.value_type
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Names of the effective columns; empty for a probe
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn is_read_only(&self) -> bool {
        !self.property.can_write()
    }
}

impl Inspector for PropertyInspector {
    fn entity_type(&self) -> &TypeRef {
        &self.entity_type
    }

    fn name(&self) -> &str {
        self.property.name()
    }

    fn value_type(&self) -> Option<&TypeRef> {
        Some(&self.value_type)
    }
}
