//! Class-level mapping containers
//!
//! Class, subclass and joined-subclass mappings all accumulate property
//! mappings for one entity type. The [`EntityMapping`] trait is the single
//! capability the auto-mapper needs from them.

use serde::{Deserialize, Serialize};

use super::attribute::Attribute;
use super::property_mapping::PropertyMapping;
use super::types::TypeRef;

/// A mapping container for one entity type
pub trait EntityMapping {
    /// The entity type this container maps
    fn entity_type(&self) -> &TypeRef;

    /// Add a property mapping owned by this container
    fn add_property(&mut self, mapping: PropertyMapping);

    /// Property mappings added so far, in insertion order
    fn properties(&self) -> &[PropertyMapping];

    fn properties_mut(&mut self) -> &mut [PropertyMapping];

    /// Nested subclass containers, for walking a hierarchy
    fn children_mut(&mut self) -> Vec<&mut dyn EntityMapping> {
        Vec::new()
    }

    /// Look up a property mapping by property name
    fn property(&self, name: &str) -> Option<&PropertyMapping> {
        self.properties().iter().find(|p| p.property.name() == name)
    }
}

/// Root class mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMapping {
    pub entity_type: TypeRef,
    /// Table name, defaulted to the entity name
    pub table_name: Attribute<String>,
    #[serde(default)]
    pub properties: Vec<PropertyMapping>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subclasses: Vec<SubclassMapping>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub joined_subclasses: Vec<JoinedSubclassMapping>,
}

impl ClassMapping {
    pub fn new(entity_type: TypeRef) -> Self {
        let table_name = Attribute::Default(entity_type.name().to_string());
        Self {
            entity_type,
            table_name,
            properties: Vec::new(),
            subclasses: Vec::new(),
            joined_subclasses: Vec::new(),
        }
    }

    /// Add a table-per-hierarchy subclass
    pub fn with_subclass(mut self, subclass: SubclassMapping) -> Self {
        self.subclasses.push(subclass);
        self
    }

    /// Add a table-per-subclass joined subclass
    pub fn with_joined_subclass(mut self, subclass: JoinedSubclassMapping) -> Self {
        self.joined_subclasses.push(subclass);
        self
    }
}

impl EntityMapping for ClassMapping {
    fn entity_type(&self) -> &TypeRef {
        &self.entity_type
    }

    fn add_property(&mut self, mapping: PropertyMapping) {
        self.properties.push(mapping);
    }

    fn properties(&self) -> &[PropertyMapping] {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut [PropertyMapping] {
        &mut self.properties
    }

    fn children_mut(&mut self) -> Vec<&mut dyn EntityMapping> {
        let mut children: Vec<&mut dyn EntityMapping> = Vec::new();
        for sub in &mut self.subclasses {
            children.push(sub);
        }
        for sub in &mut self.joined_subclasses {
            children.push(sub);
        }
        children
    }
}

/// Subclass stored in its parent's table, told apart by a discriminator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubclassMapping {
    pub entity_type: TypeRef,
    /// Discriminator value, defaulted to the entity name
    pub discriminator_value: Attribute<String>,
    #[serde(default)]
    pub properties: Vec<PropertyMapping>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subclasses: Vec<SubclassMapping>,
}

impl SubclassMapping {
    pub fn new(entity_type: TypeRef) -> Self {
        let discriminator_value = Attribute::Default(entity_type.name().to_string());
        Self {
            entity_type,
            discriminator_value,
            properties: Vec::new(),
            subclasses: Vec::new(),
        }
    }

    pub fn with_subclass(mut self, subclass: SubclassMapping) -> Self {
        self.subclasses.push(subclass);
        self
    }
}

impl EntityMapping for SubclassMapping {
    fn entity_type(&self) -> &TypeRef {
        &self.entity_type
    }

    fn add_property(&mut self, mapping: PropertyMapping) {
        self.properties.push(mapping);
    }

    fn properties(&self) -> &[PropertyMapping] {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut [PropertyMapping] {
        &mut self.properties
    }

    fn children_mut(&mut self) -> Vec<&mut dyn EntityMapping> {
        self.subclasses
            .iter_mut()
            .map(|s| s as &mut dyn EntityMapping)
            .collect()
    }
}

/// Subclass stored in its own table, joined to the parent by key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedSubclassMapping {
    pub entity_type: TypeRef,
    /// Table name, defaulted to the entity name
    pub table_name: Attribute<String>,
    /// Key column joining back to the parent table
    #[serde(default)]
    pub key_column: Attribute<String>,
    #[serde(default)]
    pub properties: Vec<PropertyMapping>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub joined_subclasses: Vec<JoinedSubclassMapping>,
}

impl JoinedSubclassMapping {
    pub fn new(entity_type: TypeRef) -> Self {
        let table_name = Attribute::Default(entity_type.name().to_string());
        Self {
            entity_type,
            table_name,
            key_column: Attribute::Unset,
            properties: Vec::new(),
            joined_subclasses: Vec::new(),
        }
    }

    pub fn with_key_column(mut self, column: impl Into<String>) -> Self {
        self.key_column.set_explicit(column.into());
        self
    }

    pub fn with_joined_subclass(mut self, subclass: JoinedSubclassMapping) -> Self {
        self.joined_subclasses.push(subclass);
        self
    }
}

impl EntityMapping for JoinedSubclassMapping {
    fn entity_type(&self) -> &TypeRef {
        &self.entity_type
    }

    fn add_property(&mut self, mapping: PropertyMapping) {
        self.properties.push(mapping);
    }

    fn properties(&self) -> &[PropertyMapping] {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut [PropertyMapping] {
        &mut self.properties
    }

    fn children_mut(&mut self) -> Vec<&mut dyn EntityMapping> {
        self.joined_subclasses
            .iter_mut()
            .map(|s| s as &mut dyn EntityMapping)
            .collect()
    }
}
