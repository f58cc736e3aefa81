//! Property mapping model

use serde::{Deserialize, Serialize};

use super::attribute::Attribute;
use super::column::ColumnMapping;
use super::property::PropertyDescriptor;
use super::types::TypeRef;

/// Selector for the configurable attributes of a [`PropertyMapping`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyAttribute {
    /// Display name of the mapped property
    Name,
    /// Value type (or custom user type) used to persist the property
    Type,
    /// Access strategy (e.g., "field", "property")
    Access,
    /// Whether the column is included in INSERT statements
    Insert,
    /// Whether the column is included in UPDATE statements
    Update,
    /// Whether the value is loaded lazily
    Lazy,
}

impl std::fmt::Display for PropertyAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyAttribute::Name => write!(f, "name"),
            PropertyAttribute::Type => write!(f, "type"),
            PropertyAttribute::Access => write!(f, "access"),
            PropertyAttribute::Insert => write!(f, "insert"),
            PropertyAttribute::Update => write!(f, "update"),
            PropertyAttribute::Lazy => write!(f, "lazy"),
        }
    }
}

/// Mapping of one entity property to one or more columns
///
/// Default columns are kept apart from explicitly configured ones. As soon as
/// an explicit column is added, it shadows the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMapping {
    /// Entity type whose mapping owns this property
    pub containing_entity_type: TypeRef,
    /// The reflected property
    pub property: PropertyDescriptor,
    /// Display name of the mapped property
    #[serde(default)]
    pub name: Attribute<String>,
    /// Value type used to persist the property
    #[serde(default)]
    pub value_type: Attribute<TypeRef>,
    /// Access strategy
    #[serde(default)]
    pub access: Attribute<String>,
    /// Include in INSERT statements
    #[serde(default)]
    pub insert: Attribute<bool>,
    /// Include in UPDATE statements
    #[serde(default)]
    pub update: Attribute<bool>,
    /// Load lazily
    #[serde(default)]
    pub lazy: Attribute<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    default_columns: Vec<ColumnMapping>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    columns: Vec<ColumnMapping>,
}

impl PropertyMapping {
    /// Create a mapping with no attributes set and no columns
    pub fn new(containing_entity_type: TypeRef, property: PropertyDescriptor) -> Self {
        Self {
            containing_entity_type,
            property,
            name: Attribute::Unset,
            value_type: Attribute::Unset,
            access: Attribute::Unset,
            insert: Attribute::Unset,
            update: Attribute::Unset,
            lazy: Attribute::Unset,
            default_columns: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Whether an attribute was explicitly specified
    pub fn is_specified(&self, attribute: PropertyAttribute) -> bool {
        match attribute {
            PropertyAttribute::Name => self.name.is_specified(),
            PropertyAttribute::Type => self.value_type.is_specified(),
            PropertyAttribute::Access => self.access.is_specified(),
            PropertyAttribute::Insert => self.insert.is_specified(),
            PropertyAttribute::Update => self.update.is_specified(),
            PropertyAttribute::Lazy => self.lazy.is_specified(),
        }
    }

    /// Explicitly set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name.set_explicit(name.into());
        self
    }

    /// Explicitly set the value type
    pub fn with_type(mut self, value_type: TypeRef) -> Self {
        self.value_type.set_explicit(value_type);
        self
    }

    /// Explicitly add a column
    pub fn with_column(mut self, column: ColumnMapping) -> Self {
        self.add_column(column);
        self
    }

    /// Add a column that is only used while no explicit column exists
    pub fn add_default_column(&mut self, column: ColumnMapping) {
        self.default_columns.push(column);
    }

    /// Add an explicitly configured column
    pub fn add_column(&mut self, column: ColumnMapping) {
        self.columns.push(column);
    }

    /// Effective columns: explicit ones if any, otherwise the defaults
    pub fn columns(&self) -> &[ColumnMapping] {
        if self.columns.is_empty() {
            &self.default_columns
        } else {
            &self.columns
        }
    }

    /// Mutable access to the effective columns
    pub fn columns_mut(&mut self) -> &mut [ColumnMapping] {
        if self.columns.is_empty() {
            &mut self.default_columns
        } else {
            &mut self.columns
        }
    }

    pub fn has_explicit_columns(&self) -> bool {
        !self.columns.is_empty()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.name.value().map(String::as_str)
    }

    pub fn value_type(&self) -> Option<&TypeRef> {
        self.value_type.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age_mapping() -> PropertyMapping {
        let person = TypeRef::new("shop", "Person");
        let age = PropertyDescriptor::new(person.clone(), "Age", TypeRef::int32());
        PropertyMapping::new(person, age)
    }

    #[test]
    fn test_new_mapping_is_empty() {
        let mapping = age_mapping();
        assert!(mapping.columns().is_empty());
        assert!(mapping.display_name().is_none());
        assert!(!mapping.is_specified(PropertyAttribute::Name));
        assert!(!mapping.is_specified(PropertyAttribute::Type));
    }

    #[test]
    fn test_explicit_columns_shadow_defaults() {
        let mut mapping = age_mapping();
        mapping.add_default_column(ColumnMapping::named("Age"));
        assert_eq!(mapping.columns().len(), 1);
        assert!(!mapping.has_explicit_columns());

        mapping.add_column(ColumnMapping::explicit("age_years"));
        mapping.add_column(ColumnMapping::explicit("age_months"));
        let names: Vec<_> = mapping.columns().iter().filter_map(|c| c.name()).collect();
        assert_eq!(names, vec!["age_years", "age_months"]);
    }

    #[test]
    fn test_with_setters_are_explicit() {
        let mapping = age_mapping().with_name("PersonAge").with_type(TypeRef::int64());
        assert!(mapping.is_specified(PropertyAttribute::Name));
        assert!(mapping.is_specified(PropertyAttribute::Type));
        assert!(!mapping.is_specified(PropertyAttribute::Lazy));
        assert_eq!(mapping.value_type(), Some(&TypeRef::int64()));
    }
}
