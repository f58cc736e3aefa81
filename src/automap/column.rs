//! Column auto-mapping
//!
//! Decides for each property whether it maps to a plain column and, if so,
//! builds its [`PropertyMapping`] with default name, type and column.

use tracing::{debug, info};

use super::AutoMapper;
use crate::config::AutomapConfig;
use crate::conventions::{
    Capability, ConventionFinder, ProbeMapping, PropertyInspector, apply_property_conventions,
};
use crate::models::{
    ColumnMapping, EntityMapping, PropertyAttribute, PropertyDescriptor, PropertyMapping, TypeRef,
};

/// Non-core types that still map to a single column. Closed list.
const LEGACY_COLUMN_TYPES: &[&str] = &["drawing.Bitmap"];

/// Whether values of `value_type` can be stored in a plain column
pub fn is_mappable_to_column_type(value_type: &TypeRef) -> bool {
    if value_type.is_core() {
        return true;
    }
    let full_name = value_type.full_name();
    LEGACY_COLUMN_TYPES.iter().any(|legacy| *legacy == full_name)
}

/// Build the mapping for `property` as owned by `entity_type`, with defaults
///
/// The single default column and the name/type defaults are written at
/// default level; explicit configuration layered on later takes precedence.
pub fn build_property_mapping(entity_type: TypeRef, property: PropertyDescriptor) -> PropertyMapping {
    let mut mapping = PropertyMapping::new(entity_type, property);
    mapping.add_default_column(ColumnMapping::named(mapping.property.name()));
    apply_default_attributes(&mut mapping);
    mapping
}

/// Default the display name and value type unless they were specified
pub fn apply_default_attributes(mapping: &mut PropertyMapping) {
    if !mapping.is_specified(PropertyAttribute::Name) {
        let name = mapping.property.name().to_string();
        mapping.name.set_default(name);
    }

    if !mapping.is_specified(PropertyAttribute::Type) {
        let value_type = mapping.property.value_type().clone();
        mapping.value_type.set_default(value_type);
    }
}

/// Auto-mapper for properties that map to columns
///
/// # Example
///
/// ```rust
/// use orm_automap::automap::ColumnAutoMapper;
/// use orm_automap::conventions::ConventionRegistry;
/// use orm_automap::models::{ClassMapping, EntityMapping, PropertyDescriptor, TypeRef};
///
/// let person = TypeRef::new("shop", "Person");
/// let age = PropertyDescriptor::new(person.clone(), "Age", TypeRef::int32());
///
/// let mapper = ColumnAutoMapper::new(ConventionRegistry::new());
/// let mut class = ClassMapping::new(person);
///
/// assert!(mapper.maps_property(&age));
/// mapper.map(&mut class, &age);
/// assert_eq!(class.properties()[0].columns()[0].name(), Some("Age"));
/// ```
#[derive(Debug, Clone)]
pub struct ColumnAutoMapper<F> {
    finder: F,
    config: AutomapConfig,
}

impl<F: ConventionFinder> ColumnAutoMapper<F> {
    /// Create a mapper with default configuration
    pub fn new(finder: F) -> Self {
        Self::with_config(finder, AutomapConfig::default())
    }

    /// Create a mapper with custom configuration
    pub fn with_config(finder: F, config: AutomapConfig) -> Self {
        Self { finder, config }
    }

    pub fn config(&self) -> &AutomapConfig {
        &self.config
    }

    pub fn finder(&self) -> &F {
        &self.finder
    }

    /// Whether `property` should be mapped to a column
    pub fn maps_property(&self, property: &PropertyDescriptor) -> bool {
        if self.config.is_ignored(property.name()) {
            debug!(property = property.name(), "Property ignored by configuration");
            return false;
        }

        let user_types_allowed = property.can_write() || self.config.map_read_only_user_types;
        if user_types_allowed && self.has_user_type_convention(property) {
            return true;
        }

        if property.can_write() {
            let mappable = is_mappable_to_column_type(property.value_type());
            debug!(
                property = property.name(),
                value_type = %property.value_type(),
                mappable,
                "Checked column type"
            );
            return mappable;
        }

        debug!(property = property.name(), "Read-only property without user type");
        false
    }

    /// Whether some user-type convention would accept `property`
    fn has_user_type_convention(&self, property: &PropertyDescriptor) -> bool {
        let probe = ProbeMapping::new(property);
        let inspector = PropertyInspector::from_probe(&probe);

        let matched = self
            .finder
            .find(Capability::Property)
            .filter(|c| c.is_user_type())
            .find(|c| c.accepts(&inspector));

        match matched {
            Some(convention) => {
                debug!(
                    property = property.name(),
                    convention = convention.name(),
                    "User-type convention applies"
                );
                true
            }
            None => false,
        }
    }

    /// Add a mapping for `property` to `container` if the container's entity
    /// declares it. Inherited properties are left to the ancestor's mapping.
    ///
    /// The added mapping carries only the defaults from
    /// [`build_property_mapping`]; conventions run in a separate pass.
    pub fn map(&self, container: &mut dyn EntityMapping, property: &PropertyDescriptor) {
        if property.declaring_type() != container.entity_type() {
            debug!(
                property = property.name(),
                declaring_type = %property.declaring_type(),
                entity_type = %container.entity_type(),
                "Skipping property declared on another type"
            );
            return;
        }

        let mapping = build_property_mapping(container.entity_type().clone(), property.clone());
        container.add_property(mapping);
    }

    /// Map every mappable property declared by the container's entity.
    /// Returns the number of properties added.
    pub fn map_properties(
        &self,
        container: &mut dyn EntityMapping,
        properties: &[PropertyDescriptor],
    ) -> usize {
        let before = container.properties().len();
        for property in properties {
            if self.maps_property(property) {
                self.map(container, property);
            }
        }
        container.properties().len() - before
    }

    /// Run property conventions over every mapping in `container` and the
    /// subclasses beneath it. Returns the number of conventions applied.
    pub fn apply_conventions(&self, container: &mut dyn EntityMapping) -> usize {
        let mut applied = 0;
        for mapping in container.properties_mut() {
            applied += apply_property_conventions(&self.finder, mapping);
        }
        for child in container.children_mut() {
            applied += self.apply_conventions(child);
        }
        applied
    }

    /// Map `properties` into a class mapping and every subclass beneath it,
    /// then run the convention pass unless disabled by configuration.
    ///
    /// `properties` may include inherited ones; each lands only in the
    /// container of the type that declares it. Returns the number of
    /// properties added.
    pub fn map_hierarchy(
        &self,
        root: &mut dyn EntityMapping,
        properties: &[PropertyDescriptor],
    ) -> usize {
        let entity = root.entity_type().full_name();
        let added = self.map_subtree(root, properties);
        let conventions = if self.config.apply_conventions {
            self.apply_conventions(root)
        } else {
            0
        };
        info!(
            entity = %entity,
            properties = added,
            conventions,
            "Auto-mapped class hierarchy"
        );
        added
    }

    fn map_subtree(&self, container: &mut dyn EntityMapping, properties: &[PropertyDescriptor]) -> usize {
        let mut added = self.map_properties(container, properties);
        for child in container.children_mut() {
            added += self.map_subtree(child, properties);
        }
        added
    }
}

impl<F: ConventionFinder> AutoMapper for ColumnAutoMapper<F> {
    fn maps_property(&self, property: &PropertyDescriptor) -> bool {
        ColumnAutoMapper::maps_property(self, property)
    }

    fn map(&self, container: &mut dyn EntityMapping, property: &PropertyDescriptor) {
        ColumnAutoMapper::map(self, container, property)
    }
}
