//! Auto-mapping of entity properties
//!
//! An [`AutoMapper`] looks at one property at a time: it first decides
//! whether it is responsible for the property, then adds a mapping for it to
//! the class-level container. [`ColumnAutoMapper`] handles properties that
//! become plain columns.

mod column;

pub use column::{
    ColumnAutoMapper, apply_default_attributes, build_property_mapping,
    is_mappable_to_column_type,
};

use crate::models::{EntityMapping, PropertyDescriptor};

/// Per-property auto-mapping step
pub trait AutoMapper {
    /// Whether this mapper handles `property`
    fn maps_property(&self, property: &PropertyDescriptor) -> bool;

    /// Add a mapping for `property` to `container`, or do nothing if the
    /// container does not own the property
    fn map(&self, container: &mut dyn EntityMapping, property: &PropertyDescriptor);
}
