//! Models module
//!
//! Defines the mapping model the auto-mapper reads and produces: type
//! references, property descriptors, tracked attributes, and the
//! column/property/class mapping containers.

pub mod attribute;
pub mod class;
pub mod column;
pub mod property;
pub mod property_mapping;
pub mod types;

pub use attribute::Attribute;
pub use class::{ClassMapping, EntityMapping, JoinedSubclassMapping, SubclassMapping};
pub use column::ColumnMapping;
pub use property::PropertyDescriptor;
pub use property_mapping::{PropertyAttribute, PropertyMapping};
pub use types::{CORE_NAMESPACE, DRAWING_NAMESPACE, TypeInfo, TypeRef};
