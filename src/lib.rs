//! ORM Automap - convention-driven column auto-mapping
//!
//! Provides:
//! - A mapping model with tracked defaults vs explicit settings
//! - An acceptance-criteria engine for conventions
//! - Per-session and process-wide convention registries
//! - A column auto-mapper that decides which properties become columns and
//!   builds their default mappings without clobbering user overrides
//!
//! # Example
//!
//! ```rust
//! use orm_automap::{ClassMapping, ColumnAutoMapper, ConventionRegistry, EntityMapping};
//! use orm_automap::models::{PropertyDescriptor, TypeRef};
//!
//! let person = TypeRef::new("shop", "Person");
//! let properties = vec![
//!     PropertyDescriptor::new(person.clone(), "Age", TypeRef::int32()),
//!     PropertyDescriptor::read_only(person.clone(), "Description", TypeRef::int32()),
//! ];
//!
//! let mapper = ColumnAutoMapper::new(ConventionRegistry::new());
//! let mut class = ClassMapping::new(person);
//! let added = mapper.map_hierarchy(&mut class, &properties);
//!
//! assert_eq!(added, 1);
//! assert!(class.property("Age").is_some());
//! ```

pub mod automap;
pub mod config;
pub mod conventions;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use automap::{AutoMapper, ColumnAutoMapper, is_mappable_to_column_type};
pub use config::AutomapConfig;
pub use conventions::{
    AcceptanceCriteria, Capability, Convention, ConventionFinder, ConventionRegistry,
    PropertyConvention, PropertyInspector, PropertyInstance, UserType, UserTypeConvention,
};
pub use error::{AutomapError, AutomapResult};

// Re-export models
pub use models::{
    Attribute, ClassMapping, ColumnMapping, EntityMapping, JoinedSubclassMapping,
    PropertyAttribute, PropertyDescriptor, PropertyMapping, SubclassMapping, TypeRef,
};
