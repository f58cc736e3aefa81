//! Convention engine
//!
//! This module provides:
//! - Read-only inspectors over property mappings and probes
//! - Acceptance criteria built by conventions and evaluated against inspectors
//! - Property and user-type conventions with an explicit kind discriminator
//! - Per-session and process-wide convention registries
//!
//! # Example
//!
//! ```rust
//! use orm_automap::conventions::{Capability, ConventionFinder, ConventionRegistry, UserType};
//! use orm_automap::models::TypeRef;
//!
//! struct MoneyType;
//!
//! impl UserType for MoneyType {
//!     fn type_ref(&self) -> TypeRef {
//!         TypeRef::new("shop.types", "MoneyType")
//!     }
//!
//!     fn returned_type(&self) -> TypeRef {
//!         TypeRef::new("shop", "Money")
//!     }
//! }
//!
//! let mut registry = ConventionRegistry::new();
//! registry.add_user_type(MoneyType).unwrap();
//! assert_eq!(registry.find(Capability::UserType).count(), 1);
//! ```

mod apply;
mod convention;
mod criteria;
mod finder;
mod inspector;
mod instance;

pub use apply::apply_property_conventions;
pub use convention::{
    Capability, Convention, ConventionKind, PropertyConvention, UserType, UserTypeConvention,
};
pub use criteria::{AcceptanceCriteria, Criterion};
pub use finder::{ConventionFinder, ConventionRegistry, global, install_global};
pub use inspector::{Inspector, ProbeMapping, PropertyInspector};
pub use instance::PropertyInstance;
