//! Property descriptors supplied by the host type system

use serde::{Deserialize, Serialize};

use super::types::TypeRef;

/// Describes one property declared on an entity type
///
/// Descriptors are immutable facts about the host type; the auto-mapper
/// only reads them.
///
/// # Example
///
/// ```rust
/// use orm_automap::models::{PropertyDescriptor, TypeRef};
///
/// let person = TypeRef::new("shop", "Person");
/// let age = PropertyDescriptor::new(person.clone(), "Age", TypeRef::int32());
///
/// assert!(age.can_write());
/// assert_eq!(age.declaring_type(), &person);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPropertyDescriptor")]
pub struct PropertyDescriptor {
    declaring_type: TypeRef,
    name: String,
    value_type: TypeRef,
    can_read: bool,
    can_write: bool,
}

impl PropertyDescriptor {
    /// Create a readable and writable property
    pub fn new(declaring_type: TypeRef, name: impl Into<String>, value_type: TypeRef) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "property name must not be empty");
        Self {
            declaring_type,
            name,
            value_type,
            can_read: true,
            can_write: true,
        }
    }

    /// Create a property without a setter
    pub fn read_only(declaring_type: TypeRef, name: impl Into<String>, value_type: TypeRef) -> Self {
        Self::new(declaring_type, name, value_type).with_write(false)
    }

    /// Set whether the property has a getter
    pub fn with_read(mut self, can_read: bool) -> Self {
        self.can_read = can_read;
        self
    }

    /// Set whether the property has a setter
    pub fn with_write(mut self, can_write: bool) -> Self {
        self.can_write = can_write;
        self
    }

    /// The type that declares this property (not a type inheriting it)
    pub fn declaring_type(&self) -> &TypeRef {
        &self.declaring_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type of the property's value
    pub fn value_type(&self) -> &TypeRef {
        &self.value_type
    }

    pub fn can_read(&self) -> bool {
        self.can_read
    }

    pub fn can_write(&self) -> bool {
        self.can_write
    }
}

/// Unchecked wire form, validated on the way into [`PropertyDescriptor`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPropertyDescriptor {
    declaring_type: TypeRef,
    name: String,
    value_type: TypeRef,
    #[serde(default = "default_accessor")]
    can_read: bool,
    #[serde(default = "default_accessor")]
    can_write: bool,
}

fn default_accessor() -> bool {
    true
}

impl TryFrom<RawPropertyDescriptor> for PropertyDescriptor {
    type Error = String;

    fn try_from(raw: RawPropertyDescriptor) -> Result<Self, Self::Error> {
        if raw.name.is_empty() {
            return Err("property name must not be empty".to_string());
        }
        Ok(Self {
            declaring_type: raw.declaring_type,
            name: raw.name,
            value_type: raw.value_type,
            can_read: raw.can_read,
            can_write: raw.can_write,
        })
    }
}
