//! Type references for entity and value types
//!
//! A [`TypeRef`] is a cheap, shareable handle to type metadata supplied by the
//! host type system. Only the facts the auto-mapper needs are carried: a
//! namespace, a name and an optional base type for subtype checks.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Namespace holding the built-in primitive types
pub const CORE_NAMESPACE: &str = "core";

/// Namespace of the legacy image type
pub const DRAWING_NAMESPACE: &str = "drawing";

/// Type metadata behind a [`TypeRef`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Namespace (e.g., "core", "shop.domain")
    pub namespace: String,
    /// Simple type name (e.g., "Int32", "Customer")
    pub name: String,
    /// Direct base type, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<TypeRef>,
}

/// Shared reference to a type
///
/// Two references are equal when their full names are equal.
///
/// # Example
///
/// ```rust
/// use orm_automap::models::TypeRef;
///
/// let entity = TypeRef::new("shop", "Entity");
/// let customer = TypeRef::with_base("shop", "Customer", entity.clone());
///
/// assert!(customer.is_assignable_to(&entity));
/// assert!(!entity.is_assignable_to(&customer));
/// assert!(TypeRef::int32().is_core());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(Arc<TypeInfo>);

impl TypeRef {
    /// Create a reference to a type without a base type
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self(Arc::new(TypeInfo {
            namespace: namespace.into(),
            name: name.into(),
            base: None,
        }))
    }

    /// Create a reference to a type deriving from `base`
    pub fn with_base(namespace: impl Into<String>, name: impl Into<String>, base: TypeRef) -> Self {
        Self(Arc::new(TypeInfo {
            namespace: namespace.into(),
            name: name.into(),
            base: Some(base),
        }))
    }

    /// Create a reference to a built-in type in the core namespace
    pub fn core(name: impl Into<String>) -> Self {
        Self::new(CORE_NAMESPACE, name)
    }

    pub fn boolean() -> Self {
        Self::core("Boolean")
    }

    pub fn byte() -> Self {
        Self::core("Byte")
    }

    pub fn int16() -> Self {
        Self::core("Int16")
    }

    pub fn int32() -> Self {
        Self::core("Int32")
    }

    pub fn int64() -> Self {
        Self::core("Int64")
    }

    pub fn single() -> Self {
        Self::core("Single")
    }

    pub fn double() -> Self {
        Self::core("Double")
    }

    pub fn decimal() -> Self {
        Self::core("Decimal")
    }

    pub fn string() -> Self {
        Self::core("String")
    }

    pub fn char() -> Self {
        Self::core("Char")
    }

    pub fn date_time() -> Self {
        Self::core("DateTime")
    }

    pub fn time_span() -> Self {
        Self::core("TimeSpan")
    }

    pub fn guid() -> Self {
        Self::core("Guid")
    }

    pub fn byte_array() -> Self {
        Self::core("Byte[]")
    }

    /// The legacy bitmap image type
    pub fn bitmap() -> Self {
        Self::new(DRAWING_NAMESPACE, "Bitmap")
    }

    pub fn namespace(&self) -> &str {
        &self.0.namespace
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn base(&self) -> Option<&TypeRef> {
        self.0.base.as_ref()
    }

    /// Namespace-qualified name, e.g. `core.Int32`
    pub fn full_name(&self) -> String {
        if self.0.namespace.is_empty() {
            self.0.name.clone()
        } else {
            format!("{}.{}", self.0.namespace, self.0.name)
        }
    }

    /// Whether the type lives in the built-in core namespace
    pub fn is_core(&self) -> bool {
        self.0.namespace == CORE_NAMESPACE
    }

    /// Whether a value of this type can be used where `other` is expected,
    /// i.e. `other` is this type or one of its ancestors
    pub fn is_assignable_to(&self, other: &TypeRef) -> bool {
        self.ancestry().any(|t| t == other)
    }

    /// This type followed by its base chain, nearest first
    pub fn ancestry(&self) -> impl Iterator<Item = &TypeRef> {
        std::iter::successors(Some(self), |t| t.base())
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.namespace == other.0.namespace && self.0.name == other.0.name)
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.namespace.hash(state);
        self.0.name.hash(state);
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(TypeRef::int32().full_name(), "core.Int32");
        assert_eq!(TypeRef::bitmap().full_name(), "drawing.Bitmap");
        assert_eq!(TypeRef::new("", "Loose").full_name(), "Loose");
    }

    #[test]
    fn test_equality_is_by_name() {
        assert_eq!(TypeRef::string(), TypeRef::core("String"));
        assert_ne!(TypeRef::string(), TypeRef::new("text", "String"));
    }

    #[test]
    fn test_subtype_walks_base_chain() {
        let entity = TypeRef::new("shop", "Entity");
        let person = TypeRef::with_base("shop", "Person", entity.clone());
        let customer = TypeRef::with_base("shop", "Customer", person.clone());

        assert!(customer.is_assignable_to(&customer));
        assert!(customer.is_assignable_to(&person));
        assert!(customer.is_assignable_to(&entity));
        assert!(!person.is_assignable_to(&customer));
        assert_eq!(customer.ancestry().count(), 3);
    }

    #[test]
    fn test_core_namespace() {
        assert!(TypeRef::date_time().is_core());
        assert!(!TypeRef::bitmap().is_core());
        assert!(!TypeRef::new("shop", "Money").is_core());
    }

    #[test]
    fn test_serializes_nested_base() {
        let derived = TypeRef::with_base("shop", "Customer", TypeRef::new("shop", "Entity"));
        let json = serde_json::to_value(&derived).unwrap();
        assert_eq!(json["name"], "Customer");
        assert_eq!(json["base"]["name"], "Entity");

        let back: TypeRef = serde_json::from_value(json).unwrap();
        assert_eq!(back, derived);
        assert!(back.base().is_some());
    }
}
